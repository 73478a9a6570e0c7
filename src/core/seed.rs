//! # Seed Data
//!
//! Everything the app starts with: sidebar chats, message histories, admin
//! users and chat rows, dashboard content. `App::new` takes a `SeedData` by
//! value, so tests and alternative datasets never share process state.
//!
//! A seed file (`.toml` or `.json`) replaces the built-in dataset wholesale.
//! It is only ever read.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::admin::{ChatKind, ChatRow, ChatRowStatus, User, UserStatus};
use crate::core::chat::{Chat, ChatId, Message};
use crate::core::dashboard::{
    Activity, ActivityKind, Dashboard, StatsCard, SummaryCard, TopChat, Trend,
};

/// One chat's message history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub chat_id: ChatId,
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub chats: Vec<Chat>,
    #[serde(default)]
    pub conversations: Vec<Conversation>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub admin_chats: Vec<ChatRow>,
    #[serde(default)]
    pub dashboard: Dashboard,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum SeedError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    UnsupportedFormat(String),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Io(e) => write!(f, "seed I/O error: {e}"),
            SeedError::Toml(e) => write!(f, "seed TOML error: {e}"),
            SeedError::Json(e) => write!(f, "seed JSON error: {e}"),
            SeedError::UnsupportedFormat(ext) => {
                write!(f, "unsupported seed format '{ext}' (expected .toml or .json)")
            }
        }
    }
}

impl std::error::Error for SeedError {}

// ============================================================================
// Loading
// ============================================================================

impl SeedData {
    /// Load a dataset from `path`, picking the parser by extension.
    pub fn load(path: &Path) -> Result<SeedData, SeedError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let contents = fs::read_to_string(path).map_err(SeedError::Io)?;
        let seed: SeedData = match ext.as_str() {
            "toml" => toml::from_str(&contents).map_err(SeedError::Toml)?,
            "json" => serde_json::from_str(&contents).map_err(SeedError::Json)?,
            other => return Err(SeedError::UnsupportedFormat(other.to_string())),
        };

        info!(
            "Loaded seed from {}: {} chats, {} users, {} admin chats",
            path.display(),
            seed.chats.len(),
            seed.users.len(),
            seed.admin_chats.len()
        );
        Ok(seed)
    }

    /// Histories keyed by chat id. A chat listed twice keeps the later list.
    pub fn conversation_map(&self) -> HashMap<ChatId, Vec<Message>> {
        self.conversations
            .iter()
            .map(|c| (c.chat_id, c.messages.clone()))
            .collect()
    }

    /// The built-in mock dataset.
    pub fn builtin() -> SeedData {
        SeedData {
            chats: builtin_chats(),
            conversations: builtin_conversations(),
            users: builtin_users(),
            admin_chats: builtin_admin_chats(),
            dashboard: builtin_dashboard(),
        }
    }
}

// ============================================================================
// Built-in dataset
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn chat(
    id: ChatId,
    name: &str,
    status: &str,
    last_message: &str,
    time: &str,
    avatar: Option<&str>,
    online: bool,
    unread: Option<u32>,
) -> Chat {
    Chat {
        id,
        name: name.to_string(),
        status: status.to_string(),
        last_message: last_message.to_string(),
        time: time.to_string(),
        avatar: avatar.map(String::from),
        online,
        unread,
    }
}

fn builtin_chats() -> Vec<Chat> {
    vec![
        chat(1, "Избранное", "сохраненные сообщения", "Сохраненные сообщения", "12:45", Some("⭐"), false, None),
        chat(2, "Александр Петров", "был(а) в сети недавно", "Привет! Как дела?", "11:30", None, true, Some(3)),
        chat(3, "Рабочий чат", "24 участника", "Встреча в 15:00", "10:15", None, false, Some(12)),
        chat(4, "Мария Иванова", "", "Спасибо за помощь!", "Вчера", None, false, None),
        chat(5, "Семья ❤️", "", "Фото: IMG_2034.jpg", "Вчера", None, false, None),
        chat(6, "Канал новостей", "", "Последние события дня", "Пн", None, false, None),
        chat(7, "Дмитрий Смирнов", "", "Звонок (5:23)", "Пт", None, true, None),
        chat(8, "Книжный клуб", "", "Анна: Отличная книга!", "12/12", None, false, None),
    ]
}

fn message(id: i64, text: &str, time: &str, is_own: bool, reactions: &[&str]) -> Message {
    Message {
        id,
        text: text.to_string(),
        time: time.to_string(),
        is_own,
        reactions: reactions.iter().map(|r| r.to_string()).collect(),
    }
}

fn builtin_conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            chat_id: 1,
            messages: vec![
                message(1, "Важная заметка для себя", "14:30", true, &[]),
                message(2, "Не забыть про встречу завтра", "15:45", true, &[]),
            ],
        },
        Conversation {
            chat_id: 2,
            messages: vec![
                message(1, "Привет! Как дела?", "11:28", false, &[]),
                message(2, "Привет! Всё отлично, спасибо! А у тебя как?", "11:30", true, &["👍", "❤️"]),
                message(3, "Тоже хорошо! Может созвонимся сегодня вечером?", "11:32", false, &[]),
            ],
        },
        Conversation {
            chat_id: 3,
            messages: vec![
                message(1, "Встреча в 15:00", "10:12", false, &[]),
                message(2, "Принято, буду!", "10:15", true, &[]),
            ],
        },
    ]
}

fn user(
    id: u32,
    name: &str,
    email: &str,
    status: UserStatus,
    last_seen: &str,
    messages: u32,
    join_date: &str,
) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        status,
        last_seen: last_seen.to_string(),
        messages,
        join_date: join_date.to_string(),
    }
}

fn builtin_users() -> Vec<User> {
    use UserStatus::*;
    vec![
        user(1, "Александр Петров", "alex@example.com", Active, "Онлайн", 1245, "15.01.2024"),
        user(2, "Мария Иванова", "maria@example.com", Active, "5 минут назад", 892, "20.01.2024"),
        user(3, "Дмитрий Смирнов", "dmitry@example.com", Offline, "2 часа назад", 634, "03.02.2024"),
        user(4, "Елена Козлова", "elena@example.com", Blocked, "Заблокирован", 156, "10.02.2024"),
        user(5, "Игорь Волков", "igor@example.com", Active, "Онлайн", 2134, "25.12.2023"),
        user(6, "Анна Соколова", "anna@example.com", Offline, "1 день назад", 445, "05.03.2024"),
    ]
}

fn chat_row(
    id: u32,
    name: &str,
    kind: ChatKind,
    members: u32,
    messages: u32,
    last_activity: &str,
    status: ChatRowStatus,
) -> ChatRow {
    ChatRow {
        id,
        name: name.to_string(),
        kind,
        members,
        messages,
        last_activity: last_activity.to_string(),
        status,
    }
}

fn builtin_admin_chats() -> Vec<ChatRow> {
    use ChatKind::*;
    use ChatRowStatus::*;
    vec![
        chat_row(1, "Рабочий чат", Group, 24, 1254, "5 мин назад", Active),
        chat_row(2, "Семья ❤️", Group, 5, 892, "10 мин назад", Active),
        chat_row(3, "Канал новостей", Channel, 5420, 234, "1 час назад", Active),
        chat_row(4, "Книжный клуб", Group, 15, 634, "2 часа назад", Active),
        chat_row(5, "IT-сообщество", Group, 89, 2134, "3 часа назад", Active),
        chat_row(6, "Спам-группа", Group, 12, 45, "1 день назад", Reported),
        chat_row(7, "Старый проект", Group, 8, 567, "1 неделю назад", Archived),
    ]
}

fn stats_card(title: &str, value: &str, icon: &str, trend: f32, is_positive: bool) -> StatsCard {
    StatsCard {
        title: title.to_string(),
        value: value.to_string(),
        icon: icon.to_string(),
        trend: Some(Trend {
            value: trend,
            is_positive,
        }),
        description: None,
    }
}

fn activity(id: u32, user: &str, action: &str, time: &str, kind: ActivityKind) -> Activity {
    Activity {
        id,
        user: user.to_string(),
        action: action.to_string(),
        time: time.to_string(),
        kind,
    }
}

fn top_chat(name: &str, messages: u32, members: u32) -> TopChat {
    TopChat {
        name: name.to_string(),
        messages,
        members,
    }
}

fn summary(title: &str, value: &str, caption: &str, percent: u16) -> SummaryCard {
    SummaryCard {
        title: title.to_string(),
        value: value.to_string(),
        caption: caption.to_string(),
        percent,
    }
}

fn builtin_dashboard() -> Dashboard {
    Dashboard {
        stats: vec![
            stats_card("Всего пользователей", "12,845", "Users", 12.5, true),
            stats_card("Активных чатов", "3,421", "MessageSquare", 8.3, true),
            stats_card("Сообщений за день", "45,678", "Send", 5.2, true),
            stats_card("Каналов", "156", "Radio", 2.1, false),
        ],
        activities: vec![
            activity(1, "Александр Петров", "создал новый чат", "2 минуты назад", ActivityKind::Message),
            activity(2, "Мария Иванова", "зарегистрировалась", "15 минут назад", ActivityKind::User),
            activity(3, "Рабочий чат", "получил 45 новых сообщений", "1 час назад", ActivityKind::Message),
            activity(4, "Модератор", "заблокировал пользователя", "2 часа назад", ActivityKind::Warning),
            activity(5, "Канал новостей", "опубликовал новый пост", "3 часа назад", ActivityKind::Channel),
        ],
        top_chats: vec![
            top_chat("Рабочий чат", 1254, 24),
            top_chat("Семья ❤️", 892, 5),
            top_chat("Книжный клуб", 634, 15),
            top_chat("IT-сообщество", 521, 89),
        ],
        summaries: vec![
            summary("Онлайн сейчас", "4,532", "пользователей активны", 65),
            summary("Новых регистраций", "342", "за последние 24 часа", 45),
            summary("Жалобы на модерацию", "23", "требуют проверки", 15),
        ],
    }
}
