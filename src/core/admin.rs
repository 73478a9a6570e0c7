//! # Admin Tables
//!
//! The Users and Chats pages share one shape: a mutable list of records, a
//! search box, and one action that flips a single status field.
//!
//! ```text
//! users:      blocked → offline,  anything else → blocked
//! chat rows:  archived → active,  anything else → archived
//! ```
//!
//! Neither cycle is an involution on every value: a user starting `active`
//! never returns to `active`, and a `reported` chat row loses its report
//! after one toggle.

use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::dashboard::Dashboard;
use crate::core::filter::SearchQuery;

pub type RecordId = u32;

/// A row that can be listed, searched and toggled by [`AdminTable`].
pub trait Record {
    type Status: Copy + Eq + fmt::Debug;

    fn id(&self) -> RecordId;
    fn status(&self) -> Self::Status;
    fn matches(&self, query: &SearchQuery) -> bool;
    fn toggle_status(&mut self);
}

/// Records plus the search text typed above them.
#[derive(Debug, Clone, Default)]
pub struct AdminTable<R> {
    records: Vec<R>,
    query: SearchQuery,
}

impl<R: Record> AdminTable<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            query: SearchQuery::default(),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query.set(query);
    }

    /// Records matching the query, in list order.
    pub fn filtered(&self) -> Vec<&R> {
        self.records
            .iter()
            .filter(|r| r.matches(&self.query))
            .collect()
    }

    /// Flip the status of `id`. Returns the new status, or `None` for an
    /// unknown id.
    pub fn toggle_status(&mut self, id: RecordId) -> Option<R::Status> {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            debug!("Toggle ignored: no record {}", id);
            return None;
        };
        let before = record.status();
        record.toggle_status();
        let after = record.status();
        info!("Record {} status {:?} -> {:?}", id, before, after);
        Some(after)
    }
}

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Blocked,
    Offline,
}

impl UserStatus {
    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Blocked => UserStatus::Offline,
            UserStatus::Active | UserStatus::Offline => UserStatus::Blocked,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Активен",
            UserStatus::Blocked => "Заблокирован",
            UserStatus::Offline => "Не в сети",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub last_seen: String,
    pub messages: u32,
    pub join_date: String,
}

impl User {
    /// Label of the block action for this user's current status.
    pub fn toggle_label(&self) -> &'static str {
        if self.status == UserStatus::Blocked {
            "Разблокировать"
        } else {
            "Заблокировать"
        }
    }
}

impl Record for User {
    type Status = UserStatus;

    fn id(&self) -> RecordId {
        self.id
    }

    fn status(&self) -> UserStatus {
        self.status
    }

    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_any(&[&self.name, &self.email])
    }

    fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }
}

pub type UserTable = AdminTable<User>;

// ============================================================================
// Chat rows
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Private,
    Group,
    Channel,
}

impl ChatKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChatKind::Private => "Личный",
            ChatKind::Group => "Группа",
            ChatKind::Channel => "Канал",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRowStatus {
    Active,
    Archived,
    /// No action produces this. One toggle archives it.
    Reported,
}

impl ChatRowStatus {
    pub fn toggled(self) -> Self {
        match self {
            ChatRowStatus::Archived => ChatRowStatus::Active,
            ChatRowStatus::Active | ChatRowStatus::Reported => ChatRowStatus::Archived,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChatRowStatus::Active => "Активен",
            ChatRowStatus::Archived => "Архив",
            ChatRowStatus::Reported => "Жалоба",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRow {
    pub id: RecordId,
    pub name: String,
    pub kind: ChatKind,
    pub members: u32,
    pub messages: u32,
    pub last_activity: String,
    pub status: ChatRowStatus,
}

impl ChatRow {
    pub fn toggle_label(&self) -> &'static str {
        if self.status == ChatRowStatus::Archived {
            "Восстановить"
        } else {
            "В архив"
        }
    }
}

impl Record for ChatRow {
    type Status = ChatRowStatus;

    fn id(&self) -> RecordId {
        self.id
    }

    fn status(&self) -> ChatRowStatus {
        self.status
    }

    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches(&self.name)
    }

    fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }
}

pub type ChatTable = AdminTable<ChatRow>;

impl ChatTable {
    /// Count over the whole list, ignoring the search box.
    pub fn count_kind(&self, kind: ChatKind) -> usize {
        self.records.iter().filter(|c| c.kind == kind).count()
    }
}

// ============================================================================
// Navigation
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminPage {
    #[default]
    Dashboard,
    Users,
    Chats,
    Channels,
    Moderation,
    Analytics,
    Settings,
}

impl AdminPage {
    pub const ALL: [AdminPage; 7] = [
        AdminPage::Dashboard,
        AdminPage::Users,
        AdminPage::Chats,
        AdminPage::Channels,
        AdminPage::Moderation,
        AdminPage::Analytics,
        AdminPage::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminPage::Dashboard => "Дашборд",
            AdminPage::Users => "Пользователи",
            AdminPage::Chats => "Чаты",
            AdminPage::Channels => "Каналы",
            AdminPage::Moderation => "Модерация",
            AdminPage::Analytics => "Аналитика",
            AdminPage::Settings => "Настройки",
        }
    }

    /// Only the first three entries have a page behind them.
    pub fn has_page(&self) -> bool {
        matches!(self, AdminPage::Dashboard | AdminPage::Users | AdminPage::Chats)
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(&self) -> AdminPage {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> AdminPage {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Everything behind the admin screen.
pub struct AdminState {
    pub page: AdminPage,
    pub users: UserTable,
    pub chats: ChatTable,
    pub dashboard: Dashboard,
}

impl AdminState {
    pub fn new(users: Vec<User>, chats: Vec<ChatRow>, dashboard: Dashboard) -> Self {
        Self {
            page: AdminPage::default(),
            users: AdminTable::new(users),
            chats: AdminTable::new(chats),
            dashboard,
        }
    }
}
