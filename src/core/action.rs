//! # Actions
//!
//! Everything that can happen in Parley becomes an `Action`.
//! User presses Enter in the composer? That's `Action::SendMessage`.
//! Pointer moves onto a bubble? That's `Action::PointerEnter(id)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state in place. No I/O here; the adapter owns the terminal.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect for the adapter)
//! ```
//!
//! Invalid gestures (blank draft, reaction on a message that is gone,
//! toggling an unknown record) are no-ops. `update()` never fails.

use log::{debug, info};

use crate::Screen;
use crate::core::admin::{AdminPage, RecordId};
use crate::core::chat::{ChatId, MessageId};
use crate::core::sidebar::SidebarTab;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Sidebar
    SelectChat(ChatId),
    SidebarSearch(String),
    SelectTab(SidebarTab),
    ToggleMenu,

    // Chat window
    DraftChanged(String),
    SendMessage,
    PointerEnter(MessageId),
    PointerLeave,
    OpenReactionPicker(MessageId),
    CloseReactionPicker,
    React { message_id: MessageId, glyph: String },

    // Admin
    SwitchScreen(Screen),
    OpenAdminPage(AdminPage),
    UserSearch(String),
    ToggleUserStatus(RecordId),
    ChatSearch(String),
    ToggleChatStatus(RecordId),

    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);

    match action {
        Action::SelectChat(chat_id) => {
            if !app.registry.contains(chat_id) {
                debug!("SelectChat ignored: unknown chat {}", chat_id);
                return Effect::None;
            }
            if app.selected_chat != Some(chat_id) {
                app.window.reset_pointer();
            }
            app.selected_chat = Some(chat_id);
            if let Some(chat) = app.registry.get(chat_id) {
                app.status_message = chat.name.clone();
            }
            Effect::None
        }
        Action::SidebarSearch(query) => {
            app.sidebar.set_query(query);
            Effect::None
        }
        Action::SelectTab(tab) => {
            app.sidebar.active_tab = tab;
            Effect::None
        }
        Action::ToggleMenu => {
            app.sidebar.toggle_menu();
            Effect::None
        }

        Action::DraftChanged(text) => {
            app.window.set_draft(text);
            Effect::None
        }
        Action::SendMessage => {
            let Some(chat_id) = app.selected_chat else {
                debug!("SendMessage ignored: no chat selected");
                return Effect::None;
            };
            let now = app.now();
            if let Some(id) = app
                .window
                .send(&mut app.messages, chat_id, now, &app.time_format)
            {
                info!("Message {} sent to chat {}", id, chat_id);
                app.status_message = String::from("Сообщение отправлено");
            }
            Effect::None
        }
        Action::PointerEnter(message_id) => {
            app.window.pointer_enter(message_id);
            Effect::None
        }
        Action::PointerLeave => {
            app.window.pointer_leave();
            Effect::None
        }
        Action::OpenReactionPicker(message_id) => {
            app.window.open_picker(message_id);
            Effect::None
        }
        Action::CloseReactionPicker => {
            app.window.close_picker();
            Effect::None
        }
        Action::React { message_id, glyph } => {
            let Some(chat_id) = app.selected_chat else {
                app.window.close_picker();
                debug!("React ignored: no chat selected");
                return Effect::None;
            };
            if app
                .window
                .react(&mut app.messages, chat_id, message_id, &glyph)
            {
                info!("Reaction {} on message {} in chat {}", glyph, message_id, chat_id);
            }
            Effect::None
        }

        Action::SwitchScreen(screen) => {
            info!("Switching to {:?}", screen);
            app.screen = screen;
            app.status_message = screen.label().to_string();
            Effect::None
        }
        Action::OpenAdminPage(page) => {
            app.admin.page = page;
            Effect::None
        }
        Action::UserSearch(query) => {
            app.admin.users.set_query(query);
            Effect::None
        }
        Action::ToggleUserStatus(id) => {
            if let Some(status) = app.admin.users.toggle_status(id) {
                app.status_message = format!("Пользователь {}: {}", id, status.label());
            }
            Effect::None
        }
        Action::ChatSearch(query) => {
            app.admin.chats.set_query(query);
            Effect::None
        }
        Action::ToggleChatStatus(id) => {
            if let Some(status) = app.admin.chats.toggle_status(id) {
                app.status_message = format!("Чат {}: {}", id, status.label());
            }
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::admin::{ChatRowStatus, UserStatus};
    use crate::core::window::ComposerAffordance;
    use crate::test_support::test_app;

    fn open(app: &mut App, chat_id: ChatId) {
        update(app, Action::SelectChat(chat_id));
    }

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_select_chat() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::SelectChat(3)), Effect::None);
        assert_eq!(app.selected_chat, Some(3));
        assert_eq!(app.status_message, "Рабочий чат");
    }

    #[test]
    fn test_select_unknown_chat_keeps_selection() {
        let mut app = test_app();
        open(&mut app, 2);
        update(&mut app, Action::SelectChat(42));
        assert_eq!(app.selected_chat, Some(2));
    }

    #[test]
    fn test_switching_chat_resets_pointer_but_keeps_draft() {
        let mut app = test_app();
        open(&mut app, 2);
        update(&mut app, Action::PointerEnter(2));
        update(&mut app, Action::OpenReactionPicker(2));
        update(&mut app, Action::DraftChanged("черновик".to_string()));

        open(&mut app, 3);
        assert_eq!(app.window.hovered(), None);
        assert_eq!(app.window.reacting(), None);
        assert_eq!(app.window.draft(), "черновик");
    }

    #[test]
    fn test_reselecting_same_chat_keeps_picker() {
        let mut app = test_app();
        open(&mut app, 2);
        update(&mut app, Action::OpenReactionPicker(1));
        open(&mut app, 2);
        assert_eq!(app.window.reacting(), Some(1));
    }

    #[test]
    fn test_send_blank_draft_is_noop() {
        let mut app = test_app();
        open(&mut app, 2);
        for blank in ["", "   "] {
            update(&mut app, Action::DraftChanged(blank.to_string()));
            update(&mut app, Action::SendMessage);
            assert_eq!(app.current_messages().len(), 3);
            assert_eq!(app.window.draft(), blank);
        }
        assert_eq!(app.window.affordance(), ComposerAffordance::Voice);
    }

    #[test]
    fn test_send_without_chat_keeps_draft() {
        let mut app = test_app();
        update(&mut app, Action::DraftChanged("привет".to_string()));
        update(&mut app, Action::SendMessage);
        assert_eq!(app.window.draft(), "привет");
    }

    #[test]
    fn test_send_appends_own_message_and_clears_draft() {
        let mut app = test_app();
        open(&mut app, 4);
        update(&mut app, Action::DraftChanged("Привет".to_string()));
        assert_eq!(app.window.affordance(), ComposerAffordance::Send);
        update(&mut app, Action::SendMessage);

        let messages = app.current_messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_own);
        assert_eq!(messages[0].text, "Привет");
        assert_eq!(messages[0].time, "18:45");
        assert!(messages[0].reactions.is_empty());
        assert_eq!(app.window.draft(), "");
    }

    #[test]
    fn test_react_twice_accumulates() {
        let mut app = test_app();
        open(&mut app, 3);
        for _ in 0..2 {
            update(
                &mut app,
                Action::React {
                    message_id: 1,
                    glyph: "🔥".to_string(),
                },
            );
        }
        let message = &app.current_messages()[0];
        assert_eq!(message.reactions, vec!["🔥", "🔥"]);
    }

    #[test]
    fn test_react_on_missing_message_changes_nothing() {
        let mut app = test_app();
        open(&mut app, 2);
        let before = app.current_messages().to_vec();
        update(&mut app, Action::OpenReactionPicker(999));
        update(
            &mut app,
            Action::React {
                message_id: 999,
                glyph: "👍".to_string(),
            },
        );
        assert_eq!(app.current_messages(), before.as_slice());
        assert_eq!(app.window.reacting(), None);
    }

    #[test]
    fn test_hover_and_picker_are_single_slot() {
        let mut app = test_app();
        open(&mut app, 2);
        update(&mut app, Action::PointerEnter(1));
        update(&mut app, Action::PointerEnter(3));
        assert_eq!(app.window.hovered(), Some(3));
        update(&mut app, Action::OpenReactionPicker(1));
        update(&mut app, Action::OpenReactionPicker(2));
        assert_eq!(app.window.reacting(), Some(2));
        update(&mut app, Action::PointerLeave);
        assert_eq!(app.window.hovered(), None);
        assert_eq!(app.window.reacting(), Some(2));
        update(&mut app, Action::CloseReactionPicker);
        assert_eq!(app.window.reacting(), None);
    }

    #[test]
    fn test_sidebar_search_and_chrome() {
        let mut app = test_app();
        update(&mut app, Action::SidebarSearch("АЛЕКСАНДР".to_string()));
        let names: Vec<_> = app.visible_chats().iter().map(|c| c.id).collect();
        assert_eq!(names, vec![2]);

        update(&mut app, Action::SelectTab(SidebarTab::Channels));
        assert_eq!(app.sidebar.active_tab, SidebarTab::Channels);
        // Tabs do not filter the list
        assert_eq!(app.visible_chats().len(), 1);

        update(&mut app, Action::ToggleMenu);
        assert!(app.sidebar.menu_open);
        update(&mut app, Action::ToggleMenu);
        assert!(!app.sidebar.menu_open);

        update(&mut app, Action::SidebarSearch(String::new()));
        assert_eq!(app.visible_chats().len(), 8);
    }

    #[test]
    fn test_switch_screen_and_page() {
        let mut app = test_app();
        update(&mut app, Action::SwitchScreen(Screen::Admin));
        assert_eq!(app.screen, Screen::Admin);
        update(&mut app, Action::OpenAdminPage(AdminPage::Users));
        assert_eq!(app.admin.page, AdminPage::Users);
    }

    #[test]
    fn test_user_toggle_asymmetry() {
        let mut app = test_app();
        // User 4 starts blocked
        update(&mut app, Action::ToggleUserStatus(4));
        update(&mut app, Action::ToggleUserStatus(4));
        assert_eq!(app.admin.users.get(4).map(|u| u.status), Some(UserStatus::Blocked));

        // User 1 starts active
        update(&mut app, Action::ToggleUserStatus(1));
        update(&mut app, Action::ToggleUserStatus(1));
        assert_eq!(app.admin.users.get(1).map(|u| u.status), Some(UserStatus::Offline));
    }

    #[test]
    fn test_chat_toggle_and_search() {
        let mut app = test_app();
        update(&mut app, Action::ToggleChatStatus(6));
        assert_eq!(
            app.admin.chats.get(6).map(|c| c.status),
            Some(ChatRowStatus::Archived)
        );
        update(&mut app, Action::ToggleChatStatus(6));
        assert_eq!(
            app.admin.chats.get(6).map(|c| c.status),
            Some(ChatRowStatus::Active)
        );

        let before = app.status_message.clone();
        update(&mut app, Action::ToggleChatStatus(404));
        assert_eq!(app.status_message, before);

        update(&mut app, Action::ChatSearch("xyz-nothing".to_string()));
        assert!(app.admin.chats.filtered().is_empty());
        assert_eq!(app.admin.chats.records().len(), 7);
    }

    #[test]
    fn test_user_search_matches_email() {
        let mut app = test_app();
        let email = app.admin.users.records()[0].email.to_uppercase();
        update(&mut app, Action::UserSearch(email));
        let ids: Vec<_> = app.admin.users.filtered().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![app.admin.users.records()[0].id]);
    }

    #[test]
    fn test_end_to_end_send_and_react() {
        let mut app = test_app();
        open(&mut app, 2);
        assert_eq!(app.current_chat().map(|c| c.name.as_str()), Some("Александр Петров"));
        assert_eq!(app.current_messages().len(), 3);

        update(&mut app, Action::DraftChanged("Привет".to_string()));
        update(&mut app, Action::SendMessage);
        let messages = app.current_messages();
        assert_eq!(messages.len(), 4);
        assert!(messages[3].is_own);
        assert_eq!(messages[3].text, "Привет");

        let before = app.messages.get(2, 2).map(|m| m.reactions.len()).unwrap_or(0);
        assert_eq!(before, 2);
        update(&mut app, Action::OpenReactionPicker(2));
        update(
            &mut app,
            Action::React {
                message_id: 2,
                glyph: "👍".to_string(),
            },
        );
        let reactions = &app.messages.get(2, 2).map(|m| m.reactions.clone()).unwrap_or_default();
        assert_eq!(reactions.len(), 3);
        assert_eq!(reactions.last().map(String::as_str), Some("👍"));
    }
}
