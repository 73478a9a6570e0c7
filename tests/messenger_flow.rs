//! End-to-end flows through the public core API: build an `App`, feed it
//! actions, check what a user would see.

use std::io::Write;

use chrono::{DateTime, Local, TimeZone};
use parley::Screen;
use parley::core::admin::{AdminPage, ChatRowStatus, UserStatus};
use parley::core::clock::Clock;
use parley::core::seed::SeedData;
use parley::core::window::ComposerAffordance;
use parley::core::{Action, App, Effect, update};

// ============================================================================
// Helper Functions
// ============================================================================

struct FixedClock(DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

fn app_at(hour: u32, minute: u32) -> App {
    let now = Local.with_ymd_and_hms(2024, 3, 5, hour, minute, 0).unwrap();
    App::new(SeedData::builtin(), Box::new(FixedClock(now)))
}

fn run(app: &mut App, actions: impl IntoIterator<Item = Action>) {
    for action in actions {
        assert_eq!(update(app, action), Effect::None);
    }
}

// ============================================================================
// Messenger
// ============================================================================

#[test]
fn test_search_open_compose_send() {
    let mut app = app_at(18, 45);
    run(
        &mut app,
        [
            Action::SidebarSearch("ПЕТРОВ".to_string()),
        ],
    );
    let visible: Vec<_> = app.visible_chats().iter().map(|c| c.id).collect();
    assert_eq!(visible, vec![2]);

    run(
        &mut app,
        [
            Action::SelectChat(2),
            Action::DraftChanged("Давай в восемь".to_string()),
        ],
    );
    assert_eq!(app.window.affordance(), ComposerAffordance::Send);

    run(&mut app, [Action::SendMessage]);
    let last = app.current_messages().last().unwrap();
    assert_eq!(last.text, "Давай в восемь");
    assert_eq!(last.time, "18:45");
    assert!(last.is_own);
    assert_eq!(app.window.draft(), "");
    assert_eq!(app.window.affordance(), ComposerAffordance::Voice);
}

#[test]
fn test_sends_in_one_tick_get_distinct_ids() {
    let mut app = app_at(9, 0);
    run(&mut app, [Action::SelectChat(4)]);
    for text in ["раз", "два", "три"] {
        run(
            &mut app,
            [Action::DraftChanged(text.to_string()), Action::SendMessage],
        );
    }
    let ids: Vec<_> = app.current_messages().iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_hover_and_reaction_slots() {
    let mut app = app_at(12, 0);
    run(
        &mut app,
        [
            Action::SelectChat(2),
            Action::PointerEnter(1),
            Action::PointerEnter(3),
            Action::OpenReactionPicker(2),
        ],
    );
    assert_eq!(app.window.hovered(), Some(3));
    assert_eq!(app.window.reacting(), Some(2));

    // Leaving a message keeps its picker open
    run(&mut app, [Action::PointerLeave]);
    assert_eq!(app.window.reacting(), Some(2));

    run(
        &mut app,
        [Action::React {
            message_id: 2,
            glyph: "🔥".to_string(),
        }],
    );
    assert_eq!(app.window.reacting(), None);
    assert_eq!(app.current_messages()[1].reactions, vec!["👍", "❤️", "🔥"]);
}

#[test]
fn test_switching_chats_clears_pointer_state() {
    let mut app = app_at(12, 0);
    run(
        &mut app,
        [
            Action::SelectChat(2),
            Action::PointerEnter(1),
            Action::OpenReactionPicker(1),
            Action::SelectChat(3),
        ],
    );
    assert_eq!(app.window.hovered(), None);
    assert_eq!(app.window.reacting(), None);
    assert_eq!(app.current_chat().map(|c| c.name.as_str()), Some("Рабочий чат"));
}

#[test]
fn test_unknown_targets_are_ignored() {
    let mut app = app_at(12, 0);
    run(&mut app, [Action::SelectChat(99), Action::SendMessage]);
    assert_eq!(app.selected_chat, None);

    run(
        &mut app,
        [
            Action::SelectChat(1),
            Action::React {
                message_id: 404,
                glyph: "👍".to_string(),
            },
            Action::ToggleUserStatus(404),
        ],
    );
    assert!(app.current_messages().iter().all(|m| m.reactions.is_empty()));
}

// ============================================================================
// Admin
// ============================================================================

#[test]
fn test_admin_moderation_round() {
    let mut app = app_at(12, 0);
    run(
        &mut app,
        [
            Action::SwitchScreen(Screen::Admin),
            Action::OpenAdminPage(AdminPage::Users),
            Action::UserSearch("example.com".to_string()),
            Action::ToggleUserStatus(1),
            Action::ToggleUserStatus(4),
        ],
    );
    assert_eq!(app.screen, Screen::Admin);
    assert_eq!(app.admin.users.filtered().len(), 6);
    assert_eq!(app.admin.users.get(1).unwrap().status, UserStatus::Blocked);
    assert_eq!(app.admin.users.get(4).unwrap().status, UserStatus::Offline);

    run(
        &mut app,
        [
            Action::OpenAdminPage(AdminPage::Chats),
            Action::ToggleChatStatus(6),
        ],
    );
    assert_eq!(app.admin.chats.get(6).unwrap().status, ChatRowStatus::Archived);
    assert_eq!(app.status_message, "Чат 6: Архив");
}

#[test]
fn test_quit() {
    let mut app = app_at(12, 0);
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}

// ============================================================================
// Seed files
// ============================================================================

#[test]
fn test_custom_seed_from_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{"chats": [{{"id": 10, "name": "Тест", "status": "", "last_message": "",
            "time": "09:00", "online": false}}],
            "conversations": [{{"chat_id": 10, "messages": []}}]}}"#
    )
    .unwrap();

    let seed = SeedData::load(file.path()).unwrap();
    let now = Local.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap();
    let mut app = App::new(seed, Box::new(FixedClock(now)));
    run(
        &mut app,
        [
            Action::SelectChat(10),
            Action::DraftChanged("первое".to_string()),
            Action::SendMessage,
        ],
    );
    assert_eq!(app.current_messages().len(), 1);
    assert!(app.admin.users.records().is_empty());
}
