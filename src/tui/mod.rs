//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Focus
//!
//! Keys go to whichever region has focus. Tab / Shift+Tab cycle it:
//!
//! ```text
//! Мессенджер:    Sidebar → Messages → Composer
//! Админ-панель:  Nav → Search → Table          (Search/Table on list pages)
//! ```
//!
//! Global keys work from anywhere: Ctrl+C quits, Ctrl+A switches screens,
//! F2 toggles the sidebar menu, F3 cycles the sidebar tabs.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms and only redraws after
//! an event. Pending events are drained before the next draw so a burst of
//! mouse motion costs one frame.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::Position;
use ratatui::widgets::TableState;

use crate::Screen;
use crate::core::action::{Action, Effect, update};
use crate::core::admin::AdminPage;
use crate::core::chat::{ChatId, MessageId};
use crate::core::config::ResolvedConfig;
use crate::core::seed::SeedData;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::admin::nav::AdminNav;
use crate::tui::components::admin::{chats, in_action_column, step_selection, table_row_at, users};
use crate::tui::components::chat_list::{menu_area, tab_at};
use crate::tui::components::search_field::edit_query;
use crate::tui::components::{ChatListState, Composer, ComposerEvent, MessageListState, ReactionPicker};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Areas;

/// Keyboard focus on the messenger screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Messages,
    Composer,
}

/// Keyboard focus on the admin screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminFocus {
    Nav,
    Search,
    Table,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub admin_focus: AdminFocus,
    // Persistent component states
    pub chat_list: ChatListState,
    pub message_list: MessageListState,
    pub composer: Composer,
    pub reaction_cursor: usize,
    pub users_table: TableState,
    pub chats_table: TableState,
    /// Where things landed in the last frame, for mouse hit tests
    pub areas: Areas,
    /// Chat whose history `message_list` currently describes
    pub shown_chat: Option<ChatId>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Sidebar,
            admin_focus: AdminFocus::Nav,
            chat_list: ChatListState::new(),
            message_list: MessageListState::new(),
            composer: Composer::new(),
            reaction_cursor: 0,
            users_table: TableState::default(),
            chats_table: TableState::default(),
            areas: Areas::default(),
            shown_chat: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is ignored by terminals that lack it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

pub fn run(config: ResolvedConfig, seed: SeedData) -> std::io::Result<()> {
    let mut app = App::from_config(seed, &config);
    let mut tui = TuiState::new();
    if app.selected_chat.is_some() {
        tui.focus = Focus::Composer;
    }
    sync_after_update(&app, &mut tui);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Terminal modes not enabled: {}", e))
        .ok();
    info!("Parley started on {:?}", app.screen);

    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event) {
                should_quit = true;
                break;
            }
        }
        if should_quit {
            break;
        }
    }

    info!("Parley exiting");
    ratatui::restore();
    Ok(())
}

fn dispatch(app: &mut App, action: Action) -> bool {
    update(app, action) == Effect::Quit
}

/// Route one event. Returns true when the app should quit.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    match event {
        TuiEvent::ForceQuit => return dispatch(app, Action::Quit),
        TuiEvent::Resize => return false,
        TuiEvent::SwitchScreen => {
            let screen = app.screen.other();
            return dispatch(app, Action::SwitchScreen(screen));
        }
        _ => {}
    }

    let quit = match app.screen {
        Screen::Messenger => handle_messenger(app, tui, event),
        Screen::Admin => handle_admin(app, tui, event),
    };
    sync_after_update(app, tui);
    quit
}

/// Reset per-chat view state when the open chat changed, and mirror the
/// core draft into the composer.
fn sync_after_update(app: &App, tui: &mut TuiState) {
    if tui.shown_chat != app.selected_chat {
        debug!("Chat view reset: {:?} -> {:?}", tui.shown_chat, app.selected_chat);
        tui.message_list = MessageListState::new();
        tui.reaction_cursor = 0;
        tui.shown_chat = app.selected_chat;
    }
    if app.selected_chat.is_none() && tui.focus != Focus::Sidebar {
        tui.focus = Focus::Sidebar;
    }
    tui.composer.sync(app.window.draft());
    tui.composer.affordance = app.window.affordance();
}

// ============================================================================
// Messenger
// ============================================================================

fn handle_messenger(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    match event {
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.message_list.handle_event(&event);
            false
        }
        TuiEvent::ToggleMenu => dispatch(app, Action::ToggleMenu),
        TuiEvent::NextTab => {
            let tab = app.sidebar.active_tab.next();
            dispatch(app, Action::SelectTab(tab))
        }
        TuiEvent::FocusNext | TuiEvent::FocusPrev => {
            tui.focus = cycle_focus(tui.focus, app.selected_chat.is_some(), event == TuiEvent::FocusNext);
            false
        }
        TuiEvent::Escape => {
            if app.sidebar.menu_open {
                dispatch(app, Action::ToggleMenu)
            } else if app.window.reacting().is_some() {
                dispatch(app, Action::CloseReactionPicker)
            } else if app.window.hovered().is_some() {
                dispatch(app, Action::PointerLeave)
            } else {
                tui.focus = Focus::Sidebar;
                false
            }
        }
        TuiEvent::MouseMove(column, row) => {
            match tui.message_list.hit_test(tui.areas.messages, column, row) {
                Some(id) if app.window.hovered() != Some(id) => {
                    dispatch(app, Action::PointerEnter(id))
                }
                Some(_) => false,
                None if app.window.hovered().is_some() => dispatch(app, Action::PointerLeave),
                None => false,
            }
        }
        TuiEvent::MouseClick(column, row) => messenger_click(app, tui, column, row),
        _ => match tui.focus {
            Focus::Sidebar => sidebar_key(app, tui, event),
            Focus::Messages => messages_key(app, tui, event),
            Focus::Composer => composer_key(app, tui, event),
        },
    }
}

fn cycle_focus(focus: Focus, chat_open: bool, forward: bool) -> Focus {
    if !chat_open {
        return Focus::Sidebar;
    }
    match (focus, forward) {
        (Focus::Sidebar, true) | (Focus::Composer, false) => Focus::Messages,
        (Focus::Messages, true) | (Focus::Sidebar, false) => Focus::Composer,
        (Focus::Composer, true) | (Focus::Messages, false) => Focus::Sidebar,
    }
}

fn open_chat(app: &mut App, tui: &mut TuiState, chat_id: ChatId) -> bool {
    let quit = dispatch(app, Action::SelectChat(chat_id));
    if app.selected_chat == Some(chat_id) {
        tui.focus = Focus::Composer;
    }
    quit
}

fn open_picker(app: &mut App, tui: &mut TuiState, message_id: MessageId) -> bool {
    tui.reaction_cursor = 0;
    dispatch(app, Action::OpenReactionPicker(message_id))
}

fn sidebar_key(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    let len = app.visible_chats().len();
    match event {
        TuiEvent::CursorUp => {
            tui.chat_list.move_up(len);
            false
        }
        TuiEvent::CursorDown => {
            tui.chat_list.move_down(len);
            false
        }
        TuiEvent::Submit => {
            let target = tui
                .chat_list
                .cursor()
                .and_then(|i| app.visible_chats().get(i).map(|c| c.id));
            match target {
                Some(chat_id) => open_chat(app, tui, chat_id),
                None => false,
            }
        }
        _ => match edit_query(app.sidebar.query(), &event) {
            Some(query) => {
                let quit = dispatch(app, Action::SidebarSearch(query));
                tui.chat_list.clamp(app.visible_chats().len());
                quit
            }
            None => false,
        },
    }
}

fn messages_key(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    if let Some(message_id) = app.window.reacting() {
        let last = app.reactions.len().saturating_sub(1);
        return match event {
            TuiEvent::CursorLeft => {
                tui.reaction_cursor = tui.reaction_cursor.saturating_sub(1);
                false
            }
            TuiEvent::CursorRight => {
                tui.reaction_cursor = (tui.reaction_cursor + 1).min(last);
                false
            }
            TuiEvent::Submit => match app.reactions.get(tui.reaction_cursor).cloned() {
                Some(glyph) => dispatch(app, Action::React { message_id, glyph }),
                None => false,
            },
            _ => false,
        };
    }

    let ids: Vec<MessageId> = app.current_messages().iter().map(|m| m.id).collect();
    match event {
        TuiEvent::CursorUp | TuiEvent::CursorDown if !ids.is_empty() => {
            let current = app
                .window
                .hovered()
                .and_then(|id| ids.iter().position(|m| *m == id));
            let index = match (current, event == TuiEvent::CursorUp) {
                (None, _) => ids.len() - 1,
                (Some(i), true) => i.saturating_sub(1),
                (Some(i), false) => (i + 1).min(ids.len() - 1),
            };
            tui.message_list.scroll_to(index);
            dispatch(app, Action::PointerEnter(ids[index]))
        }
        TuiEvent::Submit => match app.window.hovered() {
            Some(id) => open_picker(app, tui, id),
            None => false,
        },
        // Typing jumps to the composer
        TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
            tui.focus = Focus::Composer;
            composer_key(app, tui, event)
        }
        _ => false,
    }
}

fn composer_key(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    match tui.composer.handle_event(&event) {
        Some(ComposerEvent::Changed(text)) => dispatch(app, Action::DraftChanged(text)),
        Some(ComposerEvent::Submit) => dispatch(app, Action::SendMessage),
        None => false,
    }
}

fn messenger_click(app: &mut App, tui: &mut TuiState, column: u16, row: u16) -> bool {
    let at = Position::new(column, row);
    let areas = tui.areas;

    if app.sidebar.menu_open {
        // Menu entries have no behavior; any click outside closes it
        if menu_area(areas.sidebar).contains(at) {
            return false;
        }
        return dispatch(app, Action::ToggleMenu);
    }

    if let Some(message_id) = app.window.reacting()
        && areas.picker.contains(at)
        && let Some(index) = ReactionPicker::hit_test(&app.reactions, areas.picker, column, row)
    {
        tui.reaction_cursor = index;
        let glyph = app.reactions[index].clone();
        return dispatch(app, Action::React { message_id, glyph });
    }

    if areas.sidebar_search.contains(at) {
        tui.focus = Focus::Sidebar;
        // "☰" sits just inside the left border
        if column <= areas.sidebar_search.x + 2 {
            return dispatch(app, Action::ToggleMenu);
        }
        return false;
    }

    if areas.tabs.contains(at) {
        return match tab_at(areas.tabs, column) {
            Some(tab) => dispatch(app, Action::SelectTab(tab)),
            None => false,
        };
    }

    let len = app.visible_chats().len();
    if let Some(index) = tui.chat_list.hit_test(areas.chat_list, column, row, len) {
        tui.chat_list.list_state.select(Some(index));
        let chat_id = app.visible_chats()[index].id;
        return open_chat(app, tui, chat_id);
    }

    if let Some(message_id) = tui.message_list.hit_test(areas.messages, column, row) {
        tui.focus = Focus::Messages;
        dispatch(app, Action::PointerEnter(message_id));
        return open_picker(app, tui, message_id);
    }

    if areas.composer.contains(at) {
        tui.focus = Focus::Composer;
    }
    false
}

// ============================================================================
// Admin
// ============================================================================

fn has_table(page: AdminPage) -> bool {
    matches!(page, AdminPage::Users | AdminPage::Chats)
}

fn filtered_len(app: &App) -> usize {
    match app.admin.page {
        AdminPage::Users => app.admin.users.filtered().len(),
        AdminPage::Chats => app.admin.chats.filtered().len(),
        _ => 0,
    }
}

fn table_state<'a>(app: &App, tui: &'a mut TuiState) -> Option<&'a mut TableState> {
    match app.admin.page {
        AdminPage::Users => Some(&mut tui.users_table),
        AdminPage::Chats => Some(&mut tui.chats_table),
        _ => None,
    }
}

/// Toggle the record at `index` of the current page's filtered rows.
fn toggle_row(app: &mut App, index: usize) -> bool {
    let action = match app.admin.page {
        AdminPage::Users => app
            .admin
            .users
            .filtered()
            .get(index)
            .map(|u| Action::ToggleUserStatus(u.id)),
        AdminPage::Chats => app
            .admin
            .chats
            .filtered()
            .get(index)
            .map(|c| Action::ToggleChatStatus(c.id)),
        _ => None,
    };
    match action {
        Some(action) => dispatch(app, action),
        None => false,
    }
}

fn open_page(app: &mut App, tui: &mut TuiState, page: AdminPage) -> bool {
    let quit = dispatch(app, Action::OpenAdminPage(page));
    tui.admin_focus = AdminFocus::Nav;
    quit
}

fn handle_admin(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    let page = app.admin.page;
    match event {
        TuiEvent::FocusNext | TuiEvent::FocusPrev => {
            tui.admin_focus = if !has_table(page) {
                AdminFocus::Nav
            } else {
                match (tui.admin_focus, event == TuiEvent::FocusNext) {
                    (AdminFocus::Nav, true) | (AdminFocus::Table, false) => AdminFocus::Search,
                    (AdminFocus::Search, true) | (AdminFocus::Nav, false) => AdminFocus::Table,
                    (AdminFocus::Table, true) | (AdminFocus::Search, false) => AdminFocus::Nav,
                }
            };
            false
        }
        TuiEvent::Escape => {
            tui.admin_focus = AdminFocus::Nav;
            false
        }
        TuiEvent::MouseClick(column, row) => admin_click(app, tui, column, row),
        _ => match tui.admin_focus {
            AdminFocus::Nav => match event {
                TuiEvent::CursorUp => open_page(app, tui, page.prev()),
                TuiEvent::CursorDown => open_page(app, tui, page.next()),
                TuiEvent::Submit if has_table(page) => {
                    tui.admin_focus = AdminFocus::Search;
                    false
                }
                _ => false,
            },
            AdminFocus::Search => {
                if event == TuiEvent::CursorDown || event == TuiEvent::Submit {
                    tui.admin_focus = AdminFocus::Table;
                    return false;
                }
                let action = match page {
                    AdminPage::Users => {
                        edit_query(app.admin.users.query(), &event).map(Action::UserSearch)
                    }
                    AdminPage::Chats => {
                        edit_query(app.admin.chats.query(), &event).map(Action::ChatSearch)
                    }
                    _ => None,
                };
                match action {
                    Some(action) => dispatch(app, action),
                    None => false,
                }
            }
            AdminFocus::Table => {
                let len = filtered_len(app);
                let selected = table_state(app, tui).and_then(|s| s.selected());
                match event {
                    TuiEvent::CursorUp | TuiEvent::CursorDown => {
                        if let Some(state) = table_state(app, tui) {
                            step_selection(state, len, event == TuiEvent::CursorDown);
                        }
                        false
                    }
                    TuiEvent::Submit => match selected {
                        Some(index) => toggle_row(app, index),
                        None => false,
                    },
                    _ => false,
                }
            }
        },
    }
}

fn admin_click(app: &mut App, tui: &mut TuiState, column: u16, row: u16) -> bool {
    let areas = tui.areas;
    if let Some(page) = AdminNav::hit_test(areas.admin_nav, column, row) {
        return open_page(app, tui, page);
    }
    if areas.admin_search.contains(Position::new(column, row)) {
        tui.admin_focus = AdminFocus::Search;
        return false;
    }

    let len = filtered_len(app);
    let (state, action_width) = match app.admin.page {
        AdminPage::Users => (&mut tui.users_table, users::ACTION_WIDTH),
        AdminPage::Chats => (&mut tui.chats_table, chats::ACTION_WIDTH),
        _ => return false,
    };
    let Some(index) = table_row_at(areas.admin_table, state, column, row, len) else {
        return false;
    };
    state.select(Some(index));
    tui.admin_focus = AdminFocus::Table;
    if in_action_column(areas.admin_table, column, action_width) {
        return toggle_row(app, index);
    }
    false
}
