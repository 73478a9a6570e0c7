//! Frame layout for both screens.
//!
//! ```text
//!  Parley │ Мессенджер │ status                          Ctrl+A Админ-панель
//! ┌ sidebar ───────────┐┌ header ─────────────────────────────────────────┐
//! │ search / tabs      ││ messages                                        │
//! │ chats              ││ [reaction picker]                               │
//! │                    ││ composer                                        │
//! └────────────────────┘└─────────────────────────────────────────────────┘
//!  Tab фокус · ...                                               key hints
//! ```
//!
//! `draw_ui` also records where the interactive parts landed in
//! [`Areas`] so mouse events can be hit-tested against the last frame.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::Screen;
use crate::core::admin::AdminPage;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::admin::chats::{ChatsPage, chats_page_areas};
use crate::tui::components::admin::dashboard::DashboardPage;
use crate::tui::components::admin::nav::AdminNav;
use crate::tui::components::admin::users::UsersPage;
use crate::tui::components::admin::{Placeholder, admin_areas, clamp_selection, page_areas};
use crate::tui::components::chat_list::sidebar_areas;
use crate::tui::components::chat_window::HEADER_HEIGHT;
use crate::tui::components::composer::COMPOSER_HEIGHT;
use crate::tui::components::reaction_picker::PICKER_HEIGHT;
use crate::tui::components::{
    ChatHeader, ChatList, EmptyState, MessageList, ReactionPicker, TitleBar,
};
use crate::tui::{AdminFocus, Focus, TuiState};

pub const SIDEBAR_WIDTH: u16 = 34;

/// Screen rectangles from the last frame. Empty rects mean "not drawn".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub sidebar: Rect,
    pub sidebar_search: Rect,
    pub tabs: Rect,
    pub chat_list: Rect,
    pub messages: Rect,
    pub picker: Rect,
    pub composer: Rect,
    pub admin_nav: Rect,
    pub admin_search: Rect,
    pub admin_table: Rect,
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, body, hint_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    tui.areas = Areas::default();
    TitleBar::new(app.screen, &app.status_message).render(frame, title_area);

    match app.screen {
        Screen::Messenger => draw_messenger(frame, app, tui, body),
        Screen::Admin => draw_admin(frame, app, tui, body),
    }

    frame.render_widget(
        Line::styled(hints(app, tui), Style::default().fg(Color::DarkGray)),
        hint_area,
    );
}

fn draw_messenger(frame: &mut Frame, app: &App, tui: &mut TuiState, area: Rect) {
    use Constraint::{Length, Min};
    let [sidebar, chat_area] = Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(area);

    let chats = app.visible_chats();
    tui.chat_list.clamp(chats.len());
    let [search, tabs, list] = sidebar_areas(sidebar);
    tui.areas.sidebar = sidebar;
    tui.areas.sidebar_search = search;
    tui.areas.tabs = tabs;
    tui.areas.chat_list = list;

    ChatList {
        state: &mut tui.chat_list,
        chats: &chats,
        open_chat: app.selected_chat,
        query: app.sidebar.query(),
        active_tab: app.sidebar.active_tab,
        menu_open: app.sidebar.menu_open,
        focused: tui.focus == Focus::Sidebar,
    }
    .render(frame, sidebar);

    let Some(chat) = app.current_chat() else {
        EmptyState.render(frame, chat_area);
        return;
    };

    let reacting = app.window.reacting();
    let mut constraints = vec![Length(HEADER_HEIGHT), Min(0)];
    if reacting.is_some() {
        constraints.push(Length(PICKER_HEIGHT));
    }
    constraints.push(Length(COMPOSER_HEIGHT));
    let rows = Layout::vertical(constraints).split(chat_area);

    ChatHeader { chat }.render(frame, rows[0]);

    tui.areas.messages = rows[1];
    MessageList::new(
        &mut tui.message_list,
        app.current_messages(),
        app.window.hovered(),
        reacting,
    )
    .render(frame, rows[1]);

    if reacting.is_some() {
        tui.areas.picker = rows[2];
        ReactionPicker::new(&app.reactions, tui.reaction_cursor).render(frame, rows[2]);
    }

    let composer_area = rows[rows.len() - 1];
    tui.areas.composer = composer_area;
    tui.composer.affordance = app.window.affordance();
    tui.composer.focused = tui.focus == Focus::Composer;
    tui.composer.sync(app.window.draft());
    tui.composer.render(frame, composer_area);
}

fn draw_admin(frame: &mut Frame, app: &App, tui: &mut TuiState, area: Rect) {
    let [nav_area, page_area] = admin_areas(area);
    tui.areas.admin_nav = nav_area;

    AdminNav {
        page: app.admin.page,
        focused: tui.admin_focus == AdminFocus::Nav,
    }
    .render(frame, nav_area);

    let search_focused = tui.admin_focus == AdminFocus::Search;
    let table_focused = tui.admin_focus == AdminFocus::Table;

    match app.admin.page {
        AdminPage::Dashboard => DashboardPage {
            dashboard: &app.admin.dashboard,
        }
        .render(frame, page_area),
        AdminPage::Users => {
            let [_, search, table] = page_areas(page_area);
            tui.areas.admin_search = search;
            tui.areas.admin_table = table;
            clamp_selection(&mut tui.users_table, app.admin.users.filtered().len());
            UsersPage {
                table: &app.admin.users,
                state: &mut tui.users_table,
                search_focused,
                table_focused,
            }
            .render(frame, page_area);
        }
        AdminPage::Chats => {
            let [_, _, search, table] = chats_page_areas(page_area);
            tui.areas.admin_search = search;
            tui.areas.admin_table = table;
            clamp_selection(&mut tui.chats_table, app.admin.chats.filtered().len());
            ChatsPage {
                table: &app.admin.chats,
                state: &mut tui.chats_table,
                search_focused,
                table_focused,
            }
            .render(frame, page_area);
        }
        page => Placeholder { page }.render(frame, page_area),
    }
}

fn hints(app: &App, tui: &TuiState) -> &'static str {
    match app.screen {
        Screen::Messenger if app.window.reacting().is_some() => match tui.focus {
            Focus::Messages => " ←→ реакция · Enter выбрать · Esc закрыть",
            _ => " клик по реакции · Tab к сообщениям, затем ←→ Enter · Esc закрыть",
        },
        Screen::Messenger => match tui.focus {
            Focus::Sidebar => " ↑↓ чат · Enter открыть · F2 меню · F3 вкладка · Tab фокус · Ctrl+C выход",
            Focus::Messages => " ↑↓ сообщение · Enter реакция · Esc назад · Tab фокус",
            Focus::Composer => " Enter отправить · Tab фокус · Ctrl+C выход",
        },
        Screen::Admin => match tui.admin_focus {
            AdminFocus::Nav => " ↑↓ раздел · Tab поиск · Ctrl+A мессенджер",
            AdminFocus::Search => " поиск · Tab таблица · Esc меню",
            AdminFocus::Table => " ↑↓ строка · Enter действие · Esc меню",
        },
    }
}
