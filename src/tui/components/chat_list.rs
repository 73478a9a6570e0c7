//! # Chat List (sidebar)
//!
//! ```text
//! ╭──────────────────────────╮
//! │☰ 🔍 Поиск                │   search box, F2 opens the menu
//! ╰──────────────────────────╯
//!  Чаты │ Контакты │ Каналы       tabs, F3 cycles
//!  ⭐ Избранное         12:45
//!     Сохраненные сообщения
//!  А● Александр Петров  11:30
//!     Привет! Как дела?   (3)
//! ```
//!
//! Each chat takes two rows. The highlighted row (keyboard cursor) is
//! separate from the open chat, which is marked with a bar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, List, ListItem, ListState, Paragraph, Tabs};
use unicode_width::UnicodeWidthStr;

use crate::core::chat::{Chat, ChatId};
use crate::core::sidebar::{MENU_ITEMS, SidebarTab};
use crate::tui::component::Component;
use crate::tui::components::search_field::SearchField;

const ROWS_PER_CHAT: u16 = 2;
const TAB_DIVIDER: &str = "│";

/// Persistent sidebar state: the keyboard cursor and list scroll.
#[derive(Debug, Default)]
pub struct ChatListState {
    pub list_state: ListState,
}

impl ChatListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Keep the cursor inside a list of `len` chats.
    pub fn clamp(&mut self, len: usize) {
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = self.cursor().map(|i| (i + 1).min(len - 1)).unwrap_or(0);
        self.list_state.select(Some(next));
    }

    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = self.cursor().map(|i| i.saturating_sub(1)).unwrap_or(0);
        self.list_state.select(Some(next));
    }

    /// Index of the chat drawn at screen `row` inside the last `list_area`.
    pub fn hit_test(&self, list_area: Rect, column: u16, row: u16, len: usize) -> Option<usize> {
        if !list_area.contains(Position::new(column, row)) {
            return None;
        }
        let index = ((row - list_area.y) / ROWS_PER_CHAT) as usize + self.list_state.offset();
        (index < len).then_some(index)
    }
}

/// Split the sidebar into search box, tab strip and list.
pub fn sidebar_areas(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area)
}

/// Which tab label covers `column` in a tab strip drawn at `area`.
pub fn tab_at(area: Rect, column: u16) -> Option<SidebarTab> {
    let mut x = area.x;
    for tab in SidebarTab::ALL {
        // " label " then the divider
        let width = tab.label().width() as u16 + 2;
        if column >= x && column < x + width {
            return Some(tab);
        }
        x += width + TAB_DIVIDER.width() as u16;
    }
    None
}

/// Where the hamburger menu drops down.
pub fn menu_area(sidebar: Rect) -> Rect {
    let width = MENU_ITEMS
        .iter()
        .map(|item| item.width() as u16)
        .max()
        .unwrap_or(0)
        + 4;
    Rect::new(
        sidebar.x + 1,
        sidebar.y + 3,
        width.min(sidebar.width.saturating_sub(1)),
        (MENU_ITEMS.len() as u16 + 2).min(sidebar.height.saturating_sub(3)),
    )
}

pub struct ChatList<'a> {
    pub state: &'a mut ChatListState,
    pub chats: &'a [&'a Chat],
    pub open_chat: Option<ChatId>,
    pub query: &'a str,
    pub active_tab: SidebarTab,
    pub menu_open: bool,
    pub focused: bool,
}

fn chat_item<'a>(chat: &'a Chat, is_open: bool, width: u16) -> ListItem<'a> {
    let marker = if is_open {
        Span::styled("▌", Style::default().fg(Color::Cyan))
    } else {
        Span::raw(" ")
    };
    let presence = if chat.online {
        Span::styled("●", Style::default().fg(Color::Green))
    } else {
        Span::raw(" ")
    };
    let avatar = chat.avatar_glyph();
    let avatar_width = avatar.width() as u16;

    // marker + avatar + presence + space, then name, then time flush right
    let used = 1 + avatar_width + 2 + chat.name.width() as u16 + chat.time.width() as u16;
    let pad = width.saturating_sub(used).max(1) as usize;
    let name_style = if is_open {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let first = Line::from(vec![
        marker.clone(),
        Span::styled(avatar, Style::default().fg(Color::Magenta)),
        presence,
        Span::raw(" "),
        Span::styled(chat.name.as_str(), name_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(chat.time.as_str(), Style::default().fg(Color::DarkGray)),
    ]);

    let mut second = vec![
        marker,
        Span::raw(" ".repeat(avatar_width as usize + 2)),
        Span::styled(chat.last_message.as_str(), Style::default().fg(Color::Gray)),
    ];
    if let Some(unread) = chat.unread {
        second.push(Span::raw(" "));
        second.push(Span::styled(
            format!(" {} ", unread),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
    }

    ListItem::new(vec![first, Line::from(second)])
}

impl<'a> Component for ChatList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [search_area, tabs_area, list_area] = sidebar_areas(area);

        SearchField::new(self.query, "Поиск", self.focused)
            .prefix("☰ ")
            .render(frame, search_area);

        let tabs = Tabs::new(SidebarTab::ALL.iter().map(|t| t.label()))
            .select(self.active_tab.index())
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .divider(TAB_DIVIDER);
        frame.render_widget(tabs, tabs_area);

        if self.chats.is_empty() {
            frame.render_widget(
                Paragraph::new("Ничего не найдено").style(Style::default().fg(Color::DarkGray)),
                list_area.inner(ratatui::layout::Margin::new(1, 0)),
            );
        } else {
            let items: Vec<ListItem> = self
                .chats
                .iter()
                .map(|chat| chat_item(chat, self.open_chat == Some(chat.id), list_area.width))
                .collect();
            let highlight = if self.focused {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            let list = List::new(items).highlight_style(highlight);
            frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
        }

        if self.menu_open {
            let menu = menu_area(area);
            frame.render_widget(Clear, menu);
            let items: Vec<ListItem> = MENU_ITEMS.iter().map(|item| ListItem::new(*item)).collect();
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan));
            frame.render_widget(List::new(items).block(block), menu);
        }
    }
}
