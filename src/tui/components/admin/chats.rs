//! # Chats Page
//!
//! Three count cards over the whole list (total, groups, channels), a search
//! box (name only) and the chats table with the archive action.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Cell, Row, Table, TableState};

use crate::core::admin::{ChatKind, ChatRow, ChatRowStatus, ChatTable};
use crate::core::dashboard::StatsCard;
use crate::tui::component::Component;
use crate::tui::components::admin::stats_card::{CARD_HEIGHT, StatsCardView};
use crate::tui::components::admin::{TABLE_HEADER_ROWS, page_areas};
use crate::tui::components::search_field::SearchField;

pub const CHAT_COLUMNS: [Constraint; 7] = [
    Constraint::Min(18),
    Constraint::Length(8),
    Constraint::Length(10),
    Constraint::Length(10),
    Constraint::Length(16),
    Constraint::Length(10),
    Constraint::Length(ACTION_WIDTH),
];
pub const ACTION_WIDTH: u16 = 15;

pub struct ChatsPage<'a> {
    pub table: &'a ChatTable,
    pub state: &'a mut TableState,
    pub search_focused: bool,
    pub table_focused: bool,
}

fn count_card(title: &str, value: usize, icon: &str) -> StatsCard {
    StatsCard {
        title: title.to_string(),
        value: value.to_string(),
        icon: icon.to_string(),
        trend: None,
        description: None,
    }
}

/// Total, group and channel counts, derived from the live list.
pub fn count_cards(table: &ChatTable) -> [StatsCard; 3] {
    [
        count_card("Всего чатов", table.records().len(), "MessageSquare"),
        count_card("Групповых", table.count_kind(ChatKind::Group), "Users"),
        count_card("Каналов", table.count_kind(ChatKind::Channel), "Radio"),
    ]
}

/// Cards row, title line, search box and table.
pub fn chats_page_areas(area: Rect) -> [Rect; 4] {
    let [cards, rest] =
        Layout::vertical([Constraint::Length(CARD_HEIGHT), Constraint::Min(0)]).areas(area);
    let [title, search, table] = page_areas(rest);
    [cards, title, search, table]
}

fn status_style(status: ChatRowStatus) -> Style {
    match status {
        ChatRowStatus::Active => Style::default().fg(Color::Green),
        ChatRowStatus::Archived => Style::default().fg(Color::DarkGray),
        ChatRowStatus::Reported => Style::default().fg(Color::Red),
    }
}

fn chat_row(chat: &ChatRow) -> Row<'_> {
    Row::new(vec![
        Cell::from(Span::styled(chat.name.as_str(), Style::default().add_modifier(Modifier::BOLD))),
        Cell::from(chat.kind.label()),
        Cell::from(chat.members.to_string()),
        Cell::from(chat.messages.to_string()),
        Cell::from(chat.last_activity.as_str()),
        Cell::from(Span::styled(chat.status.label(), status_style(chat.status))),
        Cell::from(Span::styled(
            format!("[{}]", chat.toggle_label()),
            Style::default().fg(Color::Yellow),
        )),
    ])
}

impl<'a> Component for ChatsPage<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [cards_area, title_area, search_area, table_area] = chats_page_areas(area);

        let cards = count_cards(self.table);
        let card_areas: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(cards_area);
        for (card, card_area) in cards.iter().zip(card_areas) {
            StatsCardView { card }.render(frame, card_area);
        }

        let chats = self.table.filtered();
        frame.render_widget(
            Line::from(vec![
                Span::styled(" Чаты ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("({})", chats.len()), Style::default().fg(Color::DarkGray)),
            ]),
            title_area,
        );

        SearchField::new(self.table.query(), "Поиск чатов", self.search_focused)
            .render(frame, search_area);

        let header = Row::new(vec![
            "Название",
            "Тип",
            "Участники",
            "Сообщения",
            "Активность",
            "Статус",
            "Действие",
        ])
        .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .height(TABLE_HEADER_ROWS);

        let highlight = if self.table_focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };

        let table = Table::new(chats.iter().map(|c| chat_row(c)), CHAT_COLUMNS)
            .header(header)
            .row_highlight_style(highlight)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );

        frame.render_stateful_widget(table, table_area, self.state);
    }
}
