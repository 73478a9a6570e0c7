//! # Admin Panel Components
//!
//! ```text
//! ╭ Админ-панель ──────╮ ┌ page ──────────────────────────────┐
//! │▶ Дашборд           │ │                                    │
//! │  Пользователи      │ │  dashboard / users / chats, or a   │
//! │  Чаты              │ │  placeholder for the other entries │
//! ╰────────────────────╯ └────────────────────────────────────┘
//! ```
//!
//! Tables keep their selection in a `TableState` owned by the TUI state so
//! it survives redraws; the pages themselves are rebuilt every frame.

pub mod chats;
pub mod dashboard;
pub mod nav;
pub mod stats_card;
pub mod users;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, TableState};

use crate::core::admin::AdminPage;
use crate::tui::component::Component;

pub const NAV_WIDTH: u16 = 22;
pub const TABLE_HEADER_ROWS: u16 = 1;

/// Split the admin body into the section nav and the page.
pub fn admin_areas(area: Rect) -> [Rect; 2] {
    Layout::horizontal([Constraint::Length(NAV_WIDTH), Constraint::Min(0)])
        .spacing(1)
        .areas(area)
}

/// Title line, search box and table of a list page.
pub fn page_areas(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area)
}

/// Index into the filtered rows of the table row under a click, given the
/// bordered table's last `area`.
pub fn table_row_at(
    area: Rect,
    state: &TableState,
    column: u16,
    row: u16,
    len: usize,
) -> Option<usize> {
    if !area.contains(Position::new(column, row)) {
        return None;
    }
    let first_row = area.y + 1 + TABLE_HEADER_ROWS;
    if row < first_row {
        return None;
    }
    let index = (row - first_row) as usize + state.offset();
    (index < len).then_some(index)
}

/// True if `column` falls in the rightmost (action) column of width
/// `action_width` inside the bordered table `area`.
pub fn in_action_column(area: Rect, column: u16, action_width: u16) -> bool {
    let right = area.right().saturating_sub(1);
    column < right && column >= right.saturating_sub(action_width)
}

/// Keep a table selection inside `len` rows.
pub fn clamp_selection(state: &mut TableState, len: usize) {
    match state.selected() {
        _ if len == 0 => state.select(None),
        Some(i) if i >= len => state.select(Some(len - 1)),
        _ => {}
    }
}

/// Move a table selection by one row, stopping at either end.
pub fn step_selection(state: &mut TableState, len: usize, down: bool) {
    if len == 0 {
        return;
    }
    let next = match state.selected() {
        None => 0,
        Some(i) if down => (i + 1).min(len - 1),
        Some(i) => i.saturating_sub(1),
    };
    state.select(Some(next));
}

/// Stand-in for nav entries that have no page yet.
pub struct Placeholder {
    pub page: AdminPage,
}

impl Component for Placeholder {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [center] = Layout::vertical([Constraint::Length(2)])
            .flex(Flex::Center)
            .areas(area);
        let text = vec![
            Line::styled(
                format!("Раздел «{}» в разработке", self.page.label()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled("Скоро здесь появится содержимое", Style::default().fg(Color::DarkGray)),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_table_row_at_skips_border_and_header() {
        let area = Rect::new(10, 5, 60, 12);
        let state = TableState::default();
        assert_eq!(table_row_at(area, &state, 12, 5, 6), None);
        assert_eq!(table_row_at(area, &state, 12, 6, 6), None);
        assert_eq!(table_row_at(area, &state, 12, 7, 6), Some(0));
        assert_eq!(table_row_at(area, &state, 12, 9, 6), Some(2));
        assert_eq!(table_row_at(area, &state, 12, 13, 6), None);
        assert_eq!(table_row_at(area, &state, 5, 7, 6), None);
    }

    #[test]
    fn test_selection_steps_and_clamps() {
        let mut state = TableState::default();
        step_selection(&mut state, 3, false);
        assert_eq!(state.selected(), Some(0));
        step_selection(&mut state, 3, true);
        step_selection(&mut state, 3, true);
        step_selection(&mut state, 3, true);
        assert_eq!(state.selected(), Some(2));
        clamp_selection(&mut state, 1);
        assert_eq!(state.selected(), Some(0));
        clamp_selection(&mut state, 0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_action_column_is_right_edge() {
        let area = Rect::new(0, 0, 100, 10);
        assert!(in_action_column(area, 98, 16));
        assert!(in_action_column(area, 83, 16));
        assert!(!in_action_column(area, 82, 16));
        assert!(!in_action_column(area, 99, 16));
    }

    #[test]
    fn test_admin_areas_reserve_nav() {
        let [nav, page] = admin_areas(Rect::new(0, 0, 100, 20));
        assert_eq!(nav.width, NAV_WIDTH);
        assert!(page.x > nav.right() - 1);
    }

    #[test]
    fn test_placeholder_names_section() {
        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        terminal
            .draw(|f| {
                Placeholder {
                    page: AdminPage::Settings,
                }
                .render(f, f.area())
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Раздел «Настройки» в разработке"));
    }
}
