//! # Users Page
//!
//! Title with the filtered count, a search box (name or email) and the
//! users table. Enter on a row, or a click on its action cell, flips the
//! block status.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Cell, Row, Table, TableState};

use crate::core::admin::{User, UserStatus, UserTable};
use crate::tui::component::Component;
use crate::tui::components::admin::{TABLE_HEADER_ROWS, page_areas};
use crate::tui::components::search_field::SearchField;

pub const USER_COLUMNS: [Constraint; 7] = [
    Constraint::Min(18),
    Constraint::Min(20),
    Constraint::Length(14),
    Constraint::Length(14),
    Constraint::Length(10),
    Constraint::Length(12),
    Constraint::Length(ACTION_WIDTH),
];
pub const ACTION_WIDTH: u16 = 16;

pub struct UsersPage<'a> {
    pub table: &'a UserTable,
    pub state: &'a mut TableState,
    pub search_focused: bool,
    pub table_focused: bool,
}

pub fn status_style(status: UserStatus) -> Style {
    match status {
        UserStatus::Active => Style::default().fg(Color::Green),
        UserStatus::Blocked => Style::default().fg(Color::Red),
        UserStatus::Offline => Style::default().fg(Color::DarkGray),
    }
}

fn user_row(user: &User) -> Row<'_> {
    let action_style = if user.status == UserStatus::Blocked {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };
    Row::new(vec![
        Cell::from(Span::styled(user.name.as_str(), Style::default().add_modifier(Modifier::BOLD))),
        Cell::from(user.email.as_str()),
        Cell::from(Span::styled(user.status.label(), status_style(user.status))),
        Cell::from(user.last_seen.as_str()),
        Cell::from(user.messages.to_string()),
        Cell::from(user.join_date.as_str()),
        Cell::from(Span::styled(format!("[{}]", user.toggle_label()), action_style)),
    ])
}

impl<'a> Component for UsersPage<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, search_area, table_area] = page_areas(area);
        let users = self.table.filtered();

        frame.render_widget(
            Line::from(vec![
                Span::styled(" Пользователи ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("({})", users.len()), Style::default().fg(Color::DarkGray)),
            ]),
            title_area,
        );

        SearchField::new(self.table.query(), "Поиск по имени или email", self.search_focused)
            .render(frame, search_area);

        let header = Row::new(vec![
            "Пользователь",
            "Email",
            "Статус",
            "Последний визит",
            "Сообщений",
            "Регистрация",
            "Действие",
        ])
        .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .height(TABLE_HEADER_ROWS);

        let highlight = if self.table_focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };

        let table = Table::new(users.iter().map(|u| user_row(u)), USER_COLUMNS)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::admin::AdminTable;
    use crate::core::seed::SeedData;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(table: &UserTable) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 20)).unwrap();
        let mut state = TableState::default();
        terminal
            .draw(|f| {
                UsersPage {
                    table,
                    state: &mut state,
                    search_focused: false,
                    table_focused: false,
                }
                .render(f, f.area())
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_lists_all_users_with_count() {
        let table = AdminTable::new(SeedData::builtin().users);
        let text = screen(&table);
        assert!(text.contains("Пользователи (6)"));
        assert!(text.contains("alex@example.com"));
        assert!(text.contains("[Разблокировать]"));
        assert!(text.contains("[Заблокировать]"));
        assert!(text.contains("Не в сети"));
    }

    #[test]
    fn test_filtered_count_follows_query() {
        let mut table = AdminTable::new(SeedData::builtin().users);
        table.set_query("ANNA@");
        let text = screen(&table);
        assert!(text.contains("Пользователи (1)"));
        assert!(text.contains("Анна Соколова"));
        assert!(!text.contains("Игорь Волков"));
    }
}
