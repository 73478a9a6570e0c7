//! # TitleBar Component
//!
//! Top line of every screen: app name, current screen, status text, and the
//! shortcut for switching screens on the right.
//!
//! ```text
//!  Parley │ Мессенджер │ Сообщение отправлено           Ctrl+A Админ-панель
//! ```
//!
//! Purely presentational. All three props come from `App`.

use crate::Screen;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    pub screen: Screen,
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(screen: Screen, status_message: &'a str) -> Self {
        Self {
            screen,
            status_message,
        }
    }
}

impl<'a> Component for TitleBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hint = format!("Ctrl+A {} ", self.screen.other().label());
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(hint.chars().count() as u16),
        ])
        .areas(area);

        let divider = Span::styled(" │ ", Style::default().fg(Color::DarkGray));
        let mut spans = vec![
            Span::styled(
                " Parley",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            divider.clone(),
            Span::raw(self.screen.label()),
        ];
        if !self.status_message.is_empty() {
            spans.push(divider);
            spans.push(Span::styled(
                self.status_message,
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), left);
        frame.render_widget(
            Line::styled(hint, Style::default().fg(Color::DarkGray)).right_aligned(),
            right,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(title_bar: &mut TitleBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_messenger_title_with_status() {
        let text = render(&mut TitleBar::new(Screen::Messenger, "Сообщение отправлено"));
        assert!(text.contains("Parley"));
        assert!(text.contains("Мессенджер"));
        assert!(text.contains("Сообщение отправлено"));
        assert!(text.contains("Ctrl+A Админ-панель"));
    }

    #[test]
    fn test_admin_title_without_status() {
        let text = render(&mut TitleBar::new(Screen::Admin, ""));
        assert!(text.contains("Админ-панель"));
        assert!(text.contains("Ctrl+A Мессенджер"));
        assert_eq!(text.matches('│').count(), 1);
    }
}
