//! Chat window chrome: the header above the history and the placeholder
//! shown before any chat is opened.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::chat::Chat;
use crate::tui::component::Component;

pub const HEADER_HEIGHT: u16 = 3;

/// Avatar initial, name and status line of the open chat.
pub struct ChatHeader<'a> {
    pub chat: &'a Chat,
}

impl<'a> Component for ChatHeader<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));

        let mut name_line = vec![
            Span::styled(
                format!(" {} ", self.chat.initial()),
                Style::default().fg(Color::Black).bg(Color::Magenta),
            ),
            Span::raw(" "),
            Span::styled(
                self.chat.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        if self.chat.online {
            name_line.push(Span::styled(" ●", Style::default().fg(Color::Green)));
        }

        let lines = vec![
            Line::from(name_line),
            Line::from(Span::styled(
                format!("    {}", self.chat.status),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Shown in place of the chat window while nothing is selected.
pub struct EmptyState;

impl Component for EmptyState {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [center] = Layout::vertical([Constraint::Length(3)])
            .flex(Flex::Center)
            .areas(area);
        let text = vec![
            Line::from(Span::styled("💬", Style::default())),
            Line::from(Span::styled(
                "Выберите чат",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "чтобы начать общение",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), center);
    }
}
