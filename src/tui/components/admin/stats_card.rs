//! Bordered number card used on the dashboard and the chats page.
//!
//! ```text
//! ╭ Всего пользователей ── Users ╮
//! │ 12,845                       │
//! │ ↑ 12.5% за месяц             │
//! ╰──────────────────────────────╯
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::dashboard::StatsCard;
use crate::tui::component::Component;

pub const CARD_HEIGHT: u16 = 4;

pub struct StatsCardView<'a> {
    pub card: &'a StatsCard,
}

impl<'a> Component for StatsCardView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {} ", self.card.title),
                Style::default().fg(Color::Gray),
            ))
            .title(
                Line::styled(
                    format!(" {} ", self.card.icon),
                    Style::default().fg(Color::Cyan),
                )
                .right_aligned(),
            );

        let mut lines = vec![Line::from(Span::styled(
            self.card.value.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];

        if let Some(trend) = self.card.trend {
            let color = if trend.is_positive {
                Color::Green
            } else {
                Color::Red
            };
            lines.push(Line::styled(trend.label(), Style::default().fg(color)));
        } else if let Some(description) = &self.card.description {
            lines.push(Line::styled(
                description.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dashboard::Trend;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(card: &StatsCard) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, CARD_HEIGHT)).unwrap();
        terminal
            .draw(|f| StatsCardView { card }.render(f, f.area()))
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
    fn test_trend_card() {
        let card = StatsCard {
            title: "Каналов".to_string(),
            value: "156".to_string(),
            icon: "Radio".to_string(),
            trend: Some(Trend {
                value: 2.1,
                is_positive: false,
            }),
            description: None,
        };
        let text = screen(&card);
        assert!(text.contains("Каналов"));
        assert!(text.contains("156"));
        assert!(text.contains("↓ 2.1% за месяц"));
        assert!(text.contains("Radio"));
    }

    #[test]
    fn test_description_card() {
        let card = StatsCard {
            title: "Групп".to_string(),
            value: "6".to_string(),
            icon: "Users".to_string(),
            trend: None,
            description: Some("из списка".to_string()),
        };
        let text = screen(&card);
        assert!(text.contains("из списка"));
        assert!(!text.contains("за месяц"));
    }
}
