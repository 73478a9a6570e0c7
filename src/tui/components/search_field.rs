use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Bordered one-line search box. Editing is append/backspace only.
pub struct SearchField<'a> {
    pub query: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    /// Drawn left of the query, e.g. the hamburger button
    pub prefix: &'a str,
}

impl<'a> SearchField<'a> {
    pub fn new(query: &'a str, placeholder: &'a str, focused: bool) -> Self {
        Self {
            query,
            placeholder,
            focused,
            prefix: "",
        }
    }

    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }
}

/// The query after applying a key, or `None` if the key does not edit text.
pub fn edit_query(query: &str, event: &TuiEvent) -> Option<String> {
    match event {
        TuiEvent::InputChar(c) => {
            let mut next = query.to_string();
            next.push(*c);
            Some(next)
        }
        TuiEvent::Paste(data) => Some(format!("{}{}", query, data.replace(['\r', '\n'], " "))),
        TuiEvent::Backspace if !query.is_empty() => {
            let mut next = query.to_string();
            next.pop();
            Some(next)
        }
        _ => None,
    }
}

impl<'a> Component for SearchField<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        let (text, style) = if self.query.is_empty() {
            (
                format!("{}🔍 {}", self.prefix, self.placeholder),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (format!("{}🔍 {}", self.prefix, self.query), Style::default())
        };

        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        if self.focused {
            let prefix_width = self.prefix.width() + "🔍 ".width();
            let x = area.x + 1 + prefix_width as u16 + self.query.width() as u16;
            frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }
}
