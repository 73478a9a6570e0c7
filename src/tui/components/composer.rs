//! # Composer Component
//!
//! Single-line draft editor at the bottom of the chat window.
//!
//! The draft itself belongs to `ChatWindowState` in core; the composer keeps
//! a mirror plus a cursor and reports every edit as
//! [`ComposerEvent::Changed`] so the event loop can dispatch
//! `Action::DraftChanged`. After a send clears the core draft, the loop calls
//! [`Composer::sync`] to catch up.
//!
//! The button on the right of the title follows
//! [`ComposerAffordance`]: "Отправить" with a non-blank draft, a
//! presentational voice button otherwise.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::window::ComposerAffordance;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const COMPOSER_HEIGHT: u16 = 3;
/// Border (1) + padding (1) before the first text column
const TEXT_OFFSET: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerEvent {
    Changed(String),
    Submit,
}

pub struct Composer {
    text: String,
    /// Byte offset into `text`, always on a char boundary
    cursor: usize,
    /// Props
    pub affordance: ComposerAffordance,
    pub focused: bool,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            affordance: ComposerAffordance::Voice,
            focused: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Adopt `draft` if it differs from the mirror. The cursor moves to the end.
    pub fn sync(&mut self, draft: &str) {
        if self.text != draft {
            self.text = draft.to_string();
            self.cursor = self.text.len();
        }
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.text.len())
    }

    fn changed(&self) -> Option<ComposerEvent> {
        Some(ComposerEvent::Changed(self.text.clone()))
    }

    /// First byte to show so the cursor stays inside `width` columns.
    fn visible_start(&self, width: u16) -> usize {
        let mut start = 0;
        let mut before_cursor = self.text[..self.cursor].width();
        let limit = (width as usize).saturating_sub(1);
        for c in self.text[..self.cursor].chars() {
            if before_cursor <= limit {
                break;
            }
            before_cursor -= c.width().unwrap_or(0);
            start += c.len_utf8();
        }
        start
    }
}

impl Component for Composer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (button, button_style) = match self.affordance {
            ComposerAffordance::Send => (
                " Enter ➤ Отправить ",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            ComposerAffordance::Voice => (" 🎤 Голосовое ", Style::default().fg(Color::DarkGray)),
        };

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .title(" Сообщение ")
            .title(Line::styled(button, button_style).right_aligned());

        let inner = block.inner(area);
        let start = self.visible_start(inner.width);
        let (content, style) = if self.text.is_empty() && !self.focused {
            ("Написать сообщение...", Style::default().fg(Color::DarkGray))
        } else {
            (&self.text[start..], Style::default())
        };
        let visible: String = content.chars().filter(|c| *c != '\n').collect();

        frame.render_widget(Paragraph::new(visible).style(style).block(block), area);

        if self.focused {
            let cursor_col = self.text[start..self.cursor].width() as u16;
            frame.set_cursor_position((
                (area.x + TEXT_OFFSET + cursor_col).min(area.right().saturating_sub(2)),
                area.y + 1,
            ));
        }
    }
}

impl EventHandler for Composer {
    type Event = ComposerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.text.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(data) => {
                // Single-line editor: newlines become spaces
                let flat = data.replace(['\r', '\n'], " ");
                self.text.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                self.changed()
            }
            TuiEvent::Backspace if self.cursor > 0 => {
                let prev = self.prev_boundary();
                self.text.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete if self.cursor < self.text.len() => {
                let next = self.next_boundary();
                self.text.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.text.len();
                None
            }
            TuiEvent::Submit => Some(ComposerEvent::Submit),
            _ => None,
        }
    }
}
