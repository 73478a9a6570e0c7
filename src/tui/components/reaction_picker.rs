//! Emoji strip shown above the composer while a message's picker is open.
//!
//! ```text
//! ╭ Реакция ─────────────────────────────╮
//! │ 👍  ❤️  😂  😮  😢  🔥  👏           │
//! ╰──────────── ←→ выбор · Enter · Esc ──╯
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// Rows taken by the picker strip.
pub const PICKER_HEIGHT: u16 = 3;
/// Columns between glyph cells.
const SPACING: u16 = 2;

pub struct ReactionPicker<'a> {
    pub palette: &'a [String],
    /// Keyboard cursor into `palette`
    pub cursor: usize,
}

impl<'a> ReactionPicker<'a> {
    pub fn new(palette: &'a [String], cursor: usize) -> Self {
        Self { palette, cursor }
    }

    /// Screen column range `[start, end)` of each glyph when rendered into `area`.
    pub fn glyph_spans(palette: &[String], area: Rect) -> Vec<(u16, u16)> {
        let mut x = area.x + 2; // border + one column of padding
        palette
            .iter()
            .map(|glyph| {
                let width = glyph.width().max(1) as u16;
                let span = (x, x + width);
                x += width + SPACING;
                span
            })
            .collect()
    }

    /// Index of the glyph under a click, if any.
    pub fn hit_test(palette: &[String], area: Rect, column: u16, row: u16) -> Option<usize> {
        if row != area.y + 1 {
            return None;
        }
        Self::glyph_spans(palette, area)
            .iter()
            .position(|&(start, end)| column >= start && column < end)
    }
}

impl<'a> Component for ReactionPicker<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        for (i, glyph) in self.palette.iter().enumerate() {
            let style = if i == self.cursor {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(glyph.as_str(), style));
            spans.push(Span::raw(" ".repeat(SPACING as usize)));
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Реакция ")
            .title_bottom(Line::from(" ←→ выбор · Enter · Esc ").right_aligned());

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}
