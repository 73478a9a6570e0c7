use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::chat::Message;
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
pub const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
pub const VERTICAL_OVERHEAD: u16 = 2;
/// Bubbles never take more than this share of the list width.
const MAX_WIDTH_PERCENT: u16 = 70;
/// Title shown on a hovered bubble; clicking the bubble opens the picker.
const REACT_HINT: &str = "☺+";

/// A single chat bubble.
///
/// Own messages sit on the right in green, incoming ones on the left.
/// The time label and reactions ride on the bottom border:
///
/// ```text
///                      ╭──────────────────╮
///                      │ Принято, буду!   │
///                      ╰👍 ❤️──────10:15╯
/// ```
///
/// `Bubble` is rebuilt each frame; hover and picker flags come from
/// `ChatWindowState` via the parent `MessageList`.
#[derive(Clone, Copy)]
pub struct Bubble<'a> {
    pub message: &'a Message,
    pub is_hovered: bool,
    pub picker_open: bool,
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a Message, is_hovered: bool, picker_open: bool) -> Self {
        Self {
            message,
            is_hovered,
            picker_open,
        }
    }

    /// Outer width of the bubble inside a list `list_width` columns wide.
    ///
    /// Wide enough for the longest text line and for the bottom border
    /// labels, capped at `MAX_WIDTH_PERCENT` of the list.
    pub fn width(message: &Message, list_width: u16) -> u16 {
        let max_width = (list_width as u32 * MAX_WIDTH_PERCENT as u32 / 100) as u16;
        let max_width = max_width.max(HORIZONTAL_OVERHEAD + 1).min(list_width);

        let text_width = message
            .text
            .lines()
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0) as u16;
        let footer_width = footer_width(message);

        (text_width + HORIZONTAL_OVERHEAD)
            .max(footer_width + 2)
            .max(REACT_HINT.width() as u16 + 2)
            .min(max_width)
    }

    /// Rendered height for a bubble of the given outer width.
    ///
    /// Uses `textwrap` with options matching `Paragraph`'s word wrapping so
    /// the list can lay out bubbles without rendering them.
    pub fn height(message: &Message, bubble_width: u16) -> u16 {
        let content_width = bubble_width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return VERTICAL_OVERHEAD + 1;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        let lines = textwrap::wrap(message.text.trim(), options);
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }

    /// Where the bubble goes inside a row of the list.
    pub fn place(message: &Message, row: Rect) -> Rect {
        let width = Self::width(message, row.width);
        let x = if message.is_own {
            row.x + row.width.saturating_sub(width)
        } else {
            row.x
        };
        Rect::new(x, row.y, width, row.height)
    }

    fn base_style(&self) -> Style {
        if self.message.is_own {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Blue)
        }
    }
}

fn reactions_label(message: &Message) -> String {
    message.reactions.join(" ")
}

fn footer_width(message: &Message) -> u16 {
    let reactions = reactions_label(message).width();
    let gap = if reactions > 0 { 1 } else { 0 };
    (reactions + gap + message.time.width()) as u16
}

impl<'a> Widget for Bubble<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = self.base_style();

        let border_style = if self.picker_open {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if self.is_hovered {
            style
        } else {
            style.add_modifier(Modifier::DIM)
        };

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H))
            .title_bottom(Line::from(self.message.time.as_str()).right_aligned());

        if !self.message.reactions.is_empty() {
            block = block.title_bottom(
                Line::from(reactions_label(self.message))
                    .left_aligned()
                    .style(Style::default().fg(Color::White)),
            );
        }
        if self.is_hovered || self.picker_open {
            block = block.title(Line::from(REACT_HINT).right_aligned());
        }

        let inner_area = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.message.text.trim())
            .style(style)
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);
    }
}

impl<'a> Component for Bubble<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, Bubble::place(self.message, area));
    }
}
