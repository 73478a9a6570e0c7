//! # MessageList Component
//!
//! Scrollable history of the open chat.
//!
//! ## Responsibilities
//!
//! - Lay out bubbles (own on the right, incoming on the left)
//! - Scroll, sticking to the bottom until the user scrolls away
//! - Map screen rows back to messages for hover and click
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState` (persistent state) and the message slice
//! (props). Heights are recomputed from scratch each frame: a chat holds a
//! handful of messages, and reactions can change any bubble's width.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::chat::{Message, MessageId};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::Bubble;
use crate::tui::event::TuiEvent;

/// Blank rows between bubbles.
const GAP: u16 = 0;

/// Layout and scroll state for the message list.
/// Must be persisted in the parent TuiState.
pub struct MessageListState {
    pub scroll_state: ScrollViewState,
    /// Height of each message row, in list order
    pub heights: Vec<u16>,
    /// Running totals of `heights`; entry `i` is the bottom edge of row `i`
    pub prefix_heights: Vec<u16>,
    /// Ids in the same order as `heights`
    pub ids: Vec<MessageId>,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            ids: Vec::new(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
        }
    }

    fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.total_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        }
    }

    /// Re-engage auto-scroll once the user has scrolled back to the end.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.total_height().saturating_sub(self.viewport_height);
        if self.scroll_state.offset().y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        }
    }

    /// Scroll so the message at `index` is fully visible.
    pub fn scroll_to(&mut self, index: usize) {
        let Some(&bottom) = self.prefix_heights.get(index) else {
            return;
        };
        let top = bottom - self.heights[index];
        let offset_y = self.scroll_state.offset().y;

        if top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: top });
            self.stick_to_bottom = false;
        } else if bottom > offset_y + self.viewport_height {
            let new_y = bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
            let max_y = self.total_height().saturating_sub(self.viewport_height);
            self.stick_to_bottom = new_y >= max_y;
        }
    }

    /// Which message sits at `content_y` (a row in list coordinates).
    pub fn message_at(&self, content_y: u16) -> Option<MessageId> {
        let index = self.prefix_heights.partition_point(|&end| end <= content_y);
        self.ids.get(index).copied()
    }

    /// Hit test a screen row against the last rendered `area`.
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<MessageId> {
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let content_y = (row - area.y) + self.scroll_state.offset().y;
        self.message_at(content_y)
    }

    pub fn index_of(&self, id: MessageId) -> Option<usize> {
        self.ids.iter().position(|m| *m == id)
    }

    fn rebuild(&mut self, messages: &[Message], content_width: u16) {
        self.heights = messages
            .iter()
            .map(|m| Bubble::height(m, Bubble::width(m, content_width)) + GAP)
            .collect();
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc += h;
                Some(*acc)
            })
            .collect();
        self.ids = messages.iter().map(|m| m.id).collect();
    }
}

/// Scrollable conversation view component.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub messages: &'a [Message],
    pub hovered: Option<MessageId>,
    pub reacting: Option<MessageId>,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut MessageListState,
        messages: &'a [Message],
        hovered: Option<MessageId>,
        reacting: Option<MessageId>,
    ) -> Self {
        Self {
            state,
            messages,
            hovered,
            reacting,
        }
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        self.state.rebuild(self.messages, content_width);
        self.state.viewport_height = area.height;

        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        let total_height = self.state.total_height();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset = 0u16;
        for (message, &height) in self.messages.iter().zip(&self.state.heights) {
            let row = Rect::new(0, y_offset, content_width, height - GAP);
            let bubble = Bubble::new(
                message,
                self.hovered == Some(message.id),
                self.reacting == Some(message.id),
            );
            scroll_view.render_widget(bubble, Bubble::place(message, row));
            y_offset += height;
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

impl EventHandler for MessageListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            _ => {}
        }
        None
    }
}
