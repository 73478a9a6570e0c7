//! # Chat Window Controller
//!
//! Transient interaction state of the open chat:
//!
//! ```text
//! hovered:  Option<MessageId>   Idle ⇄ Hovered          (pointer enter / leave)
//! reacting: Option<MessageId>   Idle ⇄ ReactionPicker   (open / pick a glyph)
//! draft:    String              composer text
//! ```
//!
//! Each slot holds at most one id, so at most one message is hovered and at
//! most one has its picker open. Setting a slot replaces whatever was there.
//! The two slots are independent: leaving a message does not close its
//! picker.

use chrono::{DateTime, Local};
use log::debug;

use crate::core::chat::{ChatId, MessageId};
use crate::core::messages::MessageStore;

/// What the button next to the composer offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerAffordance {
    Send,
    /// Shown for an empty draft. Has no behavior.
    Voice,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatWindowState {
    hovered: Option<MessageId>,
    reacting: Option<MessageId>,
    draft: String,
}

impl ChatWindowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<MessageId> {
        self.hovered
    }

    pub fn reacting(&self) -> Option<MessageId> {
        self.reacting
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn pointer_enter(&mut self, id: MessageId) {
        self.hovered = Some(id);
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    pub fn open_picker(&mut self, id: MessageId) {
        self.reacting = Some(id);
    }

    pub fn close_picker(&mut self) {
        self.reacting = None;
    }

    /// Drop hover and picker, keeping the draft. Used when the chat changes.
    pub fn reset_pointer(&mut self) {
        self.hovered = None;
        self.reacting = None;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    pub fn affordance(&self) -> ComposerAffordance {
        if self.can_send() {
            ComposerAffordance::Send
        } else {
            ComposerAffordance::Voice
        }
    }

    /// Send the draft to `chat_id`. The draft is cleared only if a message
    /// was appended.
    pub fn send(
        &mut self,
        store: &mut MessageStore,
        chat_id: ChatId,
        now: DateTime<Local>,
        time_format: &str,
    ) -> Option<MessageId> {
        let id = store.append(chat_id, &self.draft, now, time_format)?;
        self.draft.clear();
        Some(id)
    }

    /// Pick `glyph` for `message_id`. Closes the picker whether or not the
    /// message still exists.
    pub fn react(
        &mut self,
        store: &mut MessageStore,
        chat_id: ChatId,
        message_id: MessageId,
        glyph: &str,
    ) -> bool {
        self.reacting = None;
        store.add_reaction(chat_id, message_id, glyph)
    }

    /// Pick `glyph` for whichever message has its picker open.
    pub fn choose_reaction(&mut self, store: &mut MessageStore, chat_id: ChatId, glyph: &str) -> bool {
        match self.reacting {
            Some(message_id) => self.react(store, chat_id, message_id, glyph),
            None => {
                debug!("Reaction {} chosen with no picker open", glyph);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chat::Message;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 18, 45, 0).unwrap()
    }

    fn store() -> MessageStore {
        let mut conversations = HashMap::new();
        conversations.insert(
            3,
            vec![Message {
                id: 1,
                text: "Встреча в 15:00".into(),
                time: "10:12".into(),
                is_own: false,
                reactions: Vec::new(),
            }],
        );
        MessageStore::new(conversations)
    }

    #[test]
    fn new_hover_replaces_old() {
        let mut window = ChatWindowState::new();
        window.pointer_enter(1);
        window.pointer_enter(2);
        assert_eq!(window.hovered(), Some(2));
        window.pointer_leave();
        assert_eq!(window.hovered(), None);
    }

    #[test]
    fn only_one_picker_open() {
        let mut window = ChatWindowState::new();
        window.open_picker(1);
        window.open_picker(2);
        assert_eq!(window.reacting(), Some(2));
    }

    #[test]
    fn hover_and_picker_are_independent() {
        let mut window = ChatWindowState::new();
        window.pointer_enter(1);
        window.open_picker(1);
        window.pointer_leave();
        assert_eq!(window.reacting(), Some(1));
        window.pointer_enter(2);
        assert_eq!(window.reacting(), Some(1));
    }

    #[test]
    fn affordance_follows_trimmed_draft() {
        let mut window = ChatWindowState::new();
        assert_eq!(window.affordance(), ComposerAffordance::Voice);
        window.set_draft("   ");
        assert_eq!(window.affordance(), ComposerAffordance::Voice);
        window.set_draft(" ok ");
        assert_eq!(window.affordance(), ComposerAffordance::Send);
    }

    #[test]
    fn send_clears_draft_only_on_success() {
        let mut store = store();
        let mut window = ChatWindowState::new();

        window.set_draft("  ");
        assert_eq!(window.send(&mut store, 3, now(), "%H:%M"), None);
        assert_eq!(window.draft(), "  ");
        assert_eq!(store.messages(3).len(), 1);

        window.set_draft("Принято");
        assert!(window.send(&mut store, 3, now(), "%H:%M").is_some());
        assert_eq!(window.draft(), "");
        assert_eq!(store.messages(3).len(), 2);
    }

    #[test]
    fn choosing_a_glyph_reacts_and_closes_picker() {
        let mut store = store();
        let mut window = ChatWindowState::new();
        window.open_picker(1);

        assert!(window.choose_reaction(&mut store, 3, "🔥"));
        assert_eq!(window.reacting(), None);
        assert_eq!(store.get(3, 1).unwrap().reactions, vec!["🔥"]);
    }

    #[test]
    fn choosing_without_picker_does_nothing() {
        let mut store = store();
        let mut window = ChatWindowState::new();
        assert!(!window.choose_reaction(&mut store, 3, "🔥"));
        assert!(store.get(3, 1).unwrap().reactions.is_empty());
    }

    #[test]
    fn picker_closes_even_if_message_vanished() {
        let mut store = store();
        let mut window = ChatWindowState::new();
        window.open_picker(77);
        assert!(!window.choose_reaction(&mut store, 3, "👍"));
        assert_eq!(window.reacting(), None);
    }

    #[test]
    fn reset_pointer_keeps_draft() {
        let mut window = ChatWindowState::new();
        window.set_draft("half-typed");
        window.pointer_enter(1);
        window.open_picker(1);
        window.reset_pointer();
        assert_eq!(window.hovered(), None);
        assert_eq!(window.reacting(), None);
        assert_eq!(window.draft(), "half-typed");
    }
}
