//! # Message Store
//!
//! Owns every chat's message sequence. Two mutations exist:
//!
//! - [`MessageStore::append`]: sending. Adds one trailing own message.
//! - [`MessageStore::add_reaction`]: grows one message's reaction list.
//!
//! Nothing is ever removed or reordered. Both mutations treat bad input
//! (blank text, unknown chat, vanished message) as "nothing happens" and
//! report it only through their return value.

use std::collections::HashMap;
use std::fmt::Write;

use chrono::{DateTime, Local};
use log::{debug, info, warn};

use crate::core::chat::{ChatId, Message, MessageId};
use crate::core::config::DEFAULT_TIME_FORMAT;

pub struct MessageStore {
    conversations: HashMap<ChatId, Vec<Message>>,
    /// Highest id handed out or seeded. New ids are strictly above it until
    /// it saturates at `MessageId::MAX`.
    last_id: MessageId,
}

impl MessageStore {
    pub fn new(conversations: HashMap<ChatId, Vec<Message>>) -> Self {
        let last_id = conversations
            .values()
            .flatten()
            .map(|m| m.id)
            .max()
            .unwrap_or(0);
        Self {
            conversations,
            last_id,
        }
    }

    /// Messages of `chat_id` in order. Unknown chats have an empty history.
    pub fn messages(&self, chat_id: ChatId) -> &[Message] {
        self.conversations
            .get(&chat_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn get(&self, chat_id: ChatId, message_id: MessageId) -> Option<&Message> {
        self.messages(chat_id).iter().find(|m| m.id == message_id)
    }

    /// Append an own message stamped with `now`.
    ///
    /// Returns the new id, or `None` (and leaves everything untouched) when
    /// `text` is blank after trimming.
    pub fn append(
        &mut self,
        chat_id: ChatId,
        text: &str,
        now: DateTime<Local>,
        time_format: &str,
    ) -> Option<MessageId> {
        if text.trim().is_empty() {
            debug!("Ignoring blank message for chat {}", chat_id);
            return None;
        }

        let id = self.next_id(now);
        let message = Message {
            id,
            text: text.to_string(),
            time: time_label(now, time_format),
            is_own: true,
            reactions: Vec::new(),
        };
        self.conversations.entry(chat_id).or_default().push(message);
        info!("Appended message {} to chat {}", id, chat_id);
        Some(id)
    }

    /// Append `glyph` to the reactions of `message_id` in `chat_id`.
    ///
    /// Returns false when the chat or message does not exist.
    pub fn add_reaction(&mut self, chat_id: ChatId, message_id: MessageId, glyph: &str) -> bool {
        let target = self
            .conversations
            .get_mut(&chat_id)
            .and_then(|msgs| msgs.iter_mut().find(|m| m.id == message_id));

        match target {
            Some(message) => {
                message.reactions.push(glyph.to_string());
                info!(
                    "Reaction {} added to message {} in chat {}",
                    glyph, message_id, chat_id
                );
                true
            }
            None => {
                debug!(
                    "Reaction {} dropped: message {} not found in chat {}",
                    glyph, message_id, chat_id
                );
                false
            }
        }
    }

    /// Millisecond clock reading, bumped past the last id so two sends in the
    /// same tick still get distinct ids.
    fn next_id(&mut self, now: DateTime<Local>) -> MessageId {
        let id = now.timestamp_millis().max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }
}

/// `now` rendered with `time_format`, or with the default format if chrono
/// rejects it.
fn time_label(now: DateTime<Local>, time_format: &str) -> String {
    let mut label = String::new();
    if write!(label, "{}", now.format(time_format)).is_ok() {
        return label;
    }
    warn!("Cannot format time with {:?}, using {:?}", time_format, DEFAULT_TIME_FORMAT);
    now.format(DEFAULT_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, h, m, 0).unwrap()
    }

    fn msg(id: MessageId, text: &str, is_own: bool) -> Message {
        Message {
            id,
            text: text.to_string(),
            time: "11:30".to_string(),
            is_own,
            reactions: Vec::new(),
        }
    }

    fn store() -> MessageStore {
        let mut conversations = HashMap::new();
        conversations.insert(2, vec![msg(1, "Привет! Как дела?", false), msg(2, "Всё отлично", true)]);
        MessageStore::new(conversations)
    }

    #[test]
    fn unknown_chat_is_empty() {
        let store = store();
        assert!(store.messages(99).is_empty());
        assert!(store.get(99, 1).is_none());
    }

    #[test]
    fn blank_text_is_a_no_op() {
        let mut store = store();
        for text in ["", "   ", "\n\t"] {
            assert_eq!(store.append(2, text, at(12, 0), "%H:%M"), None);
        }
        assert_eq!(store.messages(2).len(), 2);
    }

    #[test]
    fn append_adds_own_trailing_message() {
        let mut store = store();
        let id = store.append(2, "Привет", at(14, 7), "%H:%M").unwrap();

        let msgs = store.messages(2);
        assert_eq!(msgs.len(), 3);
        let last = msgs.last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.text, "Привет");
        assert_eq!(last.time, "14:07");
        assert!(last.is_own);
        assert!(last.reactions.is_empty());
    }

    #[test]
    fn append_with_bad_time_format_uses_default() {
        let mut store = store();
        assert!(store.append(2, "hi", at(14, 7), "%Q").is_some());
        assert_eq!(store.messages(2).last().unwrap().time, "14:07");
    }

    #[test]
    fn append_after_max_seeded_id_does_not_overflow() {
        let mut conversations = HashMap::new();
        conversations.insert(1, vec![msg(MessageId::MAX, "last", false)]);
        let mut store = MessageStore::new(conversations);
        let id = store.append(1, "hi", at(9, 0), "%H:%M").unwrap();
        assert_eq!(id, MessageId::MAX);
        assert_eq!(store.messages(1).len(), 2);
    }

    #[test]
    fn append_keeps_text_untrimmed() {
        let mut store = store();
        store.append(2, "  hi  ", at(9, 0), "%H:%M");
        assert_eq!(store.messages(2).last().unwrap().text, "  hi  ");
    }

    #[test]
    fn append_to_unknown_chat_creates_history() {
        let mut store = store();
        store.append(5, "first", at(9, 0), "%H:%M");
        assert_eq!(store.messages(5).len(), 1);
    }

    #[test]
    fn ids_stay_unique_within_one_tick() {
        let mut store = store();
        let now = at(10, 0);
        let a = store.append(2, "a", now, "%H:%M").unwrap();
        let b = store.append(2, "b", now, "%H:%M").unwrap();
        assert!(b > a);
        assert_eq!(a, now.timestamp_millis());
    }

    #[test]
    fn reactions_accumulate_without_dedup() {
        let mut store = store();
        assert!(store.add_reaction(2, 1, "👍"));
        assert!(store.add_reaction(2, 1, "👍"));
        assert!(store.add_reaction(2, 1, "🔥"));
        assert_eq!(store.get(2, 1).unwrap().reactions, vec!["👍", "👍", "🔥"]);
    }

    #[test]
    fn reaction_on_missing_message_changes_nothing() {
        let mut store = store();
        let before: Vec<Message> = store.messages(2).to_vec();
        assert!(!store.add_reaction(2, 404, "👍"));
        assert!(!store.add_reaction(404, 1, "👍"));
        assert_eq!(store.messages(2), before.as_slice());
        assert!(store.messages(404).is_empty());
    }

    #[test]
    fn reaction_does_not_move_message() {
        let mut store = store();
        store.add_reaction(2, 1, "😂");
        assert_eq!(store.messages(2)[0].id, 1);
        assert_eq!(store.messages(2)[1].id, 2);
    }
}
