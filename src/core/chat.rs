//! # Chats and Messages
//!
//! Plain data shared by the sidebar, the chat window and the seed loader.
//! The registry is fixed for the life of the process: no operation adds,
//! removes or reorders chats.

use serde::{Deserialize, Serialize};

pub type ChatId = u32;
pub type MessageId = i64;

/// A conversation as listed in the sidebar and shown in the chat header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    pub name: String,
    /// Header status line ("24 участника", "был(а) в сети недавно").
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub last_message: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub online: bool,
    /// Never decremented: there is no "mark as read".
    #[serde(default)]
    pub unread: Option<u32>,
}

impl Chat {
    /// First character of the name, used for the header avatar.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }

    /// Sidebar avatar: explicit glyph if present, otherwise the initial.
    pub fn avatar_glyph(&self) -> String {
        self.avatar.clone().unwrap_or_else(|| self.initial())
    }
}

/// A single entry in a chat's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub time: String,
    pub is_own: bool,
    /// Insertion-ordered, duplicates allowed.
    #[serde(default)]
    pub reactions: Vec<String>,
}

/// Ordered, read-only set of chats.
#[derive(Debug, Clone, Default)]
pub struct ChatRegistry {
    chats: Vec<Chat>,
}

impl ChatRegistry {
    pub fn new(chats: Vec<Chat>) -> Self {
        Self { chats }
    }

    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    pub fn get(&self, id: ChatId) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: ChatId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.chats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat(id: ChatId, name: &str, avatar: Option<&str>) -> Chat {
        Chat {
            id,
            name: name.to_string(),
            status: String::new(),
            last_message: String::new(),
            time: String::new(),
            avatar: avatar.map(String::from),
            online: false,
            unread: None,
        }
    }

    #[test]
    fn avatar_falls_back_to_initial() {
        assert_eq!(chat(1, "Избранное", Some("⭐")).avatar_glyph(), "⭐");
        assert_eq!(chat(2, "Александр Петров", None).avatar_glyph(), "А");
    }

    #[test]
    fn initial_of_empty_name_is_empty() {
        assert_eq!(chat(3, "", None).initial(), "");
    }

    #[test]
    fn registry_lookup_by_id() {
        let registry = ChatRegistry::new(vec![chat(1, "a", None), chat(7, "b", None)]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(7).map(|c| c.name.as_str()), Some("b"));
        assert!(registry.get(2).is_none());
        assert!(!registry.contains(42));
    }
}
