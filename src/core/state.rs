//! # Application State
//!
//! Core business state for Parley. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── registry: ChatRegistry          // sidebar chats (fixed)
//! ├── messages: MessageStore          // chat id → ordered messages
//! ├── sidebar: SidebarState           // search, tab, hamburger menu
//! ├── window: ChatWindowState         // hover / picker / draft
//! ├── selected_chat: Option<ChatId>   // None = "Выберите чат"
//! ├── screen: Screen                  // messenger or admin
//! ├── admin: AdminState               // dashboard, users, chats
//! ├── reactions: Vec<String>          // picker palette
//! ├── time_format: String             // label format for sent messages
//! ├── status_message: String          // status bar text
//! └── clock: Box<dyn Clock>           // message ids and time labels
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use chrono::{DateTime, Local};

use crate::Screen;
use crate::core::admin::AdminState;
use crate::core::chat::{Chat, ChatId, ChatRegistry, Message};
use crate::core::clock::{Clock, SystemClock};
use crate::core::config::{DEFAULT_REACTIONS, DEFAULT_TIME_FORMAT, ResolvedConfig};
use crate::core::messages::MessageStore;
use crate::core::seed::SeedData;
use crate::core::sidebar::SidebarState;
use crate::core::window::ChatWindowState;

pub struct App {
    pub registry: ChatRegistry,
    pub messages: MessageStore,
    pub sidebar: SidebarState,
    pub window: ChatWindowState,
    pub selected_chat: Option<ChatId>,
    pub screen: Screen,
    pub admin: AdminState,
    pub reactions: Vec<String>,
    pub time_format: String,
    pub status_message: String,
    pub clock: Box<dyn Clock>,
}

impl App {
    pub fn new(seed: SeedData, clock: Box<dyn Clock>) -> Self {
        let messages = MessageStore::new(seed.conversation_map());
        Self {
            registry: ChatRegistry::new(seed.chats),
            messages,
            sidebar: SidebarState::new(),
            window: ChatWindowState::new(),
            selected_chat: None,
            screen: Screen::default(),
            admin: AdminState::new(seed.users, seed.admin_chats, seed.dashboard),
            reactions: DEFAULT_REACTIONS.iter().map(|r| r.to_string()).collect(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            status_message: String::from("Добро пожаловать в Parley!"),
            clock,
        }
    }

    /// Build the app from resolved settings with the real clock.
    ///
    /// An `open_chat` that is not in the registry is ignored.
    pub fn from_config(seed: SeedData, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(seed, Box::new(SystemClock));
        app.screen = config.start_screen;
        app.time_format = config.time_format.clone();
        app.reactions = config.reactions.clone();
        app.selected_chat = config
            .open_chat
            .filter(|id| app.registry.contains(*id));
        app
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub fn current_chat(&self) -> Option<&Chat> {
        self.selected_chat.and_then(|id| self.registry.get(id))
    }

    /// History of the open chat; empty when nothing is selected.
    pub fn current_messages(&self) -> &[Message] {
        match self.selected_chat {
            Some(id) => self.messages.messages(id),
            None => &[],
        }
    }

    /// Sidebar chats after the search filter.
    pub fn visible_chats(&self) -> Vec<&Chat> {
        self.sidebar.filter(&self.registry)
    }
}
