//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components built fresh every frame from borrowed data:
//! - `TitleBar`: app name, current screen and status text
//! - `ChatHeader` / `EmptyState`: chrome of the chat window
//! - `Bubble`: a single message with its reactions
//! - `ReactionPicker`: the emoji row under the history
//! - admin pages: `DashboardPage`, `UsersPage`, `ChatsPage`, `AdminNav`
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components whose state outlives a frame and lives in `TuiState`:
//! - `Composer`: draft editor mirroring the core draft
//! - `MessageList`: scrollable history with cached bubble heights
//! - `ChatList`: sidebar cursor and list offset
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, never `&App`. Anything that
//! changes application state goes back to the event loop as an event and
//! becomes an `Action` there.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TitleBar::new(app.screen, &app.status_message).render(frame, area);
//!
//! // Bad: hidden dependency on the whole app
//! TitleBar::from_app(&app).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (top status line)
//! ├── search_field.rs    (bordered search box + query editing)
//! ├── chat_list.rs       (sidebar: search, tabs, chats, menu)
//! ├── chat_window.rs     (header and empty state)
//! ├── message.rs         (single bubble)
//! ├── message_list.rs    (scrollable history, hit testing)
//! ├── reaction_picker.rs (emoji palette)
//! ├── composer.rs        (draft editor)
//! └── admin/             (nav, dashboard, users, chats)
//! ```

pub mod admin;
pub mod chat_list;
pub mod chat_window;
pub mod composer;
pub mod message;
pub mod message_list;
pub mod reaction_picker;
pub mod search_field;
mod title_bar;

pub use chat_list::{ChatList, ChatListState};
pub use chat_window::{ChatHeader, EmptyState};
pub use composer::{Composer, ComposerEvent};
pub use message_list::{MessageList, MessageListState};
pub use reaction_picker::ReactionPicker;
pub use title_bar::TitleBar;
