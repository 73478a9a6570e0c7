//! # Core Application Logic
//!
//! This module contains Parley's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (gestures)    │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`chat`], [`messages`]: chats, their histories, send and react
//! - [`window`]: hover, reaction picker and draft of the open chat
//! - [`sidebar`], [`filter`]: chat search, tabs, hamburger menu
//! - [`admin`], [`dashboard`]: the admin screen
//! - [`seed`], [`config`], [`clock`]: what the app is built from

pub mod action;
pub mod admin;
pub mod chat;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod messages;
pub mod seed;
pub mod sidebar;
pub mod state;
pub mod window;

// Re-export commonly used types for convenience
pub use action::{Action, Effect, update};
pub use state::App;
