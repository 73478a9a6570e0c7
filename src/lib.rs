//! Parley library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Top-level screen the terminal shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Messenger,
    Admin,
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Messenger => "Мессенджер",
            Screen::Admin => "Админ-панель",
        }
    }

    pub fn other(&self) -> Screen {
        match self {
            Screen::Messenger => Screen::Admin,
            Screen::Admin => Screen::Messenger,
        }
    }
}
