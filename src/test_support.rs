//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{DateTime, Local, TimeZone};

use crate::core::clock::Clock;
use crate::core::seed::SeedData;
use crate::core::state::App;

/// A clock stuck at one instant.
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    /// 5 March 2024, 18:45 local time.
    pub fn evening() -> Self {
        Self(Local.with_ymd_and_hms(2024, 3, 5, 18, 45, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Creates a test App over the built-in dataset with a fixed clock.
pub fn test_app() -> App {
    App::new(SeedData::builtin(), Box::new(FixedClock::evening()))
}
