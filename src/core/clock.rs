//! Wall-clock source for message ids and time labels.
//!
//! `App` holds a `Box<dyn Clock>` so tests can pin time.

use chrono::{DateTime, Local};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The real local clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
