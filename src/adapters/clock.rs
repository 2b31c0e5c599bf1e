//! Clock adapters.

use chrono::Local;

use crate::domain::foundation::{day_number_from_date, DayNumber};
use crate::ports::Clock;

/// Reads today's date from the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> DayNumber {
        day_number_from_date(Local::now().date_naive())
    }
}

/// Always returns the same day (useful for tests and replays).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DayNumber);

impl Clock for FixedClock {
    fn today(&self) -> DayNumber {
        self.0
    }
}
