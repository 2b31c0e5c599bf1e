//! Delay detection for an overdue predicted period.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DateRange, DayNumber};

/// Delay length at which predictions are suppressed.
pub const DELAY_ESCALATION_DAYS: i64 = 8;

/// How late the expected period is, as of `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DelayState {
    OnTime,
    /// Late by 1 to 7 days; predictions continue after today.
    Delayed { due: DayNumber, days: i64 },
    /// Late by 8 days or more; predictions are suppressed.
    Overdue { due: DayNumber, days: i64 },
}

impl DelayState {
    /// Evaluates the delay of a period expected on `due`.
    ///
    /// `recorded_since_due` is true when a period record starts on or after
    /// `due`. A due date on or after `pregnancy_cutoff` is never late.
    pub fn evaluate(
        due: DayNumber,
        today: DayNumber,
        recorded_since_due: bool,
        pregnancy_cutoff: Option<DayNumber>,
    ) -> Self {
        if recorded_since_due || today <= due {
            return DelayState::OnTime;
        }
        if pregnancy_cutoff.is_some_and(|cutoff| due >= cutoff) {
            return DelayState::OnTime;
        }

        let days = today - due + 1;
        if days >= DELAY_ESCALATION_DAYS {
            DelayState::Overdue { due, days }
        } else {
            DelayState::Delayed { due, days }
        }
    }

    /// Days of delay, 0 when on time.
    pub fn days(&self) -> i64 {
        match self {
            DelayState::OnTime => 0,
            DelayState::Delayed { days, .. } | DelayState::Overdue { days, .. } => *days,
        }
    }

    /// The `[due, today]` window of a late period.
    pub fn window(&self) -> Option<DateRange> {
        match *self {
            DelayState::OnTime => None,
            DelayState::Delayed { due, days } | DelayState::Overdue { due, days } => {
                Some(DateRange::with_length(due, days))
            }
        }
    }

    /// First predicted start: the due date when on time, the day after
    /// `today` when delayed.
    pub fn first_prediction(&self, due: DayNumber, today: DayNumber) -> Option<DayNumber> {
        match self {
            DelayState::OnTime => Some(due),
            DelayState::Delayed { .. } => Some(today + 1),
            DelayState::Overdue { .. } => None,
        }
    }
}
