//! Recorded periods and the user's averaging settings.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DateRange, DayNumber, PeriodId, ValidationError};

/// Cycle length assumed when nothing better is known.
pub const DEFAULT_AVERAGE_CYCLE: i64 = 28;

/// Period length assumed when nothing better is known.
pub const DEFAULT_AVERAGE_DAY: i64 = 5;

/// One observed menstruation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRecord {
    pub pk: PeriodId,
    pub start_date: DayNumber,
    pub end_date: DayNumber,
}

impl PeriodRecord {
    /// Creates a record with a fresh identifier.
    pub fn new(start_date: DayNumber, end_date: DayNumber) -> Result<Self, ValidationError> {
        Self::with_id(PeriodId::new(), start_date, end_date)
    }

    /// Creates a record for a known identifier.
    pub fn with_id(
        pk: PeriodId,
        start_date: DayNumber,
        end_date: DayNumber,
    ) -> Result<Self, ValidationError> {
        DateRange::try_new(start_date, end_date)?;
        Ok(Self {
            pk,
            start_date,
            end_date,
        })
    }

    /// The bleeding days as a range.
    ///
    /// A record with inverted bounds (only possible through direct field
    /// construction) collapses to its start day.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date.max(self.start_date))
    }
}

/// Manual and automatically computed cycle averages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSettings {
    pub manual_average_cycle: i64,
    pub manual_average_day: i64,
    pub auto_average_cycle: i64,
    pub auto_average_day: i64,
    pub is_auto_calc: bool,
}

impl PeriodSettings {
    /// Settings with the same manual and automatic averages.
    pub fn manual(average_cycle: i64, average_day: i64) -> Self {
        Self {
            manual_average_cycle: average_cycle,
            manual_average_day: average_day,
            auto_average_cycle: average_cycle,
            auto_average_day: average_day,
            is_auto_calc: false,
        }
    }

    /// The cycle length in effect, never below one day.
    pub fn effective_average_cycle(&self) -> i64 {
        let value = if self.is_auto_calc {
            self.auto_average_cycle
        } else {
            self.manual_average_cycle
        };
        if value < 1 {
            tracing::warn!(value, "Non-positive average cycle, using 1");
        }
        value.max(1)
    }

    /// The period length in effect, never below one day.
    pub fn effective_average_day(&self) -> i64 {
        let value = if self.is_auto_calc {
            self.auto_average_day
        } else {
            self.manual_average_day
        };
        if value < 1 {
            tracing::warn!(value, "Non-positive average period length, using 1");
        }
        value.max(1)
    }
}

impl Default for PeriodSettings {
    fn default() -> Self {
        Self::manual(DEFAULT_AVERAGE_CYCLE, DEFAULT_AVERAGE_DAY)
    }
}
