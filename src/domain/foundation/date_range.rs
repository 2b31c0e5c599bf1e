//! Inclusive interval of day numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{format_day_number, DayNumber, ValidationError};

/// An inclusive `[start_date, end_date]` interval of day numbers.
///
/// Never holds `start_date > end_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDateRange")]
pub struct DateRange {
    start_date: DayNumber,
    end_date: DayNumber,
}

/// Unchecked wire form, validated on deserialization.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDateRange {
    start_date: DayNumber,
    end_date: DayNumber,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = ValidationError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::try_new(raw.start_date, raw.end_date)
    }
}

impl DateRange {
    /// Creates a range.
    ///
    /// # Panics
    /// Panics if `start_date > end_date`. Callers inside the crate only build
    /// ranges from ordered bounds; use [`DateRange::try_new`] for external
    /// input.
    pub fn new(start_date: DayNumber, end_date: DayNumber) -> Self {
        assert!(
            start_date <= end_date,
            "DateRange start {} is after end {}",
            start_date,
            end_date
        );
        Self {
            start_date,
            end_date,
        }
    }

    /// Creates a range, returning error if the bounds are inverted.
    pub fn try_new(start_date: DayNumber, end_date: DayNumber) -> Result<Self, ValidationError> {
        if start_date > end_date {
            return Err(ValidationError::invalid_range(start_date, end_date));
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Creates a single-day range.
    pub fn single(day: DayNumber) -> Self {
        Self::new(day, day)
    }

    /// Creates a range of `length` days starting at `start_date`.
    ///
    /// Lengths below one are treated as one day.
    pub fn with_length(start_date: DayNumber, length: i64) -> Self {
        Self::new(start_date, start_date + length.max(1) - 1)
    }

    pub fn start_date(&self) -> DayNumber {
        self.start_date
    }

    pub fn end_date(&self) -> DayNumber {
        self.end_date
    }

    /// Number of days covered, both ends included.
    pub fn len_days(&self) -> i64 {
        self.end_date - self.start_date + 1
    }

    pub fn contains(&self, day: DayNumber) -> bool {
        day >= self.start_date && day <= self.end_date
    }

    /// Checks if `other` lies completely inside this range.
    pub fn contains_range(&self, other: &DateRange) -> bool {
        other.start_date >= self.start_date && other.end_date <= self.end_date
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    /// Returns the common part of both ranges, if any.
    pub fn intersect(&self, other: &DateRange) -> Option<DateRange> {
        let start = self.start_date.max(other.start_date);
        let end = self.end_date.min(other.end_date);
        (start <= end).then(|| DateRange::new(start, end))
    }

    /// Cuts the range so it ends before `day`.
    ///
    /// Returns `None` if the whole range lies at or after `day`.
    pub fn truncate_before(&self, day: DayNumber) -> Option<DateRange> {
        if self.start_date >= day {
            None
        } else {
            Some(DateRange::new(self.start_date, self.end_date.min(day - 1)))
        }
    }

    /// Iterates every day number in the range.
    pub fn days(&self) -> impl Iterator<Item = DayNumber> {
        self.start_date..=self.end_date
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            format_day_number(self.start_date),
            format_day_number(self.end_date)
        )
    }
}
