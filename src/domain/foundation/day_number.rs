//! Day-number value space and its conversion to calendar dates.
//!
//! The calculators work on plain day counts so that "add a cycle" is integer
//! addition. Conversion happens only at the crate boundary (CLI, snapshot
//! files, tests).

use chrono::{Datelike, NaiveDate};

use super::ValidationError;

/// Monotonic day count: 0001-01-01 (proleptic Gregorian) is day 1.
pub type DayNumber = i64;

/// Number of days a calendar week spans.
pub const DAYS_PER_WEEK: i64 = 7;

/// Converts a calendar date to its day number.
pub fn day_number_from_date(date: NaiveDate) -> DayNumber {
    i64::from(date.num_days_from_ce())
}

/// Converts a day number back to a calendar date.
///
/// Returns `None` outside chrono's representable range.
pub fn date_from_day_number(day: DayNumber) -> Option<NaiveDate> {
    i32::try_from(day)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

/// Parses an ISO `YYYY-MM-DD` string into a day number.
pub fn parse_day_number(value: &str) -> Result<DayNumber, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(day_number_from_date)
        .map_err(|e| ValidationError::invalid_format("date", e.to_string()))
}

/// Formats a day number as `YYYY-MM-DD`, falling back to the raw number.
pub fn format_day_number(day: DayNumber) -> String {
    match date_from_day_number(day) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => day.to_string(),
    }
}
