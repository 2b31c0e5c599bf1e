//! Foundation module - Shared domain primitives.
//!
//! Contains the day-number value space, the inclusive date range, identifiers
//! and error types that form the vocabulary of the cycle engine.

mod date_range;
mod day_number;
mod errors;
mod ids;

pub use date_range::DateRange;
pub use day_number::{
    date_from_day_number, day_number_from_date, format_day_number, parse_day_number, DayNumber,
    DAYS_PER_WEEK,
};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::PeriodId;
