//! Cycle query handlers.
//!
//! Handlers that load a user's records and run the prediction engine.

mod load_input;

// Query handlers
mod calculate_cycle_info;
mod get_day_status;

pub use calculate_cycle_info::{
    CalculateCycleInfoError, CalculateCycleInfoHandler, CalculateCycleInfoQuery,
    CalculateCycleInfoResult,
};
pub use get_day_status::{DaySelection, GetDayStatusError, GetDayStatusHandler, GetDayStatusQuery};
