//! Application handlers.
//!
//! Query handlers that orchestrate repository access and domain calculations.

pub mod cycle;

pub use cycle::{
    CalculateCycleInfoError, CalculateCycleInfoHandler, CalculateCycleInfoQuery,
    CalculateCycleInfoResult, DaySelection, GetDayStatusError, GetDayStatusHandler,
    GetDayStatusQuery,
};
