//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The engine is read-only, so every handler here is a query handler.

pub mod handlers;

pub use handlers::{
    CalculateCycleInfoError, CalculateCycleInfoHandler, CalculateCycleInfoQuery,
    CalculateCycleInfoResult, DaySelection, GetDayStatusError, GetDayStatusHandler,
    GetDayStatusQuery,
};
