//! Domain layer containing the prediction engine and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (day numbers, date ranges, IDs, errors)
//! - `cycle` - Period, ovulation, pill and pregnancy records plus computed projections
//! - `prediction` - Pure calculators for periods, ovulation, delay and day status

pub mod cycle;
pub mod foundation;
pub mod prediction;
