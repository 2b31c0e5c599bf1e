//! Period Calculator - Menstrual cycle prediction engine
//!
//! Projects recorded periods into predicted periods, ovulation and fertile
//! windows, and delay status, with optional pill and pregnancy overrides.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
