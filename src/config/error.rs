//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),

    #[error("Snapshot path must end in .json, .yaml or .yml")]
    InvalidSnapshotPath,

    #[error("Average cycle must be between 1 and 100 days")]
    InvalidAverageCycle,

    #[error("Average period must be between 1 day and the average cycle")]
    InvalidAveragePeriod,

    #[error("Pill count must be between 1 and 60")]
    InvalidPillCount,

    #[error("Rest days must be between 0 and 30")]
    InvalidRestPill,
}
