//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PERIOD_CALC` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use period_calculator::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Average cycle: {}", config.defaults.average_cycle);
//! ```

mod defaults;
mod error;
mod logging;
mod repository;

pub use defaults::DefaultsConfig;
pub use error::{ConfigError, ConfigValidationError};
pub use logging::LoggingConfig;
pub use repository::RepositoryConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Log output (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Record source (snapshot file)
    #[serde(default)]
    pub repository: RepositoryConfig,

    /// Fallback averages and pill counts
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PERIOD_CALC` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PERIOD_CALC__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    /// - `PERIOD_CALC__DEFAULTS__AVERAGE_CYCLE=30` -> `defaults.average_cycle = 30`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PERIOD_CALC")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.logging.validate()?;
        self.repository.validate()?;
        self.defaults.validate()?;
        Ok(())
    }
}
