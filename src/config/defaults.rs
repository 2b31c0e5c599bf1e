//! Prediction defaults configuration

use serde::Deserialize;

use super::error::ConfigValidationError;
use crate::domain::cycle::{
    PeriodSettings, PillSettings, DEFAULT_AVERAGE_CYCLE, DEFAULT_AVERAGE_DAY, DEFAULT_PILL_COUNT,
    DEFAULT_REST_PILL,
};

/// Settings used when a snapshot carries none of its own
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    /// Average cycle length in days
    #[serde(default = "default_average_cycle")]
    pub average_cycle: i64,

    /// Average period length in days
    #[serde(default = "default_average_period")]
    pub average_period: i64,

    /// Active pills per package
    #[serde(default = "default_pill_count")]
    pub pill_count: i64,

    /// Rest days per package
    #[serde(default = "default_rest_pill")]
    pub rest_pill: i64,
}

impl DefaultsConfig {
    /// Manual period settings built from the configured averages
    pub fn period_settings(&self) -> PeriodSettings {
        PeriodSettings::manual(self.average_cycle, self.average_period)
    }

    /// Pill settings with the calculation switched off
    pub fn pill_settings(&self) -> PillSettings {
        PillSettings {
            is_calculating_with_pill: false,
            pill_count: self.pill_count,
            rest_pill: self.rest_pill,
        }
    }

    /// Validate defaults configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(1..=100).contains(&self.average_cycle) {
            return Err(ConfigValidationError::InvalidAverageCycle);
        }
        if !(1..=self.average_cycle).contains(&self.average_period) {
            return Err(ConfigValidationError::InvalidAveragePeriod);
        }
        if !(1..=60).contains(&self.pill_count) {
            return Err(ConfigValidationError::InvalidPillCount);
        }
        if !(0..=30).contains(&self.rest_pill) {
            return Err(ConfigValidationError::InvalidRestPill);
        }
        Ok(())
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            average_cycle: default_average_cycle(),
            average_period: default_average_period(),
            pill_count: default_pill_count(),
            rest_pill: default_rest_pill(),
        }
    }
}

fn default_average_cycle() -> i64 {
    DEFAULT_AVERAGE_CYCLE
}

fn default_average_period() -> i64 {
    DEFAULT_AVERAGE_DAY
}

fn default_pill_count() -> i64 {
    DEFAULT_PILL_COUNT
}

fn default_rest_pill() -> i64 {
    DEFAULT_REST_PILL
}
