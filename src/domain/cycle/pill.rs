//! Hormonal contraceptive packages and settings.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DateRange, DayNumber};

/// Active pills in a standard package.
pub const DEFAULT_PILL_COUNT: i64 = 21;

/// Placebo/rest days in a standard package.
pub const DEFAULT_REST_PILL: i64 = 7;

/// Pill-related settings; the counts act as defaults for packages that
/// carry no values of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillSettings {
    pub is_calculating_with_pill: bool,
    pub pill_count: i64,
    pub rest_pill: i64,
}

impl PillSettings {
    /// Settings with the pill calculation switched on.
    pub fn enabled(pill_count: i64, rest_pill: i64) -> Self {
        Self {
            is_calculating_with_pill: true,
            pill_count,
            rest_pill,
        }
    }
}

impl Default for PillSettings {
    fn default() -> Self {
        Self {
            is_calculating_with_pill: false,
            pill_count: DEFAULT_PILL_COUNT,
            rest_pill: DEFAULT_REST_PILL,
        }
    }
}

/// One blister pack: active pills followed by rest days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillPackage {
    pub package_start: DayNumber,
    #[serde(default)]
    pub pill_count: Option<i64>,
    #[serde(default)]
    pub rest_days: Option<i64>,
}

impl PillPackage {
    pub fn new(package_start: DayNumber, pill_count: i64, rest_days: i64) -> Self {
        Self {
            package_start,
            pill_count: Some(pill_count),
            rest_days: Some(rest_days),
        }
    }

    /// Package that relies on the settings for its counts.
    pub fn starting(package_start: DayNumber) -> Self {
        Self {
            package_start,
            pill_count: None,
            rest_days: None,
        }
    }

    /// Active pill count, falling back to the settings; at least one.
    pub fn effective_pill_count(&self, settings: &PillSettings) -> i64 {
        self.pill_count.unwrap_or(settings.pill_count).max(1)
    }

    /// Rest days, falling back to the settings; never negative.
    pub fn effective_rest_days(&self, settings: &PillSettings) -> i64 {
        self.rest_days.unwrap_or(settings.rest_pill).max(0)
    }

    /// Days on which active pills are taken.
    pub fn active_window(&self, settings: &PillSettings) -> DateRange {
        DateRange::with_length(self.package_start, self.effective_pill_count(settings))
    }
}
