//! Immutable snapshot handed to the calculators.

use serde::{Deserialize, Serialize};

use super::{
    OvulationDay, OvulationTest, PeriodRecord, PeriodSettings, PillPackage, PillSettings,
    PregnancyInfo,
};

/// All records one computation reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CycleInput {
    pub periods: Vec<PeriodRecord>,
    pub settings: PeriodSettings,
    pub ovulation_tests: Vec<OvulationTest>,
    pub ovulation_days: Vec<OvulationDay>,
    pub pill_packages: Vec<PillPackage>,
    pub pill_settings: PillSettings,
    pub pregnancy: Option<PregnancyInfo>,
}

impl CycleInput {
    /// Input holding only periods and settings.
    pub fn new(periods: Vec<PeriodRecord>, settings: PeriodSettings) -> Self {
        Self {
            periods,
            settings,
            ..Self::default()
        }
    }

    pub fn with_ovulation_tests(mut self, tests: Vec<OvulationTest>) -> Self {
        self.ovulation_tests = tests;
        self
    }

    pub fn with_ovulation_days(mut self, days: Vec<OvulationDay>) -> Self {
        self.ovulation_days = days;
        self
    }

    pub fn with_pills(mut self, packages: Vec<PillPackage>, settings: PillSettings) -> Self {
        self.pill_packages = packages;
        self.pill_settings = settings;
        self
    }

    pub fn with_pregnancy(mut self, pregnancy: Option<PregnancyInfo>) -> Self {
        self.pregnancy = pregnancy;
        self
    }

    /// Periods ordered by start date.
    pub fn sorted_periods(&self) -> Vec<&PeriodRecord> {
        let mut periods: Vec<_> = self.periods.iter().collect();
        periods.sort_by_key(|p| (p.start_date, p.end_date));
        periods
    }

    /// The active pregnancy, if any.
    pub fn active_pregnancy(&self) -> Option<&PregnancyInfo> {
        self.pregnancy.as_ref().filter(|p| p.is_active())
    }
}
