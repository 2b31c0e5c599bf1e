//! Computed projection of one cycle.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DateRange, DayNumber, PeriodId};

/// Where a cycle's ovulation window came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OvulationSource {
    /// Derived from the cycle-length formula for a cycle starting at `anchor`.
    Formula { anchor: DayNumber, period: i64 },
    /// Taken verbatim from positive tests and manual entries.
    UserAsserted { ranges: Vec<DateRange> },
}

impl OvulationSource {
    pub fn is_user_asserted(&self) -> bool {
        matches!(self, OvulationSource::UserAsserted { .. })
    }
}

/// Everything the engine knows about the cycle anchored on one period record.
///
/// Freshly computed on every call and owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleInfo {
    pub pk: PeriodId,
    pub actual_period: Option<DateRange>,
    /// Cycle length used for this cycle.
    pub period: i64,
    pub predict_days: Vec<DateRange>,
    pub ovulation_days: Vec<DateRange>,
    pub fertile_days: Vec<DateRange>,
    pub delay_the_days: i64,
    pub delay_day: Option<DateRange>,
    pub pregnancy_start_date: Option<DayNumber>,
    pub is_ovulation_period_user_input: bool,
    pub ovulation_day_period: Option<i64>,
    pub the_pill_period: Option<i64>,
    pub rest_pill: Option<i64>,
    /// One entry per evaluated cycle span, in chronological order.
    pub ovulation_sources: Vec<OvulationSource>,
}

impl CycleInfo {
    /// An empty projection for `pk` with the given cycle length.
    pub fn new(pk: PeriodId, period: i64) -> Self {
        Self {
            pk,
            actual_period: None,
            period,
            predict_days: Vec::new(),
            ovulation_days: Vec::new(),
            fertile_days: Vec::new(),
            delay_the_days: 0,
            delay_day: None,
            pregnancy_start_date: None,
            is_ovulation_period_user_input: false,
            ovulation_day_period: None,
            the_pill_period: None,
            rest_pill: None,
            ovulation_sources: Vec::new(),
        }
    }

    /// Checks if none of the derived windows survived clipping.
    pub fn has_no_windows(&self) -> bool {
        self.predict_days.is_empty() && self.ovulation_days.is_empty() && self.fertile_days.is_empty()
    }
}

/// Classification of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayType {
    PeriodOngoing,
    PeriodPredicted,
    Ovulation,
    Fertile,
    None,
    /// No period history exists at all.
    Empty,
}

/// The status of one day plus the length of the cycle it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStatus {
    pub date: DayNumber,
    #[serde(rename = "type")]
    pub day_type: DayType,
    pub period: Option<i64>,
}

impl DayStatus {
    pub fn new(date: DayNumber, day_type: DayType, period: Option<i64>) -> Self {
        Self {
            date,
            day_type,
            period,
        }
    }

    /// Status for a user without any period records.
    pub fn empty(date: DayNumber) -> Self {
        Self::new(date, DayType::Empty, None)
    }
}
