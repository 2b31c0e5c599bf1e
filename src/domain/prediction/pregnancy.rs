//! Pregnancy Calculator - Due dates and progress.

use crate::domain::cycle::PregnancyInfo;
use crate::domain::foundation::DayNumber;

/// Naegele's rule: 40 weeks from the reference date.
pub const GESTATION_DAYS: i64 = 280;

pub struct PregnancyCalculator;

impl PregnancyCalculator {
    /// Due date for a pregnancy dated from `reference_date`.
    pub fn calculate_due_date(reference_date: DayNumber) -> DayNumber {
        reference_date + GESTATION_DAYS
    }

    /// Completed weeks since the start; `None` without a known start.
    pub fn get_weeks_from_start(pregnancy: &PregnancyInfo, current_date: DayNumber) -> Option<i64> {
        pregnancy.weeks_from_start(current_date)
    }

    /// Days remaining until the due date; `None` without one.
    pub fn get_days_until_due(pregnancy: &PregnancyInfo, current_date: DayNumber) -> Option<i64> {
        pregnancy.days_until_due(current_date)
    }
}
