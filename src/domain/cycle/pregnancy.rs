//! Pregnancy state as recorded by the user.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DayNumber, DAYS_PER_WEEK};
use crate::domain::prediction::PregnancyCalculator;

/// A recorded pregnancy.
///
/// Only an active pregnancy (not ended, not miscarried, not deleted) affects
/// predictions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PregnancyInfo {
    pub starts_date: Option<DayNumber>,
    /// Last menstrual period, used when `starts_date` was never set.
    pub last_the_day_date: Option<DayNumber>,
    pub due_date: Option<DayNumber>,
    pub is_due_date_decided: bool,
    pub is_ended: bool,
    pub is_miscarriage: bool,
    pub is_deleted: bool,
    pub is_multiple_birth: bool,
    pub before_weight: Option<f64>,
    pub current_weight: Option<f64>,
}

impl PregnancyInfo {
    /// An ongoing pregnancy starting on `starts_date`.
    pub fn starting(starts_date: DayNumber) -> Self {
        Self {
            starts_date: Some(starts_date),
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        !self.is_ended && !self.is_miscarriage && !self.is_deleted
    }

    /// Start of the pregnancy, derived from the last period when unset.
    pub fn effective_start_date(&self) -> Option<DayNumber> {
        self.starts_date.or(self.last_the_day_date)
    }

    /// The user's due date when decided, otherwise start + 280 days.
    pub fn effective_due_date(&self) -> Option<DayNumber> {
        if self.is_due_date_decided {
            if let Some(due) = self.due_date {
                return Some(due);
            }
        }
        self.effective_start_date()
            .map(PregnancyCalculator::calculate_due_date)
    }

    /// Completed weeks since the start (floored, negative before the start).
    pub fn weeks_from_start(&self, current_date: DayNumber) -> Option<i64> {
        self.effective_start_date()
            .map(|start| (current_date - start).div_euclid(DAYS_PER_WEEK))
    }

    /// Days left until the due date; negative once overdue.
    pub fn days_until_due(&self, current_date: DayNumber) -> Option<i64> {
        self.effective_due_date().map(|due| due - current_date)
    }
}
