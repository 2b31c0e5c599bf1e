//! Ovulation signals entered by the user.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DayNumber;

/// Reading of an ovulation (LH) test strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OvulationTestResult {
    Positive,
    Negative,
    Unclear,
}

/// One logged ovulation test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvulationTest {
    pub date: DayNumber,
    pub result: OvulationTestResult,
}

impl OvulationTest {
    pub fn new(date: DayNumber, result: OvulationTestResult) -> Self {
        Self { date, result }
    }

    /// Shorthand for a positive reading.
    pub fn positive(date: DayNumber) -> Self {
        Self::new(date, OvulationTestResult::Positive)
    }

    pub fn is_positive(&self) -> bool {
        self.result == OvulationTestResult::Positive
    }
}

/// A day the user marked as ovulation by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvulationDay {
    pub date: DayNumber,
}

impl OvulationDay {
    pub fn new(date: DayNumber) -> Self {
        Self { date }
    }
}
