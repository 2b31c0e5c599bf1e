//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::DayNumber;

/// Namespace for period ids derived from a start date.
const PERIOD_NAMESPACE: Uuid = Uuid::from_u128(0x6c1f_3a52_9d0e_4b7a_8e21_5f94_c0d3_17ab);

/// Stable identifier of one recorded period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodId(Uuid);

impl PeriodId {
    /// Creates a new random PeriodId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PeriodId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Deterministic id for a record that arrives without one.
    ///
    /// The same start date always yields the same id.
    pub fn from_start_date(start_date: DayNumber) -> Self {
        Self::from_uuid(Uuid::new_v5(&PERIOD_NAMESPACE, &start_date.to_be_bytes()))
    }
}

impl Default for PeriodId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PeriodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PeriodId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
