//! Cycle repository port.
//!
//! Defines the contract for loading the records a cycle computation reads.
//! The engine itself never calls this port; handlers resolve everything up
//! front and pass a `CycleInput` to the calculators.

use async_trait::async_trait;

use crate::domain::cycle::{
    OvulationDay, OvulationTest, PeriodRecord, PeriodSettings, PillPackage, PillSettings,
    PregnancyInfo,
};
use crate::domain::foundation::{DayNumber, DomainError};

/// Repository port for one user's cycle history.
#[async_trait]
pub trait CycleRepository: Send + Sync {
    /// All recorded periods, in no particular order.
    async fn get_periods(&self) -> Result<Vec<PeriodRecord>, DomainError>;

    /// Periods overlapping `[from_date, to_date]`.
    async fn get_periods_between(
        &self,
        from_date: DayNumber,
        to_date: DayNumber,
    ) -> Result<Vec<PeriodRecord>, DomainError>;

    /// Latest period starting strictly before `date`.
    async fn get_last_period_before(
        &self,
        date: DayNumber,
    ) -> Result<Option<PeriodRecord>, DomainError>;

    /// Earliest period starting strictly after `date`.
    async fn get_first_period_after(
        &self,
        date: DayNumber,
    ) -> Result<Option<PeriodRecord>, DomainError>;

    async fn get_period_settings(&self) -> Result<PeriodSettings, DomainError>;

    async fn get_ovulation_tests(&self) -> Result<Vec<OvulationTest>, DomainError>;

    async fn get_user_ovulation_days(&self) -> Result<Vec<OvulationDay>, DomainError>;

    async fn get_pill_packages(&self) -> Result<Vec<PillPackage>, DomainError>;

    async fn get_pill_settings(&self) -> Result<PillSettings, DomainError>;

    /// The pregnancy currently in progress, if any.
    ///
    /// Implementations return only pregnancies that are not ended, miscarried
    /// or deleted.
    async fn get_active_pregnancy(&self) -> Result<Option<PregnancyInfo>, DomainError>;
}
