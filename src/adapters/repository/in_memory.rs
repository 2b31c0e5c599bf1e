//! In-Memory Cycle Repository Adapter
//!
//! Holds one user's records in memory.
//! Useful for testing, and as the backing store of the snapshot adapter.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::cycle::{
    CycleInput, OvulationDay, OvulationTest, PeriodRecord, PeriodSettings, PillPackage,
    PillSettings, PregnancyInfo,
};
use crate::domain::foundation::{DayNumber, DomainError};
use crate::ports::CycleRepository;

/// In-memory storage for cycle records
#[derive(Debug, Clone, Default)]
pub struct InMemoryCycleRepository {
    data: Arc<RwLock<CycleInput>>,
}

impl InMemoryCycleRepository {
    /// Create an empty repository with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-filled with `input`
    pub fn from_input(input: CycleInput) -> Self {
        Self {
            data: Arc::new(RwLock::new(input)),
        }
    }

    pub async fn add_period(&self, record: PeriodRecord) {
        self.data.write().await.periods.push(record);
    }

    pub async fn set_period_settings(&self, settings: PeriodSettings) {
        self.data.write().await.settings = settings;
    }

    pub async fn add_ovulation_test(&self, test: OvulationTest) {
        self.data.write().await.ovulation_tests.push(test);
    }

    pub async fn add_ovulation_day(&self, day: OvulationDay) {
        self.data.write().await.ovulation_days.push(day);
    }

    pub async fn add_pill_package(&self, package: PillPackage) {
        self.data.write().await.pill_packages.push(package);
    }

    pub async fn set_pill_settings(&self, settings: PillSettings) {
        self.data.write().await.pill_settings = settings;
    }

    pub async fn set_pregnancy(&self, pregnancy: Option<PregnancyInfo>) {
        self.data.write().await.pregnancy = pregnancy;
    }

    /// Copy of everything stored
    pub async fn snapshot(&self) -> CycleInput {
        self.data.read().await.clone()
    }

    /// Get the number of stored periods
    pub async fn period_count(&self) -> usize {
        self.data.read().await.periods.len()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        *self.data.write().await = CycleInput::default();
    }
}

#[async_trait]
impl CycleRepository for InMemoryCycleRepository {
    async fn get_periods(&self) -> Result<Vec<PeriodRecord>, DomainError> {
        Ok(self.data.read().await.periods.clone())
    }

    async fn get_periods_between(
        &self,
        from_date: DayNumber,
        to_date: DayNumber,
    ) -> Result<Vec<PeriodRecord>, DomainError> {
        let data = self.data.read().await;
        Ok(data
            .periods
            .iter()
            .filter(|p| p.start_date <= to_date && p.end_date >= from_date)
            .cloned()
            .collect())
    }

    async fn get_last_period_before(
        &self,
        date: DayNumber,
    ) -> Result<Option<PeriodRecord>, DomainError> {
        let data = self.data.read().await;
        Ok(data
            .periods
            .iter()
            .filter(|p| p.start_date < date)
            .max_by_key(|p| p.start_date)
            .cloned())
    }

    async fn get_first_period_after(
        &self,
        date: DayNumber,
    ) -> Result<Option<PeriodRecord>, DomainError> {
        let data = self.data.read().await;
        Ok(data
            .periods
            .iter()
            .filter(|p| p.start_date > date)
            .min_by_key(|p| p.start_date)
            .cloned())
    }

    async fn get_period_settings(&self) -> Result<PeriodSettings, DomainError> {
        Ok(self.data.read().await.settings.clone())
    }

    async fn get_ovulation_tests(&self) -> Result<Vec<OvulationTest>, DomainError> {
        Ok(self.data.read().await.ovulation_tests.clone())
    }

    async fn get_user_ovulation_days(&self) -> Result<Vec<OvulationDay>, DomainError> {
        Ok(self.data.read().await.ovulation_days.clone())
    }

    async fn get_pill_packages(&self) -> Result<Vec<PillPackage>, DomainError> {
        Ok(self.data.read().await.pill_packages.clone())
    }

    async fn get_pill_settings(&self) -> Result<PillSettings, DomainError> {
        Ok(self.data.read().await.pill_settings.clone())
    }

    async fn get_active_pregnancy(&self) -> Result<Option<PregnancyInfo>, DomainError> {
        let data = self.data.read().await;
        Ok(data.active_pregnancy().cloned())
    }
}
