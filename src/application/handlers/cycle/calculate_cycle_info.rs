//! CalculateCycleInfoHandler - Query handler for cycle projections.
//!
//! Loads the records around the requested window, resolves "today" and runs
//! the prediction engine.

use std::sync::Arc;

use thiserror::Error;

use super::load_input::load_cycle_input;
use crate::domain::cycle::CycleInfo;
use crate::domain::foundation::{DayNumber, DomainError};
use crate::domain::prediction::PeriodCalculator;
use crate::ports::{Clock, CycleRepository};

/// Query for the cycles touching `[from_date, to_date]`.
#[derive(Debug, Clone)]
pub struct CalculateCycleInfoQuery {
    pub from_date: DayNumber,
    pub to_date: DayNumber,
    /// Defaults to the clock's current day.
    pub today: Option<DayNumber>,
}

/// Result of a successful cycle query, in chronological order.
pub type CalculateCycleInfoResult = Vec<CycleInfo>;

/// Error type for calculating cycle info.
#[derive(Debug, Clone, Error)]
pub enum CalculateCycleInfoError {
    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<DomainError> for CalculateCycleInfoError {
    fn from(err: DomainError) -> Self {
        CalculateCycleInfoError::Repository(err.to_string())
    }
}

/// Handler for computing cycle projections.
pub struct CalculateCycleInfoHandler {
    repository: Arc<dyn CycleRepository>,
    clock: Arc<dyn Clock>,
}

impl CalculateCycleInfoHandler {
    pub fn new(repository: Arc<dyn CycleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(
        &self,
        query: CalculateCycleInfoQuery,
    ) -> Result<CalculateCycleInfoResult, CalculateCycleInfoError> {
        if query.from_date > query.to_date {
            tracing::debug!(
                from_date = query.from_date,
                to_date = query.to_date,
                "Inverted cycle query"
            );
            return Ok(Vec::new());
        }

        let today = query.today.unwrap_or_else(|| self.clock.today());
        let input = load_cycle_input(self.repository.as_ref(), query.from_date, query.to_date).await?;

        Ok(PeriodCalculator::calculate_cycle_info(
            &input,
            query.from_date,
            query.to_date,
            today,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, InMemoryCycleRepository};
    use crate::domain::cycle::{
        OvulationDay, OvulationTest, PeriodRecord, PeriodSettings, PillPackage, PillSettings,
        PregnancyInfo,
    };
    use crate::domain::foundation::{DateRange, ErrorCode};
    use async_trait::async_trait;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    struct FailingRepository;

    fn offline() -> DomainError {
        DomainError::new(ErrorCode::RepositoryUnavailable, "Simulated read failure")
    }

    #[async_trait]
    impl CycleRepository for FailingRepository {
        async fn get_periods(&self) -> Result<Vec<PeriodRecord>, DomainError> {
            Err(offline())
        }

        async fn get_periods_between(
            &self,
            _from_date: DayNumber,
            _to_date: DayNumber,
        ) -> Result<Vec<PeriodRecord>, DomainError> {
            Err(offline())
        }

        async fn get_last_period_before(
            &self,
            _date: DayNumber,
        ) -> Result<Option<PeriodRecord>, DomainError> {
            Err(offline())
        }

        async fn get_first_period_after(
            &self,
            _date: DayNumber,
        ) -> Result<Option<PeriodRecord>, DomainError> {
            Err(offline())
        }

        async fn get_period_settings(&self) -> Result<PeriodSettings, DomainError> {
            Err(offline())
        }

        async fn get_ovulation_tests(&self) -> Result<Vec<OvulationTest>, DomainError> {
            Err(offline())
        }

        async fn get_user_ovulation_days(&self) -> Result<Vec<OvulationDay>, DomainError> {
            Err(offline())
        }

        async fn get_pill_packages(&self) -> Result<Vec<PillPackage>, DomainError> {
            Err(offline())
        }

        async fn get_pill_settings(&self) -> Result<PillSettings, DomainError> {
            Err(offline())
        }

        async fn get_active_pregnancy(&self) -> Result<Option<PregnancyInfo>, DomainError> {
            Err(offline())
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Test Helpers
    // ─────────────────────────────────────────────────────────────────────

    async fn repository_with(periods: &[(DayNumber, DayNumber)]) -> Arc<InMemoryCycleRepository> {
        let repo = InMemoryCycleRepository::new();
        for (start, end) in periods {
            repo.add_period(PeriodRecord::new(*start, *end).unwrap()).await;
        }
        Arc::new(repo)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn uses_clock_when_today_missing() {
        let repo = repository_with(&[(100, 104)]).await;
        let handler = CalculateCycleInfoHandler::new(repo, Arc::new(FixedClock(131)));

        let cycles = handler
            .handle(CalculateCycleInfoQuery {
                from_date: 100,
                to_date: 200,
                today: None,
            })
            .await
            .unwrap();

        assert_eq!(cycles[0].delay_the_days, 4);
        assert_eq!(cycles[0].predict_days[0].start_date(), 132);
    }

    #[tokio::test]
    async fn explicit_today_overrides_clock() {
        let repo = repository_with(&[(100, 104)]).await;
        let handler = CalculateCycleInfoHandler::new(repo, Arc::new(FixedClock(131)));

        let cycles = handler
            .handle(CalculateCycleInfoQuery {
                from_date: 100,
                to_date: 200,
                today: Some(105),
            })
            .await
            .unwrap();

        assert_eq!(cycles[0].delay_the_days, 0);
        assert_eq!(cycles[0].predict_days[0].start_date(), 128);
    }

    #[tokio::test]
    async fn window_starting_mid_cycle_keeps_anchor() {
        let repo = repository_with(&[(100, 104), (130, 134)]).await;
        let handler = CalculateCycleInfoHandler::new(repo, Arc::new(FixedClock(140)));

        let cycles = handler
            .handle(CalculateCycleInfoQuery {
                from_date: 110,
                to_date: 125,
                today: None,
            })
            .await
            .unwrap();

        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].period, 30);
        assert_eq!(cycles[0].actual_period, Some(DateRange::new(100, 104)));
    }

    #[tokio::test]
    async fn inverted_window_returns_empty() {
        let handler =
            CalculateCycleInfoHandler::new(Arc::new(FailingRepository), Arc::new(FixedClock(0)));

        let cycles = handler
            .handle(CalculateCycleInfoQuery {
                from_date: 200,
                to_date: 100,
                today: None,
            })
            .await
            .unwrap();

        assert!(cycles.is_empty());
    }

    #[tokio::test]
    async fn repository_failure_is_reported() {
        let handler =
            CalculateCycleInfoHandler::new(Arc::new(FailingRepository), Arc::new(FixedClock(0)));

        let result = handler
            .handle(CalculateCycleInfoQuery {
                from_date: 100,
                to_date: 200,
                today: None,
            })
            .await;

        match result {
            Err(CalculateCycleInfoError::Repository(msg)) => {
                assert!(msg.contains("REPOSITORY_UNAVAILABLE"));
            }
            other => panic!("Expected repository error, got {:?}", other),
        }
    }
}
