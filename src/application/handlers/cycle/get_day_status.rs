//! GetDayStatusHandler - Query handler for day classification.

use std::sync::Arc;

use thiserror::Error;

use super::load_input::load_cycle_input;
use crate::domain::cycle::DayStatus;
use crate::domain::foundation::{DayNumber, DomainError};
use crate::domain::prediction::PeriodCalculator;
use crate::ports::{Clock, CycleRepository};

/// Which days to classify.
#[derive(Debug, Clone)]
pub enum DaySelection {
    Single(DayNumber),
    Dates(Vec<DayNumber>),
    /// Every day of an inclusive range.
    Range { from_date: DayNumber, to_date: DayNumber },
}

impl DaySelection {
    /// Smallest window covering every selected day.
    fn bounds(&self) -> Option<(DayNumber, DayNumber)> {
        match self {
            DaySelection::Single(date) => Some((*date, *date)),
            DaySelection::Dates(dates) => Some((*dates.iter().min()?, *dates.iter().max()?)),
            DaySelection::Range { from_date, to_date } => {
                (from_date <= to_date).then_some((*from_date, *to_date))
            }
        }
    }
}

/// Query to classify one or more days.
#[derive(Debug, Clone)]
pub struct GetDayStatusQuery {
    pub selection: DaySelection,
    /// Defaults to the clock's current day.
    pub today: Option<DayNumber>,
}

impl GetDayStatusQuery {
    pub fn single(date: DayNumber) -> Self {
        Self {
            selection: DaySelection::Single(date),
            today: None,
        }
    }

    pub fn range(from_date: DayNumber, to_date: DayNumber) -> Self {
        Self {
            selection: DaySelection::Range { from_date, to_date },
            today: None,
        }
    }

    pub fn dates(dates: Vec<DayNumber>) -> Self {
        Self {
            selection: DaySelection::Dates(dates),
            today: None,
        }
    }

    pub fn as_of(mut self, today: DayNumber) -> Self {
        self.today = Some(today);
        self
    }
}

/// Error type for day classification.
#[derive(Debug, Clone, Error)]
pub enum GetDayStatusError {
    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<DomainError> for GetDayStatusError {
    fn from(err: DomainError) -> Self {
        GetDayStatusError::Repository(err.to_string())
    }
}

/// Handler for classifying days.
///
/// Returns one status per selected day, in selection order.
pub struct GetDayStatusHandler {
    repository: Arc<dyn CycleRepository>,
    clock: Arc<dyn Clock>,
}

impl GetDayStatusHandler {
    pub fn new(repository: Arc<dyn CycleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(
        &self,
        query: GetDayStatusQuery,
    ) -> Result<Vec<DayStatus>, GetDayStatusError> {
        let Some((from_date, to_date)) = query.selection.bounds() else {
            return Ok(Vec::new());
        };

        let today = query.today.unwrap_or_else(|| self.clock.today());
        let input = load_cycle_input(self.repository.as_ref(), from_date, to_date).await?;

        let statuses = match &query.selection {
            DaySelection::Single(date) => {
                vec![PeriodCalculator::get_day_status(&input, *date, today)]
            }
            DaySelection::Dates(dates) => {
                PeriodCalculator::get_day_statuses_for_dates(&input, dates, today)
            }
            DaySelection::Range { from_date, to_date } => {
                PeriodCalculator::get_day_statuses(&input, *from_date, *to_date, today)
            }
        };
        Ok(statuses)
    }
}
