//! Clock port - the source of "today" for handlers.

use crate::domain::foundation::DayNumber;

/// Resolves the current calendar day.
pub trait Clock: Send + Sync {
    fn today(&self) -> DayNumber;
}
