//! Assembles a `CycleInput` for a query window from the repository.

use std::collections::HashSet;

use crate::domain::cycle::CycleInput;
use crate::domain::foundation::{DayNumber, DomainError};
use crate::ports::CycleRepository;

/// Loads the periods overlapping `[from_date, to_date]` plus the nearest
/// record on each side, so a window starting mid-cycle keeps its anchor and
/// the last cycle inside it keeps its successor.
pub(crate) async fn load_cycle_input(
    repository: &dyn CycleRepository,
    from_date: DayNumber,
    to_date: DayNumber,
) -> Result<CycleInput, DomainError> {
    let mut periods = repository.get_periods_between(from_date, to_date).await?;
    let before = repository.get_last_period_before(from_date).await?;
    let after = repository.get_first_period_after(to_date).await?;

    let mut seen: HashSet<_> = periods.iter().map(|p| p.pk).collect();
    for record in before.into_iter().chain(after) {
        if seen.insert(record.pk) {
            periods.push(record);
        }
    }

    Ok(CycleInput {
        periods,
        settings: repository.get_period_settings().await?,
        ovulation_tests: repository.get_ovulation_tests().await?,
        ovulation_days: repository.get_user_ovulation_days().await?,
        pill_packages: repository.get_pill_packages().await?,
        pill_settings: repository.get_pill_settings().await?,
        pregnancy: repository.get_active_pregnancy().await?,
    })
}
