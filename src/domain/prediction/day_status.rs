//! Single-day classification over computed cycles.

use crate::domain::cycle::{CycleInfo, CycleInput, DayStatus, DayType};
use crate::domain::foundation::{DateRange, DayNumber};

use super::PeriodCalculator;

type WindowSelector = fn(&CycleInfo) -> &[DateRange];

/// Checked in priority order after the ongoing-period check.
const WINDOW_PRIORITY: [(DayType, WindowSelector); 3] = [
    (DayType::PeriodPredicted, |cycle| cycle.predict_days.as_slice()),
    (DayType::Ovulation, |cycle| cycle.ovulation_days.as_slice()),
    (DayType::Fertile, |cycle| cycle.fertile_days.as_slice()),
];

impl PeriodCalculator {
    /// Classifies `date`; `Empty` when no period has ever been recorded.
    pub fn get_day_status(input: &CycleInput, date: DayNumber, today: DayNumber) -> DayStatus {
        Self::get_day_statuses(input, date, date, today)
            .pop()
            .unwrap_or_else(|| DayStatus::empty(date))
    }

    /// Classifies every date in `dates`, computing cycles once over the
    /// range that covers them. Order of the input is preserved.
    pub fn get_day_statuses_for_dates(
        input: &CycleInput,
        dates: &[DayNumber],
        today: DayNumber,
    ) -> Vec<DayStatus> {
        let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) else {
            return Vec::new();
        };
        if input.periods.is_empty() {
            return dates.iter().map(|date| DayStatus::empty(*date)).collect();
        }

        let cycles = Self::calculate_cycle_info(input, *first, *last, today);
        dates
            .iter()
            .map(|date| classify(input, &cycles, *date))
            .collect()
    }

    /// Classifies each day of `[from_date, to_date]`.
    ///
    /// Returns an empty Vec for an inverted range.
    pub fn get_day_statuses(
        input: &CycleInput,
        from_date: DayNumber,
        to_date: DayNumber,
        today: DayNumber,
    ) -> Vec<DayStatus> {
        let Ok(range) = DateRange::try_new(from_date, to_date) else {
            return Vec::new();
        };
        let dates: Vec<DayNumber> = range.days().collect();
        Self::get_day_statuses_for_dates(input, &dates, today)
    }
}

fn classify(input: &CycleInput, cycles: &[CycleInfo], date: DayNumber) -> DayStatus {
    let ongoing = input.periods.iter().find(|record| record.range().contains(date));
    if let Some(record) = ongoing {
        let period = cycles
            .iter()
            .find(|cycle| cycle.pk == record.pk)
            .map(|cycle| cycle.period);
        return DayStatus::new(date, DayType::PeriodOngoing, period);
    }

    for (day_type, windows) in WINDOW_PRIORITY {
        let matching = cycles
            .iter()
            .find(|cycle| windows(cycle).iter().any(|window| window.contains(date)));
        if let Some(cycle) = matching {
            return DayStatus::new(date, day_type, Some(cycle.period));
        }
    }

    DayStatus::new(date, DayType::None, None)
}
