//! Lazy sequence of predicted period windows.

use crate::domain::foundation::{DateRange, DayNumber};

/// Yields `[p, p + period_days - 1]` for `p = first, first + step, ...`.
///
/// Stops once `p` passes `until` or reaches `cutoff` (an active pregnancy's
/// start).
#[derive(Debug, Clone)]
pub struct PredictionSchedule {
    next: DayNumber,
    step: i64,
    period_days: i64,
    until: DayNumber,
    cutoff: Option<DayNumber>,
    exhausted: bool,
}

impl PredictionSchedule {
    pub fn new(
        first: DayNumber,
        step: i64,
        period_days: i64,
        until: DayNumber,
        cutoff: Option<DayNumber>,
    ) -> Self {
        Self {
            next: first,
            step: step.max(1),
            period_days: period_days.max(1),
            until,
            cutoff,
            exhausted: false,
        }
    }

    /// A schedule that yields nothing.
    pub fn empty() -> Self {
        Self {
            next: 0,
            step: 1,
            period_days: 1,
            until: 0,
            cutoff: None,
            exhausted: true,
        }
    }

    /// Distance between consecutive predicted starts.
    pub fn step(&self) -> i64 {
        self.step
    }
}

impl Iterator for PredictionSchedule {
    type Item = DateRange;

    fn next(&mut self) -> Option<DateRange> {
        if self.exhausted {
            return None;
        }
        let start = self.next;
        let blocked = self.cutoff.is_some_and(|cutoff| start >= cutoff);
        if start > self.until || blocked {
            self.exhausted = true;
            return None;
        }
        self.next += self.step;
        Some(DateRange::with_length(start, self.period_days))
    }
}

impl std::iter::FusedIterator for PredictionSchedule {}
