//! Ovulation Calculator - Windows derived from user-asserted ovulation signals.

use std::collections::BTreeSet;

use crate::domain::cycle::{OvulationDay, OvulationTest, PregnancyInfo};
use crate::domain::foundation::{DateRange, DayNumber};

/// Days the fertile window opens before an asserted ovulation.
pub const FERTILE_DAYS_BEFORE_OVULATION: i64 = 2;

/// Days the fertile window stays open after an asserted ovulation.
pub const FERTILE_DAYS_AFTER_OVULATION: i64 = 1;

/// Days from ovulation to the next period.
pub const LUTEAL_PHASE_DAYS: i64 = 14;

/// Pure functions over ovulation dates.
pub struct OvulationCalculator;

impl OvulationCalculator {
    /// Groups dates into maximal runs of consecutive days.
    ///
    /// # Edge Cases
    /// - Empty input: Returns empty Vec
    /// - Duplicates and ordering are irrelevant
    pub fn merge_consecutive_dates<'a, I>(dates: I) -> Vec<DateRange>
    where
        I: IntoIterator<Item = &'a DayNumber>,
    {
        let sorted: BTreeSet<DayNumber> = dates.into_iter().copied().collect();
        let mut ranges: Vec<DateRange> = Vec::new();

        for day in sorted {
            match ranges.last_mut() {
                Some(last) if last.end_date() + 1 == day => {
                    *last = DateRange::new(last.start_date(), day);
                }
                _ => ranges.push(DateRange::single(day)),
            }
        }

        ranges
    }

    /// Union of positive test dates and manual ovulation days within
    /// `[from_date, to_date]`.
    ///
    /// A manual day and a test on the same date count once; different dates
    /// are all kept.
    pub fn combine_ovulation_dates(
        tests: &[OvulationTest],
        user_days: &[OvulationDay],
        from_date: DayNumber,
        to_date: DayNumber,
    ) -> BTreeSet<DayNumber> {
        let in_range = |day: &DayNumber| *day >= from_date && *day <= to_date;

        tests
            .iter()
            .filter(|test| test.is_positive())
            .map(|test| test.date)
            .chain(user_days.iter().map(|day| day.date))
            .filter(in_range)
            .collect()
    }

    /// Fertile windows of `[start - 2, end + 1]` around each ovulation range.
    pub fn fertile_from_ovulation(ovulation_ranges: &[DateRange]) -> Vec<DateRange> {
        ovulation_ranges
            .iter()
            .map(|range| {
                DateRange::new(
                    range.start_date() - FERTILE_DAYS_BEFORE_OVULATION,
                    range.end_date() + FERTILE_DAYS_AFTER_OVULATION,
                )
            })
            .collect()
    }

    /// Drops or truncates ranges at the start of an active pregnancy.
    ///
    /// # Edge Cases
    /// - No pregnancy, inactive pregnancy, or no known start: unchanged
    /// - Range straddling the start: ends the day before
    pub fn filter_by_pregnancy(
        ranges: Vec<DateRange>,
        pregnancy: Option<&PregnancyInfo>,
    ) -> Vec<DateRange> {
        match pregnancy_cutoff(pregnancy) {
            Some(start) => ranges
                .into_iter()
                .filter_map(|range| range.truncate_before(start))
                .collect(),
            None => ranges,
        }
    }

    /// Cycle length implied by an asserted ovulation in a cycle starting on
    /// `anchor`, assuming a 14-day luteal phase.
    ///
    /// Returns `None` if the ovulation lies before the anchor.
    pub fn implied_cycle_length(anchor: DayNumber, ovulation: &DateRange) -> Option<i64> {
        let offset = ovulation.end_date() - anchor;
        (offset >= 0).then(|| offset + LUTEAL_PHASE_DAYS)
    }
}

/// Start day of an active pregnancy, if one is known.
pub(crate) fn pregnancy_cutoff(pregnancy: Option<&PregnancyInfo>) -> Option<DayNumber> {
    let pregnancy = pregnancy.filter(|p| p.is_active())?;
    let start = pregnancy.effective_start_date();
    if start.is_none() {
        tracing::warn!("Active pregnancy without a start date, skipping pregnancy filter");
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cycle::OvulationTestResult;
    use proptest::prelude::*;

    #[test]
    fn merge_empty_input_is_empty() {
        let dates: Vec<DayNumber> = vec![];
        assert!(OvulationCalculator::merge_consecutive_dates(&dates).is_empty());
    }

    #[test]
    fn merge_groups_consecutive_runs() {
        let dates = vec![10, 11, 12, 15, 17, 18];
        let ranges = OvulationCalculator::merge_consecutive_dates(&dates);
        assert_eq!(
            ranges,
            vec![
                DateRange::new(10, 12),
                DateRange::single(15),
                DateRange::new(17, 18)
            ]
        );
    }

    #[test]
    fn merge_ignores_order_and_duplicates() {
        let dates = vec![12, 10, 11, 11];
        let ranges = OvulationCalculator::merge_consecutive_dates(&dates);
        assert_eq!(ranges, vec![DateRange::new(10, 12)]);
    }

    #[test]
    fn combine_keeps_only_positive_tests() {
        let tests = vec![
            OvulationTest::positive(10),
            OvulationTest::new(11, OvulationTestResult::Negative),
            OvulationTest::new(12, OvulationTestResult::Unclear),
        ];
        let dates = OvulationCalculator::combine_ovulation_dates(&tests, &[], 0, 100);
        assert_eq!(dates.into_iter().collect::<Vec<_>>(), vec![10]);
    }

    #[test]
    fn combine_keeps_manual_days_alongside_tests() {
        let tests = vec![OvulationTest::positive(10)];
        let days = vec![OvulationDay::new(14), OvulationDay::new(10)];
        let dates = OvulationCalculator::combine_ovulation_dates(&tests, &days, 0, 100);
        assert_eq!(dates.into_iter().collect::<Vec<_>>(), vec![10, 14]);
    }

    #[test]
    fn combine_restricts_to_range() {
        let tests = vec![OvulationTest::positive(5), OvulationTest::positive(50)];
        let days = vec![OvulationDay::new(20), OvulationDay::new(31)];
        let dates = OvulationCalculator::combine_ovulation_dates(&tests, &days, 10, 30);
        assert_eq!(dates.into_iter().collect::<Vec<_>>(), vec![20]);
    }

    #[test]
    fn fertile_window_wraps_ovulation() {
        let fertile = OvulationCalculator::fertile_from_ovulation(&[DateRange::new(20, 21)]);
        assert_eq!(fertile, vec![DateRange::new(18, 22)]);
    }

    #[test]
    fn single_day_ovulation_gives_four_day_window() {
        let fertile = OvulationCalculator::fertile_from_ovulation(&[DateRange::single(20)]);
        assert_eq!(fertile[0].len_days(), 4);
    }

    #[test]
    fn filter_without_pregnancy_passes_through() {
        let ranges = vec![DateRange::new(1, 5), DateRange::new(10, 20)];
        assert_eq!(
            OvulationCalculator::filter_by_pregnancy(ranges.clone(), None),
            ranges
        );
    }

    #[test]
    fn filter_drops_and_truncates_at_pregnancy_start() {
        let pregnancy = PregnancyInfo::starting(12);
        let ranges = vec![
            DateRange::new(1, 5),
            DateRange::new(10, 20),
            DateRange::new(12, 14),
            DateRange::new(30, 35),
        ];
        let filtered = OvulationCalculator::filter_by_pregnancy(ranges, Some(&pregnancy));
        assert_eq!(filtered, vec![DateRange::new(1, 5), DateRange::new(10, 11)]);
    }

    #[test]
    fn filter_ignores_inactive_pregnancy() {
        let pregnancy = PregnancyInfo {
            is_miscarriage: true,
            ..PregnancyInfo::starting(12)
        };
        let ranges = vec![DateRange::new(10, 20)];
        assert_eq!(
            OvulationCalculator::filter_by_pregnancy(ranges.clone(), Some(&pregnancy)),
            ranges
        );
    }

    #[test]
    fn filter_skips_pregnancy_without_start() {
        let pregnancy = PregnancyInfo::default();
        let ranges = vec![DateRange::new(10, 20)];
        assert_eq!(
            OvulationCalculator::filter_by_pregnancy(ranges.clone(), Some(&pregnancy)),
            ranges
        );
    }

    #[test]
    fn implied_cycle_length_adds_luteal_phase() {
        assert_eq!(
            OvulationCalculator::implied_cycle_length(100, &DateRange::new(112, 114)),
            Some(28)
        );
        assert_eq!(
            OvulationCalculator::implied_cycle_length(100, &DateRange::single(90)),
            None
        );
    }

    proptest! {
        #[test]
        fn merging_is_idempotent(dates in proptest::collection::vec(0i64..200, 0..40)) {
            let once = OvulationCalculator::merge_consecutive_dates(&dates);
            let expanded: Vec<DayNumber> = once.iter().flat_map(|r| r.days()).collect();
            let twice = OvulationCalculator::merge_consecutive_dates(&expanded);
            prop_assert_eq!(&once, &twice);

            for pair in once.windows(2) {
                prop_assert!(pair[0].end_date() + 1 < pair[1].start_date());
            }
        }

        #[test]
        fn pregnancy_filter_never_reaches_start(
            bounds in proptest::collection::vec((0i64..300, 0i64..30), 0..20),
            start in 0i64..300,
        ) {
            let ranges: Vec<DateRange> = bounds
                .into_iter()
                .map(|(s, len)| DateRange::new(s, s + len))
                .collect();
            let pregnancy = PregnancyInfo::starting(start);
            let filtered = OvulationCalculator::filter_by_pregnancy(ranges, Some(&pregnancy));
            prop_assert!(filtered.iter().all(|r| r.end_date() < start));
        }
    }
}
