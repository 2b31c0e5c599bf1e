//! Period Calculator - Per-cycle projection over a query window.
//!
//! Every recorded period anchors one cycle. Historical cycles end the day
//! before the next record; the most recent cycle gets predicted periods, a
//! delay check and the ovulation windows of each predicted cycle.

use crate::domain::cycle::{CycleInfo, CycleInput, OvulationSource, PeriodRecord};
use crate::domain::foundation::{DateRange, DayNumber};

use super::ovulation::pregnancy_cutoff;
use super::{CycleFormula, DelayState, OvulationCalculator, PillCalculator, PredictionSchedule};

/// One evaluated cycle span: where the ovulation came from and its windows.
#[derive(Debug)]
struct SpanWindows {
    source: OvulationSource,
    ovulation: Vec<DateRange>,
    fertile: Vec<DateRange>,
    /// Cycle length implied by user-asserted ovulation in the anchor span.
    implied_period: Option<i64>,
}

/// Entry point of the prediction engine.
pub struct PeriodCalculator;

impl PeriodCalculator {
    /// Computes one `CycleInfo` per period record that touches `[from_date, to_date]`.
    ///
    /// # Edge Cases
    /// - `from_date > to_date`: Returns empty Vec
    /// - No period records: Returns empty Vec
    /// - Cycles with nothing inside the window are omitted
    pub fn calculate_cycle_info(
        input: &CycleInput,
        from_date: DayNumber,
        to_date: DayNumber,
        today: DayNumber,
    ) -> Vec<CycleInfo> {
        let Ok(query) = DateRange::try_new(from_date, to_date) else {
            tracing::debug!(from_date, to_date, "Inverted query range, nothing to compute");
            return Vec::new();
        };

        let periods = input.sorted_periods();
        let cutoff = pregnancy_cutoff(input.pregnancy.as_ref());

        let mut cycles = Vec::new();
        for (index, record) in periods.iter().enumerate() {
            let (info, spans) = match periods.get(index + 1) {
                Some(next) => Self::historical_cycle(input, record, next.start_date),
                None => Self::current_cycle(input, &periods, record, query, today, cutoff),
            };
            if let Some(info) = Self::clip_to_query(input, info, spans, query, cutoff) {
                tracing::debug!(
                    pk = %info.pk,
                    period = info.period,
                    predictions = info.predict_days.len(),
                    delay = info.delay_the_days,
                    "Computed cycle"
                );
                cycles.push(info);
            }
        }
        cycles
    }

    /// Cycle closed by a later record: its length is the gap between starts.
    fn historical_cycle(
        input: &CycleInput,
        record: &PeriodRecord,
        next_start: DayNumber,
    ) -> (CycleInfo, Vec<SpanWindows>) {
        let period = next_start - record.start_date;
        let mut info = CycleInfo::new(record.pk, period);
        info.actual_period = Some(record.range());

        let span = Self::span(record.start_date, next_start);
        let windows = Self::evaluate_anchor_span(input, span, period);
        (info, vec![windows])
    }

    /// The most recent cycle, carrying predictions and the delay state.
    fn current_cycle(
        input: &CycleInput,
        periods: &[&PeriodRecord],
        record: &PeriodRecord,
        query: DateRange,
        today: DayNumber,
        cutoff: Option<DayNumber>,
    ) -> (CycleInfo, Vec<SpanWindows>) {
        let anchor = record.start_date;
        let period = input.settings.effective_average_cycle();
        let period_days = input.settings.effective_average_day();

        let mut info = CycleInfo::new(record.pk, period);
        info.actual_period = Some(record.range());

        let (due, step) = match PillCalculator::resolve_override(
            anchor,
            period,
            &input.pill_packages,
            &input.pill_settings,
        ) {
            Some(pill) => {
                info.the_pill_period = Some(pill.pill_period);
                info.rest_pill = Some(pill.rest_pill);
                (pill.predict_date, pill.pill_period)
            }
            None => (anchor + period, period),
        };

        let recorded_since_due = periods.iter().any(|p| p.start_date >= due);
        let delay = DelayState::evaluate(due, today, recorded_since_due, cutoff);
        info.delay_the_days = delay.days();
        info.delay_day = delay.window();

        let first_prediction = delay.first_prediction(due, today);
        let schedule = match first_prediction {
            Some(first) => PredictionSchedule::new(first, step, period_days, query.end_date(), cutoff),
            None => PredictionSchedule::empty(),
        };
        let step = schedule.step();
        info.predict_days = schedule.collect();

        // The anchor cycle runs until the next expected start, or through
        // today while overdue.
        let next_start = first_prediction.unwrap_or(today + 1);
        let mut spans = vec![Self::evaluate_anchor_span(
            input,
            Self::span(anchor, next_start),
            period,
        )];
        spans.extend(info.predict_days.iter().map(|window| {
            Self::evaluate_span(input, DateRange::with_length(window.start_date(), step), step)
        }));

        (info, spans)
    }

    /// `[start, next_start - 1]`, never shorter than the start day.
    fn span(start: DayNumber, next_start: DayNumber) -> DateRange {
        DateRange::new(start, (next_start - 1).max(start))
    }

    /// User-asserted ovulation inside the span wins over the formula.
    fn evaluate_span(input: &CycleInput, span: DateRange, formula_period: i64) -> SpanWindows {
        let asserted = OvulationCalculator::combine_ovulation_dates(
            &input.ovulation_tests,
            &input.ovulation_days,
            span.start_date(),
            span.end_date(),
        );

        if asserted.is_empty() {
            let windows = CycleFormula::windows_at(span.start_date(), formula_period);
            return SpanWindows {
                source: OvulationSource::Formula {
                    anchor: span.start_date(),
                    period: formula_period,
                },
                ovulation: vec![windows.ovulation],
                fertile: vec![windows.fertile],
                implied_period: None,
            };
        }

        let ranges = OvulationCalculator::merge_consecutive_dates(&asserted);
        let fertile = OvulationCalculator::fertile_from_ovulation(&ranges);
        SpanWindows {
            source: OvulationSource::UserAsserted {
                ranges: ranges.clone(),
            },
            ovulation: ranges,
            fertile,
            implied_period: None,
        }
    }

    fn evaluate_anchor_span(input: &CycleInput, span: DateRange, period: i64) -> SpanWindows {
        let mut windows = Self::evaluate_span(input, span, period);
        if let OvulationSource::UserAsserted { ranges } = &windows.source {
            let anchor = span.start_date();
            windows.implied_period = ranges
                .first()
                .and_then(|first| OvulationCalculator::implied_cycle_length(anchor, first));
        }
        windows
    }

    /// Applies the pregnancy filter, clips to the query and decides whether
    /// the cycle is reported at all.
    ///
    /// A span whose windows are all clipped away contributes neither its
    /// source nor the user-input flag.
    fn clip_to_query(
        input: &CycleInput,
        mut info: CycleInfo,
        spans: Vec<SpanWindows>,
        query: DateRange,
        cutoff: Option<DayNumber>,
    ) -> Option<CycleInfo> {
        let pregnancy = input.pregnancy.as_ref();
        let clip = |ranges: Vec<DateRange>| -> Vec<DateRange> {
            OvulationCalculator::filter_by_pregnancy(ranges, pregnancy)
                .into_iter()
                .filter_map(|range| range.intersect(&query))
                .collect()
        };

        info.predict_days = clip(std::mem::take(&mut info.predict_days));
        for span in spans {
            let ovulation = clip(span.ovulation);
            let fertile = clip(span.fertile);
            if ovulation.is_empty() && fertile.is_empty() {
                continue;
            }
            info.is_ovulation_period_user_input |= span.source.is_user_asserted();
            if span.implied_period.is_some() {
                info.ovulation_day_period = span.implied_period;
            }
            info.ovulation_days.extend(ovulation);
            info.fertile_days.extend(fertile);
            info.ovulation_sources.push(span.source);
        }
        info.pregnancy_start_date = cutoff;

        let actual_in_query = info.actual_period.is_some_and(|actual| actual.overlaps(&query));
        if actual_in_query {
            info.actual_period = info.actual_period.and_then(|actual| actual.intersect(&query));
        }
        info.delay_day = info.delay_day.and_then(|delay| delay.intersect(&query));
        let delay_in_query = info.delay_day.is_some();

        if info.has_no_windows() && !delay_in_query && !actual_in_query {
            return None;
        }
        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cycle::{
        OvulationDay, OvulationTest, PeriodSettings, PillPackage, PillSettings, PregnancyInfo,
    };
    use crate::domain::foundation::day_number_from_date;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn day(y: i32, m: u32, d: u32) -> DayNumber {
        day_number_from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn range(from: (i32, u32, u32), to: (i32, u32, u32)) -> DateRange {
        DateRange::new(day(from.0, from.1, from.2), day(to.0, to.1, to.2))
    }

    fn single_period(start: DayNumber, end: DayNumber) -> CycleInput {
        CycleInput::new(
            vec![PeriodRecord::new(start, end).unwrap()],
            PeriodSettings::default(),
        )
    }

    #[test]
    fn standard_cycle_predicts_next_period_and_windows() {
        let input = single_period(day(2025, 1, 5), day(2025, 1, 9));

        let cycles = PeriodCalculator::calculate_cycle_info(
            &input,
            day(2025, 1, 1),
            day(2025, 2, 28),
            day(2025, 1, 10),
        );

        assert_eq!(cycles.len(), 1);
        let cycle = &cycles[0];
        assert_eq!(cycle.period, 28);
        assert_eq!(cycle.predict_days, vec![range((2025, 2, 2), (2025, 2, 6))]);
        assert_eq!(cycle.ovulation_days[0], range((2025, 1, 17), (2025, 1, 19)));
        assert_eq!(cycle.fertile_days[0], range((2025, 1, 12), (2025, 1, 23)));
        assert_eq!(cycle.actual_period, Some(range((2025, 1, 5), (2025, 1, 9))));
        assert_eq!(cycle.delay_the_days, 0);
        assert!(!cycle.is_ovulation_period_user_input);
    }

    #[test]
    fn predicted_cycles_carry_their_own_ovulation() {
        let input = single_period(day(2025, 1, 5), day(2025, 1, 9));

        let cycles = PeriodCalculator::calculate_cycle_info(
            &input,
            day(2025, 1, 1),
            day(2025, 2, 28),
            day(2025, 1, 10),
        );

        let cycle = &cycles[0];
        assert_eq!(cycle.ovulation_days.len(), 2);
        assert_eq!(cycle.ovulation_days[1], range((2025, 2, 14), (2025, 2, 16)));
        assert_eq!(cycle.ovulation_sources.len(), 2);
        assert_eq!(
            cycle.ovulation_sources[1],
            OvulationSource::Formula {
                anchor: day(2025, 2, 2),
                period: 28
            }
        );
    }

    #[test]
    fn short_historical_cycle_uses_relative_formula() {
        let input = CycleInput::new(
            vec![
                PeriodRecord::new(day(2025, 2, 10), day(2025, 2, 14)).unwrap(),
                PeriodRecord::new(day(2025, 3, 4), day(2025, 3, 8)).unwrap(),
            ],
            PeriodSettings::default(),
        );

        let cycles = PeriodCalculator::calculate_cycle_info(
            &input,
            day(2025, 2, 1),
            day(2025, 3, 3),
            day(2025, 3, 5),
        );

        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].period, 22);
        assert_eq!(cycles[0].ovulation_days, vec![range((2025, 2, 16), (2025, 2, 18))]);
        assert_eq!(cycles[0].fertile_days, vec![range((2025, 2, 13), (2025, 2, 21))]);
        assert!(cycles[0].predict_days.is_empty());
    }

    #[test]
    fn seven_day_delay_restarts_predictions_after_today() {
        let input = single_period(day(2025, 2, 26), day(2025, 3, 2));

        let cycles = PeriodCalculator::calculate_cycle_info(
            &input,
            day(2025, 2, 1),
            day(2025, 5, 31),
            day(2025, 4, 1),
        );

        let cycle = &cycles[0];
        assert_eq!(cycle.delay_the_days, 7);
        assert_eq!(cycle.delay_day, Some(range((2025, 3, 26), (2025, 4, 1))));
        assert_eq!(cycle.predict_days[0].start_date(), day(2025, 4, 2));
        assert_eq!(cycle.predict_days[1].start_date(), day(2025, 4, 30));
    }

    #[test]
    fn eight_day_delay_suppresses_predictions() {
        let input = single_period(day(2025, 2, 26), day(2025, 3, 2));

        let cycles = PeriodCalculator::calculate_cycle_info(
            &input,
            day(2025, 2, 1),
            day(2025, 5, 31),
            day(2025, 4, 2),
        );

        let cycle = &cycles[0];
        assert_eq!(cycle.delay_the_days, 8);
        assert_eq!(cycle.delay_day, Some(range((2025, 3, 26), (2025, 4, 2))));
        assert!(cycle.predict_days.is_empty());
        assert_eq!(cycle.ovulation_sources.len(), 1);
    }

    #[test]
    fn delayed_cycle_kept_for_delay_window_alone() {
        let input = single_period(day(2025, 2, 26), day(2025, 3, 2));

        let cycles = PeriodCalculator::calculate_cycle_info(
            &input,
            day(2025, 3, 28),
            day(2025, 3, 30),
            day(2025, 4, 10),
        );

        assert_eq!(cycles.len(), 1);
        assert!(cycles[0].has_no_windows());
        assert_eq!(cycles[0].delay_the_days, 16);
    }

    #[test]
    fn pill_package_inside_cycle_overrides_prediction() {
        let input = single_period(day(2025, 1, 3), day(2025, 1, 7)).with_pills(
            vec![
                PillPackage::new(day(2025, 1, 10), 21, 7),
                PillPackage::new(day(2025, 2, 7), 21, 7),
            ],
            PillSettings::enabled(21, 7),
        );

        let cycles = PeriodCalculator::calculate_cycle_info(
            &input,
            day(2025, 1, 1),
            day(2025, 4, 30),
            day(2025, 1, 20),
        );

        let cycle = &cycles[0];
        assert_eq!(cycle.predict_days[0].start_date(), day(2025, 3, 2));
        assert_eq!(cycle.predict_days[1].start_date(), day(2025, 3, 30));
        assert_eq!(cycle.the_pill_period, Some(28));
        assert_eq!(cycle.rest_pill, Some(7));
    }

    #[test]
    fn pills_ignored_when_switched_off() {
        let input = single_period(day(2025, 1, 3), day(2025, 1, 7)).with_pills(
            vec![PillPackage::new(day(2025, 1, 10), 21, 7)],
            PillSettings::default(),
        );

        let cycles = PeriodCalculator::calculate_cycle_info(
            &input,
            day(2025, 1, 1),
            day(2025, 2, 28),
            day(2025, 1, 20),
        );

        assert_eq!(cycles[0].predict_days[0].start_date(), day(2025, 1, 31));
        assert_eq!(cycles[0].the_pill_period, None);
    }

    #[test]
    fn pregnancy_blocks_predictions_and_truncates_windows() {
        let input = single_period(100, 104).with_pregnancy(Some(PregnancyInfo::starting(110)));

        let cycles = PeriodCalculator::calculate_cycle_info(&input, 90, 400, 105);

        let cycle = &cycles[0];
        assert!(cycle.predict_days.is_empty());
        assert!(cycle.ovulation_days.is_empty());
        assert_eq!(cycle.fertile_days, vec![DateRange::new(107, 109)]);
        assert_eq!(cycle.pregnancy_start_date, Some(110));
        assert_eq!(cycle.delay_the_days, 0);
    }

    #[test]
    fn pregnancy_clears_overdue_state() {
        let input = single_period(100, 104).with_pregnancy(Some(PregnancyInfo::starting(120)));

        let cycles = PeriodCalculator::calculate_cycle_info(&input, 90, 400, 200);

        assert_eq!(cycles[0].delay_the_days, 0);
        assert_eq!(cycles[0].delay_day, None);
    }

    #[test]
    fn user_asserted_ovulation_replaces_formula() {
        let input = single_period(100, 104).with_ovulation_tests(vec![
            OvulationTest::positive(115),
            OvulationTest::positive(116),
        ]);

        let cycles = PeriodCalculator::calculate_cycle_info(&input, 100, 127, 105);

        let cycle = &cycles[0];
        assert_eq!(cycle.ovulation_days, vec![DateRange::new(115, 116)]);
        assert_eq!(cycle.fertile_days, vec![DateRange::new(113, 117)]);
        assert!(cycle.is_ovulation_period_user_input);
        assert_eq!(cycle.ovulation_day_period, Some(30));
        assert!(cycle.ovulation_sources[0].is_user_asserted());
    }

    #[test]
    fn manual_ovulation_day_in_predicted_cycle() {
        let input = single_period(100, 104).with_ovulation_days(vec![OvulationDay::new(140)]);

        let cycles = PeriodCalculator::calculate_cycle_info(&input, 100, 160, 105);

        let cycle = &cycles[0];
        assert_eq!(cycle.ovulation_day_period, None);
        assert!(cycle.is_ovulation_period_user_input);
        assert!(cycle.ovulation_days.contains(&DateRange::single(140)));
        assert!(cycle.ovulation_days.contains(&DateRange::new(112, 114)));
    }

    #[test]
    fn historical_period_is_gap_to_next_record() {
        let input = CycleInput::new(
            vec![
                PeriodRecord::new(100, 104).unwrap(),
                PeriodRecord::new(131, 135).unwrap(),
            ],
            PeriodSettings::manual(28, 5),
        );

        let cycles = PeriodCalculator::calculate_cycle_info(&input, 100, 170, 132);

        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0].period, 31);
        assert!(cycles[0].predict_days.is_empty());
        assert_eq!(cycles[1].period, 28);
        assert_eq!(cycles[1].predict_days, vec![DateRange::new(159, 163)]);
    }

    #[test]
    fn cycles_outside_query_are_omitted() {
        let input = CycleInput::new(
            vec![
                PeriodRecord::new(100, 104).unwrap(),
                PeriodRecord::new(128, 132).unwrap(),
            ],
            PeriodSettings::default(),
        );

        let cycles = PeriodCalculator::calculate_cycle_info(&input, 400, 420, 130);

        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].pk, input.periods[1].pk);
        assert_eq!(cycles[0].predict_days, vec![DateRange::new(408, 412)]);
        assert_eq!(cycles[0].actual_period, Some(DateRange::new(128, 132)));
    }

    #[test]
    fn prediction_starting_before_query_is_clipped() {
        let input = single_period(100, 104);

        let cycles = PeriodCalculator::calculate_cycle_info(&input, 130, 200, 105);

        assert_eq!(cycles[0].predict_days[0], DateRange::new(130, 132));
        assert_eq!(cycles[0].actual_period, Some(DateRange::new(100, 104)));
    }

    #[test]
    fn delay_window_clipped_to_query() {
        let input = single_period(100, 104);

        let cycles = PeriodCalculator::calculate_cycle_info(&input, 130, 131, 140);

        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].delay_the_days, 13);
        assert_eq!(cycles[0].delay_day, Some(DateRange::new(130, 131)));
        assert!(cycles[0].ovulation_sources.is_empty());
    }

    #[test]
    fn user_ovulation_outside_query_does_not_flag_cycle() {
        let input = single_period(100, 104).with_ovulation_days(vec![OvulationDay::new(142)]);

        let cycles = PeriodCalculator::calculate_cycle_info(&input, 100, 130, 105);

        let cycle = &cycles[0];
        assert!(!cycle.is_ovulation_period_user_input);
        assert_eq!(cycle.ovulation_days, vec![DateRange::new(112, 114)]);
        assert_eq!(
            cycle.ovulation_sources,
            vec![OvulationSource::Formula {
                anchor: 100,
                period: 28
            }]
        );
    }

    #[test]
    fn actual_period_clipped_when_overlapping() {
        let input = single_period(100, 104);
        let cycles = PeriodCalculator::calculate_cycle_info(&input, 102, 200, 101);
        assert_eq!(cycles[0].actual_period, Some(DateRange::new(102, 104)));
    }

    #[test]
    fn inverted_range_or_empty_history_is_empty() {
        let input = single_period(100, 104);
        assert!(PeriodCalculator::calculate_cycle_info(&input, 200, 100, 101).is_empty());
        assert!(
            PeriodCalculator::calculate_cycle_info(&CycleInput::default(), 0, 1_000, 10).is_empty()
        );
    }

    #[test]
    fn unsorted_records_are_ordered_first() {
        let input = CycleInput::new(
            vec![
                PeriodRecord::new(130, 134).unwrap(),
                PeriodRecord::new(100, 104).unwrap(),
            ],
            PeriodSettings::default(),
        );

        let cycles = PeriodCalculator::calculate_cycle_info(&input, 100, 140, 131);

        assert_eq!(cycles[0].period, 30);
        assert_eq!(cycles[0].actual_period, Some(DateRange::new(100, 104)));
    }

    proptest! {
        #[test]
        fn every_reported_window_lies_in_query(
            anchor in 0i64..200,
            gap in 15i64..45,
            from in 0i64..400,
            len in 0i64..200,
            today_offset in 0i64..60,
        ) {
            let input = CycleInput::new(
                vec![
                    PeriodRecord::new(anchor, anchor + 4).unwrap(),
                    PeriodRecord::new(anchor + gap, anchor + gap + 4).unwrap(),
                ],
                PeriodSettings::default(),
            );
            let query = DateRange::new(from, from + len);
            let today = anchor + gap + today_offset;

            let cycles = PeriodCalculator::calculate_cycle_info(&input, from, from + len, today);

            for cycle in &cycles {
                for window in cycle
                    .predict_days
                    .iter()
                    .chain(&cycle.ovulation_days)
                    .chain(&cycle.fertile_days)
                {
                    prop_assert!(query.contains_range(window));
                }
            }
        }
    }
}
