//! Pill Calculator - Withdrawal-bleed predictions from pill packages.

use crate::domain::cycle::{PillPackage, PillSettings};
use crate::domain::foundation::DayNumber;

/// Minimum days between a package start and the next natural period for the
/// package to shape that period.
pub const MIN_PILL_GAP_DAYS: i64 = 5;

/// Days after the last active pill on which the withdrawal bleed is expected.
pub const WITHDRAWAL_BLEED_OFFSET: i64 = 2;

/// Pill-based override resolved for one cycle boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillOverride {
    pub predict_date: DayNumber,
    /// Full package cycle: active pills plus rest days.
    pub pill_period: i64,
    pub rest_pill: i64,
}

/// Pure functions over pill packages.
pub struct PillCalculator;

impl PillCalculator {
    /// Checks if some package starts in `[start_date, next_date)` at least five
    /// days before `next_date`.
    pub fn check_pill_between_periods(
        start_date: DayNumber,
        next_date: DayNumber,
        pill_packages: &[PillPackage],
    ) -> bool {
        pill_packages.iter().any(|package| {
            package.package_start >= start_date
                && package.package_start < next_date
                && next_date - package.package_start >= MIN_PILL_GAP_DAYS
        })
    }

    /// Predicted date from the latest package, used only when it comes before
    /// the natural prediction `start_date + normal_period`.
    ///
    /// # Edge Cases
    /// - Pill calculation disabled or no packages: `None`
    /// - Pill date on or after the natural date: `None`
    pub fn calculate_pill_based_predict_date(
        start_date: DayNumber,
        pill_packages: &[PillPackage],
        pill_settings: &PillSettings,
        normal_period: i64,
    ) -> Option<DayNumber> {
        if !pill_settings.is_calculating_with_pill {
            return None;
        }
        let latest = Self::latest_package(pill_packages)?;
        let pill_date = Self::withdrawal_date(latest, pill_settings);
        (pill_date < start_date + normal_period).then_some(pill_date)
    }

    /// Checks if `date` falls on an active pill day of any package.
    pub fn is_pill_active_on_date(
        date: DayNumber,
        pill_packages: &[PillPackage],
        pill_settings: &PillSettings,
    ) -> bool {
        if !pill_settings.is_calculating_with_pill {
            return false;
        }
        pill_packages
            .iter()
            .any(|package| package.active_window(pill_settings).contains(date))
    }

    /// Active pills plus rest days of a package.
    pub fn pill_cycle_length(package: &PillPackage, pill_settings: &PillSettings) -> i64 {
        package.effective_pill_count(pill_settings) + package.effective_rest_days(pill_settings)
    }

    /// Resolves the override for the cycle starting on `anchor` whose natural
    /// next period is `anchor + period`.
    ///
    /// A package started inside the cycle overrides unconditionally. Packages
    /// started earlier override only when they predict an earlier date.
    pub fn resolve_override(
        anchor: DayNumber,
        period: i64,
        pill_packages: &[PillPackage],
        pill_settings: &PillSettings,
    ) -> Option<PillOverride> {
        if !pill_settings.is_calculating_with_pill {
            return None;
        }
        let latest = Self::latest_package(pill_packages)?;
        let natural_next = anchor + period;

        let predict_date =
            if Self::check_pill_between_periods(anchor, natural_next, pill_packages) {
                Self::withdrawal_date(latest, pill_settings)
            } else {
                Self::calculate_pill_based_predict_date(anchor, pill_packages, pill_settings, period)?
            };

        // A withdrawal date on or before the anchor cannot start the next cycle.
        if predict_date <= anchor {
            return None;
        }

        Some(PillOverride {
            predict_date,
            pill_period: Self::pill_cycle_length(latest, pill_settings),
            rest_pill: latest.effective_rest_days(pill_settings),
        })
    }

    fn latest_package(pill_packages: &[PillPackage]) -> Option<&PillPackage> {
        pill_packages.iter().max_by_key(|package| package.package_start)
    }

    fn withdrawal_date(package: &PillPackage, pill_settings: &PillSettings) -> DayNumber {
        package.package_start + package.effective_pill_count(pill_settings) + WITHDRAWAL_BLEED_OFFSET
    }
}
