//! Prediction module - Pure calculators behind the cycle projection.
//!
//! Nothing here performs I/O or reads the clock; "today" is always passed in.

mod cycle_formula;
mod day_status;
mod delay;
mod ovulation;
mod period_calculator;
mod pill;
mod pregnancy;
mod schedule;

pub use cycle_formula::{
    BucketKind, CycleFormula, CycleOffsets, CycleWindows, STANDARD_MAX_CYCLE, STANDARD_MIN_CYCLE,
};
pub use delay::{DelayState, DELAY_ESCALATION_DAYS};
pub use ovulation::{
    OvulationCalculator, FERTILE_DAYS_AFTER_OVULATION, FERTILE_DAYS_BEFORE_OVULATION,
    LUTEAL_PHASE_DAYS,
};
pub use period_calculator::PeriodCalculator;
pub use pill::{PillCalculator, PillOverride, MIN_PILL_GAP_DAYS, WITHDRAWAL_BLEED_OFFSET};
pub use pregnancy::{PregnancyCalculator, GESTATION_DAYS};
pub use schedule::PredictionSchedule;
