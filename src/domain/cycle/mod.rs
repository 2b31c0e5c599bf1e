//! Cycle module - Records the engine reads and the projections it returns.

mod cycle_info;
mod input;
mod ovulation;
mod period;
mod pill;
mod pregnancy;

pub use cycle_info::{CycleInfo, DayStatus, DayType, OvulationSource};
pub use input::CycleInput;
pub use ovulation::{OvulationDay, OvulationTest, OvulationTestResult};
pub use period::{PeriodRecord, PeriodSettings, DEFAULT_AVERAGE_CYCLE, DEFAULT_AVERAGE_DAY};
pub use pill::{PillPackage, PillSettings, DEFAULT_PILL_COUNT, DEFAULT_REST_PILL};
pub use pregnancy::PregnancyInfo;
