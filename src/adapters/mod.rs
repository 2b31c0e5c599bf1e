//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `repository` - Cycle record stores (in-memory, snapshot files)
//! - `clock` - Sources of "today"

pub mod clock;
pub mod repository;

pub use clock::{FixedClock, SystemClock};
pub use repository::{
    InMemoryCycleRepository, SnapshotDefaults, SnapshotFileRepository, SnapshotFormat,
};
