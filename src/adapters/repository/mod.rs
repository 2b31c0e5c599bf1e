//! Cycle repository adapters.
//!
//! - `InMemoryCycleRepository` - Records held in memory (tests, embedding)
//! - `SnapshotFileRepository` - Records loaded from a JSON or YAML snapshot

mod in_memory;
mod snapshot_file;

pub use in_memory::InMemoryCycleRepository;
pub use snapshot_file::{SnapshotDefaults, SnapshotFileRepository, SnapshotFormat};
