//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CycleRepository` - Loads period history, ovulation, pill and pregnancy records
//! - `Clock` - Provides "today" to handlers

mod clock;
mod cycle_repository;

pub use clock::Clock;
pub use cycle_repository::CycleRepository;
