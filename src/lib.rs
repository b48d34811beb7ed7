//! planar-creepage: IPC-2221 creepage distance calculator
//!
//! This library computes the minimum creepage distance required between two
//! conductive paths on a printed board, for use when laying out planar
//! magnetics and other high-voltage PCB structures.
//!
//! The calculation is pure and stateless. The spacing tables are constants,
//! so every function here can be called from any thread without coordination.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading and validation
//! - [`error`] — Error types
//! - [`ipc2221`] — Conductor classifications and creepage lookup

pub mod config;
pub mod error;
pub mod ipc2221;

pub use error::{CreepageError, CreepageResult};
pub use ipc2221::{calculate_creepage, creepage_lookup, Classification, CreepageLookup};
