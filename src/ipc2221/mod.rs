//! IPC-2221 electrical conductor spacing.
//!
//! This module provides the minimum creepage distance between two conductors
//! on a printed board, given the RMS voltage between them and the
//! [`Classification`] describing how the conductors are exposed or coated.
//!
//! # Classifications
//!
//! - **B1**: Internal conductors
//! - **B2/B3**: External, uncoated (below/above 3050 m)
//! - **B4**: External, permanent polymer coating
//! - **A5**: External, conformal coating over assembly
//! - **A6/A7**: Component leads and terminations, uncoated/conformal coated
//!
//! # Example
//!
//! ```
//! use planar_creepage::ipc2221::{calculate_creepage, Classification};
//!
//! let class = Classification::from_ordinal(3).unwrap();
//! println!("{class}");
//!
//! let distance = calculate_creepage(1000.0, class).unwrap();
//! println!("{distance} m");
//! ```

pub mod classification;
pub mod creepage;

pub use classification::{Classification, IntoClassification};
pub use creepage::{
    calculate_creepage, creepage_lookup, CreepageLookup, CreepageRow, CREEPAGE_TABLE,
    MAX_TABULATED_VOLTAGE, PER_VOLT_TABLE,
};
