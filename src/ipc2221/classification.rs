//! IPC-2221 conductor classifications.
//!
//! The electrical spacing table groups conductors into seven categories by
//! where they sit on the board and how they are protected:
//!
//! | Code | Ordinal | Conductors |
//! |------|---------|------------|
//! | B1   | 1       | Internal conductors |
//! | B2   | 2       | External, uncoated, sea level to 3050 m |
//! | B3   | 3       | External, uncoated, over 3050 m |
//! | B4   | 4       | External, permanent polymer coating |
//! | A5   | 5       | External, conformal coating over assembly |
//! | A6   | 6       | External component lead/termination, uncoated |
//! | A7   | 7       | External component lead/termination, conformal coating |
//!
//! The ordinal doubles as the 1-based column of the spacing table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CreepageError, CreepageResult};

/// Conductor classification per IPC-2221.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Classification {
    /// Internal conductors.
    B1 = 1,
    /// External conductors, uncoated, sea level to 3050 m.
    B2 = 2,
    /// External conductors, uncoated, over 3050 m.
    B3 = 3,
    /// External conductors with permanent polymer coating.
    B4 = 4,
    /// External conductors with conformal coating over the assembly.
    A5 = 5,
    /// External component lead/termination, uncoated.
    A6 = 6,
    /// External component lead/termination with conformal coating.
    A7 = 7,
}

impl Classification {
    /// All classifications in ordinal order.
    pub const ALL: [Self; 7] = [
        Self::B1,
        Self::B2,
        Self::B3,
        Self::B4,
        Self::A5,
        Self::A6,
        Self::A7,
    ];

    /// Looks up a classification by its ordinal (1-7).
    ///
    /// # Errors
    ///
    /// Returns [`CreepageError::InvalidClassification`] if `ordinal` is outside 1-7.
    pub fn from_ordinal(ordinal: u8) -> CreepageResult<Self> {
        match ordinal {
            1 => Ok(Self::B1),
            2 => Ok(Self::B2),
            3 => Ok(Self::B3),
            4 => Ok(Self::B4),
            5 => Ok(Self::A5),
            6 => Ok(Self::A6),
            7 => Ok(Self::A7),
            _ => Err(CreepageError::invalid_classification(ordinal)),
        }
    }

    /// Returns the ordinal (1-7).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based table column for this classification.
    #[must_use]
    pub const fn column(self) -> usize {
        self as usize - 1
    }

    /// Returns the short code, e.g. `"B3"`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::B3 => "B3",
            Self::B4 => "B4",
            Self::A5 => "A5",
            Self::A6 => "A6",
            Self::A7 => "A7",
        }
    }

    /// Returns the descriptive label.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::B1 => "Internal Conductors",
            Self::B2 => "External Conductors, uncoated, sea level to 3050 m",
            Self::B3 => "External Conductors, uncoated, over 3050 m",
            Self::B4 => "External Conductors, with permanent polymer coating (any elevation)",
            Self::A5 => {
                "External Conductors, with conformal coating over assembly (any elevation)"
            }
            Self::A6 => "External Component lead/termination, uncoated",
            Self::A7 => {
                "External Component lead termination, with conformal coating (any elevation)"
            }
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl TryFrom<u8> for Classification {
    type Error = CreepageError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal)
    }
}

impl From<Classification> for u8 {
    fn from(classification: Classification) -> Self {
        classification.ordinal()
    }
}

impl FromStr for Classification {
    type Err = CreepageError;

    /// Parses an ordinal (`"3"`) or a code (`"B3"`, case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(ordinal) = trimmed.parse::<u8>() {
            return Self::from_ordinal(ordinal).map_err(|_| CreepageError::invalid_classification(s));
        }

        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CreepageError::invalid_classification(s))
    }
}

/// Conversion into a [`Classification`], validating as needed.
///
/// Lets the calculator accept either a classification or anything that
/// names one: an ordinal of any common integer width, or its text form.
pub trait IntoClassification {
    /// Converts `self` into a classification.
    ///
    /// # Errors
    ///
    /// Returns [`CreepageError::InvalidClassification`] if `self` does not
    /// name one of the seven classifications.
    fn into_classification(self) -> CreepageResult<Classification>;
}

impl IntoClassification for Classification {
    fn into_classification(self) -> CreepageResult<Classification> {
        Ok(self)
    }
}

impl IntoClassification for &Classification {
    fn into_classification(self) -> CreepageResult<Classification> {
        Ok(*self)
    }
}

impl IntoClassification for u8 {
    fn into_classification(self) -> CreepageResult<Classification> {
        Classification::from_ordinal(self)
    }
}

macro_rules! impl_into_classification_for_int {
    ($($ty:ty),*) => {
        $(
            impl IntoClassification for $ty {
                fn into_classification(self) -> CreepageResult<Classification> {
                    u8::try_from(self)
                        .map_err(|_| CreepageError::invalid_classification(self))
                        .and_then(Classification::from_ordinal)
                }
            }
        )*
    };
}

impl_into_classification_for_int!(u16, u32, u64, usize, i8, i16, i32, i64);

impl IntoClassification for &str {
    fn into_classification(self) -> CreepageResult<Classification> {
        self.parse()
    }
}

impl IntoClassification for String {
    fn into_classification(self) -> CreepageResult<Classification> {
        self.parse()
    }
}

impl IntoClassification for &String {
    fn into_classification(self) -> CreepageResult<Classification> {
        self.parse()
    }
}
