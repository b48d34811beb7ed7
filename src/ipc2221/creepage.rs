//! Minimum creepage distance per the IPC-2221 electrical spacing table.
//!
//! The table is bucketed by RMS voltage. A query picks the first row whose
//! voltage is at or above the requested voltage. Above the last row the
//! distance grows linearly using a per-volt increment for each classification.
//!
//! All distances are in metres, all voltages in volts RMS.

use serde::Serialize;
use tracing::trace;

use crate::error::{CreepageError, CreepageResult};
use crate::ipc2221::classification::{Classification, IntoClassification};

/// One voltage bucket of the spacing table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreepageRow {
    /// Upper bound of the bucket in volts RMS (inclusive).
    pub voltage: f64,

    /// Distances in metres, indexed by [`Classification::column`].
    pub distances: [f64; 7],
}

impl CreepageRow {
    const fn new(voltage: f64, distances: [f64; 7]) -> Self {
        Self { voltage, distances }
    }

    /// Returns the distance in metres for `classification`.
    #[must_use]
    pub const fn distance(&self, classification: Classification) -> f64 {
        self.distances[classification.column()]
    }
}

/// Spacing table rows, sorted by ascending voltage.
pub const CREEPAGE_TABLE: [CreepageRow; 9] = [
    CreepageRow::new(15.0, [0.05e-3, 0.1e-3, 0.1e-3, 0.05e-3, 0.13e-3, 0.13e-3, 0.13e-3]),
    CreepageRow::new(30.0, [0.05e-3, 0.1e-3, 0.1e-3, 0.05e-3, 0.13e-3, 0.25e-3, 0.13e-3]),
    CreepageRow::new(50.0, [0.1e-3, 0.6e-3, 0.6e-3, 0.13e-3, 0.13e-3, 0.4e-3, 0.13e-3]),
    CreepageRow::new(100.0, [0.1e-3, 0.6e-3, 1.5e-3, 0.13e-3, 0.13e-3, 0.5e-3, 0.13e-3]),
    CreepageRow::new(150.0, [0.2e-3, 0.6e-3, 3.2e-3, 0.4e-3, 0.4e-3, 0.8e-3, 0.4e-3]),
    CreepageRow::new(170.0, [0.2e-3, 1.25e-3, 3.2e-3, 0.4e-3, 0.4e-3, 0.8e-3, 0.4e-3]),
    CreepageRow::new(250.0, [0.2e-3, 1.25e-3, 6.4e-3, 0.4e-3, 0.4e-3, 0.8e-3, 0.4e-3]),
    CreepageRow::new(300.0, [0.2e-3, 1.25e-3, 12.5e-3, 0.4e-3, 0.4e-3, 0.8e-3, 0.4e-3]),
    CreepageRow::new(500.0, [0.25e-3, 2.5e-3, 12.5e-3, 0.8e-3, 0.8e-3, 1.5e-3, 0.8e-3]),
];

/// Additional distance per volt above [`MAX_TABULATED_VOLTAGE`], in metres/volt.
pub const PER_VOLT_TABLE: [f64; 7] = [
    0.0025e-3, 0.005e-3, 0.025e-3, 0.00305e-3, 0.00305e-3, 0.00305e-3, 0.00305e-3,
];

/// Highest voltage covered directly by [`CREEPAGE_TABLE`].
pub const MAX_TABULATED_VOLTAGE: f64 = CREEPAGE_TABLE[CREEPAGE_TABLE.len() - 1].voltage;

/// Outcome of a creepage lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CreepageLookup {
    /// Requested voltage in volts RMS.
    pub voltage: f64,

    /// Classification the distance applies to.
    pub classification: Classification,

    /// Minimum creepage distance in metres.
    pub distance: f64,

    /// Whether the distance was extrapolated beyond the last table row.
    pub extrapolated: bool,
}

/// Looks up the minimum creepage distance and reports how it was obtained.
///
/// # Errors
///
/// Returns [`CreepageError::InvalidClassification`] if `classification` does
/// not name one of the seven classifications, or
/// [`CreepageError::InvalidVoltage`] if `voltage` is negative or not finite.
pub fn creepage_lookup(
    voltage: f64,
    classification: impl IntoClassification,
) -> CreepageResult<CreepageLookup> {
    let classification = classification.into_classification()?;

    if !voltage.is_finite() || voltage < 0.0 {
        return Err(CreepageError::InvalidVoltage { voltage });
    }

    if let Some(row) = CREEPAGE_TABLE.iter().find(|row| row.voltage >= voltage) {
        trace!(voltage, bucket = row.voltage, %classification, "creepage table hit");
        return Ok(CreepageLookup {
            voltage,
            classification,
            distance: row.distance(classification),
            extrapolated: false,
        });
    }

    let last = &CREEPAGE_TABLE[CREEPAGE_TABLE.len() - 1];
    let per_volt = PER_VOLT_TABLE[classification.column()];
    let distance = (voltage - last.voltage).mul_add(per_volt, last.distance(classification));

    trace!(voltage, per_volt, %classification, "creepage extrapolated");

    Ok(CreepageLookup {
        voltage,
        classification,
        distance,
        extrapolated: true,
    })
}

/// Calculates the minimum creepage distance in metres.
///
/// `classification` may be a [`Classification`], its ordinal (1-7), or its
/// text form (`"3"`, `"B3"`).
///
/// # Errors
///
/// See [`creepage_lookup`].
///
/// # Examples
///
/// ```
/// use planar_creepage::ipc2221::{calculate_creepage, Classification};
///
/// let distance = calculate_creepage(1000.0, Classification::A7).unwrap();
/// assert!((distance - 2.325e-3).abs() < 1e-9);
///
/// assert_eq!(
///     calculate_creepage(120.0, 3).unwrap(),
///     calculate_creepage(120.0, Classification::B3).unwrap(),
/// );
/// ```
pub fn calculate_creepage(
    voltage: f64,
    classification: impl IntoClassification,
) -> CreepageResult<f64> {
    creepage_lookup(voltage, classification).map(|lookup| lookup.distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn table_is_ascending() {
        assert!(CREEPAGE_TABLE
            .windows(2)
            .all(|pair| pair[0].voltage < pair[1].voltage));
        assert!((MAX_TABULATED_VOLTAGE - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn exact_keys_return_table_entries() {
        for row in &CREEPAGE_TABLE {
            for classification in Classification::ALL {
                let distance = calculate_creepage(row.voltage, classification).unwrap();
                assert!((distance - row.distance(classification)).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn boundary_is_inclusive() {
        let at = calculate_creepage(150.0, Classification::B2).unwrap();
        let above = calculate_creepage(150.1, Classification::B2).unwrap();
        assert!((at - 0.6e-3).abs() < TOLERANCE);
        assert!((above - 1.25e-3).abs() < TOLERANCE);
    }

    #[test]
    fn between_keys_rounds_up() {
        let distance = calculate_creepage(120.0, Classification::B3).unwrap();
        assert!((distance - 3.2e-3).abs() < TOLERANCE);
    }

    #[test]
    fn zero_volts_uses_first_row() {
        let lookup = creepage_lookup(0.0, Classification::A6).unwrap();
        assert!((lookup.distance - 0.13e-3).abs() < TOLERANCE);
        assert!(!lookup.extrapolated);
    }

    #[test]
    fn extrapolates_above_500v() {
        let lookup = creepage_lookup(1000.0, Classification::A7).unwrap();
        assert!(lookup.extrapolated);
        assert!((lookup.distance - 2.325e-3).abs() < TOLERANCE);

        let b3 = calculate_creepage(600.0, Classification::B3).unwrap();
        assert!((b3 - (12.5e-3 + 100.0 * 0.025e-3)).abs() < TOLERANCE);
    }

    #[test]
    fn just_above_500v_is_continuous() {
        let at = calculate_creepage(500.0, Classification::B1).unwrap();
        let above = calculate_creepage(500.001, Classification::B1).unwrap();
        assert!(above > at);
        assert!((above - at).abs() < 1e-8);
    }

    #[test]
    fn reject_invalid_voltage() {
        for voltage in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                calculate_creepage(voltage, Classification::B1),
                Err(CreepageError::InvalidVoltage { .. })
            ));
        }
    }

    #[test]
    fn classification_checked_before_voltage() {
        assert!(matches!(
            calculate_creepage(-1.0, 0),
            Err(CreepageError::InvalidClassification { .. })
        ));
    }

    #[test]
    fn accepts_integer_and_text() {
        assert_eq!(
            calculate_creepage(250.0, 3),
            calculate_creepage(250.0, Classification::B3)
        );
        assert_eq!(
            calculate_creepage(250.0, "b3"),
            calculate_creepage(250.0, Classification::B3)
        );
        assert!(calculate_creepage(250.0, 8).is_err());
        assert!(calculate_creepage(250.0, "internal").is_err());
    }

    #[test]
    fn lookup_serialises() {
        let lookup = creepage_lookup(30.0, Classification::A6).unwrap();
        let json = serde_json::to_value(lookup).unwrap();
        assert_eq!(json["classification"], "A6");
        assert_eq!(json["extrapolated"], false);
        assert!((json["distance"].as_f64().unwrap() - 0.25e-3).abs() < TOLERANCE);
    }
}
