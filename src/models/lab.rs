use serde::Serialize;

use super::enums::MeasurementStatus;

/// Upper bound recorded for `(>X)` notations. Larger than any realistic lab value.
pub const UNBOUNDED_ABOVE: f64 = 999_999.0;

/// Reference bounds read from a report line. `None` means the bound was not given.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReferenceBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ReferenceBounds {
    /// `low - high` range notation.
    pub fn range(low: f64, high: f64) -> Self {
        Self {
            min: Some(low),
            max: Some(high),
        }
    }

    /// `(<X)`: ceiling at X, floor recorded as 0 (no floor).
    pub fn below(ceiling: f64) -> Self {
        Self {
            min: Some(0.0),
            max: Some(ceiling),
        }
    }

    /// `(>X)`: floor at X, no ceiling.
    pub fn above(floor: f64) -> Self {
        Self {
            min: Some(floor),
            max: Some(UNBOUNDED_ABOVE),
        }
    }
}

/// One lab value parsed from a report line.
///
/// Status is derived once at construction; there are no setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    parameter: String,
    value: f64,
    unit: String,
    reference_min: Option<f64>,
    reference_max: Option<f64>,
    status: MeasurementStatus,
}

impl Measurement {
    pub fn new(
        parameter: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        bounds: ReferenceBounds,
    ) -> Self {
        Self {
            parameter: parameter.into().trim().to_string(),
            value,
            unit: unit.into().trim().to_string(),
            reference_min: bounds.min,
            reference_max: bounds.max,
            status: MeasurementStatus::derive(value, bounds.min, bounds.max),
        }
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn reference_min(&self) -> Option<f64> {
        self.reference_min
    }

    pub fn reference_max(&self) -> Option<f64> {
        self.reference_max
    }

    pub fn status(&self) -> MeasurementStatus {
        self.status
    }

    pub fn is_high(&self) -> bool {
        self.status == MeasurementStatus::High
    }

    pub fn is_low(&self) -> bool {
        self.status == MeasurementStatus::Low
    }
}
