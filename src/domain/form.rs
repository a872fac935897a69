//! Raw form input and the validation policy that turns it into typed input

use crate::domain::{EntryKind, EntryMetrics, KindInput};
use crate::error::{PinlogError, Result};
use std::str::FromStr;

/// Field values exactly as the input layer supplies them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawForm {
    pub kind: String,
    pub distance: String,
    pub duration: String,
    /// Cadence for distance-based entries, elevation gain for elevation-based
    pub cadence_or_elevation: String,
}

impl RawForm {
    pub fn new(kind: &str, distance: &str, duration: &str, cadence_or_elevation: &str) -> Self {
        RawForm {
            kind: kind.to_string(),
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence_or_elevation: cadence_or_elevation.to_string(),
        }
    }

    /// Apply the validation policy.
    ///
    /// Every numeric field must parse to a finite number. Distance, duration
    /// and cadence must be strictly positive; elevation gain may be zero or
    /// negative. The derived pace or speed must come out finite too.
    pub fn validate(&self) -> Result<ValidatedForm> {
        let kind = EntryKind::from_str(&self.kind).map_err(PinlogError::InvalidInput)?;

        let distance_km = positive("distance", &self.distance)?;
        let duration_min = positive("duration", &self.duration)?;

        let input = match kind {
            EntryKind::DistanceBased => {
                let field = kind.extra_field();
                let cadence = positive(field, &self.cadence_or_elevation)?;
                if cadence.fract() != 0.0 || cadence > f64::from(u32::MAX) {
                    return Err(PinlogError::InvalidInput(format!(
                        "{} must be a whole number of steps per minute, got '{}'",
                        field,
                        self.cadence_or_elevation.trim()
                    )));
                }
                KindInput::Cadence(cadence as u32)
            }
            EntryKind::ElevationBased => KindInput::ElevationGain(finite(
                kind.extra_field(),
                &self.cadence_or_elevation,
            )?),
        };

        let derived = EntryMetrics::derive(distance_km, duration_min, input).derived_metric();
        if !derived.is_finite() {
            return Err(PinlogError::InvalidInput(format!(
                "distance {} km over {} min gives no finite {}",
                self.distance.trim(),
                self.duration.trim(),
                kind.metric_unit()
            )));
        }

        Ok(ValidatedForm {
            distance_km,
            duration_min,
            input,
        })
    }
}

/// Input that satisfies every entry invariant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedForm {
    pub distance_km: f64,
    pub duration_min: f64,
    pub input: KindInput,
}

impl ValidatedForm {
    pub fn kind(&self) -> EntryKind {
        self.input.kind()
    }
}

fn finite(field: &str, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            PinlogError::InvalidInput(format!("{} must be a number, got '{}'", field, text.trim()))
        })
}

fn positive(field: &str, text: &str) -> Result<f64> {
    let value = finite(field, text)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(PinlogError::InvalidInput(format!(
            "{} must be a positive number, got '{}'",
            field,
            text.trim()
        )))
    }
}
