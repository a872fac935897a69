//! Logged activity entries
//!
//! An [`Entry`] is built once from pre-validated input and never mutated.
//! The derived metric and the label are computed at construction and stored,
//! so a restored entry carries exactly what was serialized.

use crate::domain::EntryKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A map point as (latitude, longitude); serialized as `[lat, lng]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Coordinate { lat, lng }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Coordinate { lat, lng }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lat, c.lng]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

impl FromStr for Coordinate {
    type Err = String;

    /// Parse `LAT,LNG` (whitespace around either part is ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid coordinate: '{}'. Expected LAT,LNG", s);

        let (lat, lng) = s.split_once(',').ok_or_else(invalid)?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid coordinate: '{}'. Latitude must be within ±90 and longitude within ±180",
                s
            ));
        }

        Ok(Coordinate { lat, lng })
    }
}

/// Opaque entry identifier, derived from the creation instant
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Encode an instant as a short base-36 string
    pub fn generate(at: DateTime<Utc>) -> Self {
        let ticks = at
            .timestamp_nanos_opt()
            .unwrap_or_else(|| at.timestamp_micros());
        EntryId(to_base36(ticks.unsigned_abs()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        EntryId(s.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if n == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.into_iter().rev().map(char::from).collect()
}

/// Kind-specific input value, as accepted by the constructor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KindInput {
    Cadence(u32),
    ElevationGain(f64),
}

impl KindInput {
    pub fn kind(&self) -> EntryKind {
        match self {
            KindInput::Cadence(_) => EntryKind::DistanceBased,
            KindInput::ElevationGain(_) => EntryKind::ElevationBased,
        }
    }
}

/// Kind-specific stored fields: the extra measurement and the derived metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EntryMetrics {
    #[serde(rename_all = "camelCase")]
    DistanceBased {
        cadence_steps_per_min: u32,
        #[serde(rename = "derivedMetric")]
        pace_min_per_km: f64,
    },
    #[serde(rename_all = "camelCase")]
    ElevationBased {
        elevation_gain_m: f64,
        #[serde(rename = "derivedMetric")]
        speed_km_per_h: f64,
    },
}

impl EntryMetrics {
    pub(crate) fn derive(distance_km: f64, duration_min: f64, input: KindInput) -> Self {
        match input {
            KindInput::Cadence(cadence) => EntryMetrics::DistanceBased {
                cadence_steps_per_min: cadence,
                pace_min_per_km: duration_min / distance_km,
            },
            KindInput::ElevationGain(gain) => EntryMetrics::ElevationBased {
                elevation_gain_m: gain,
                speed_km_per_h: distance_km / (duration_min / 60.0),
            },
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            EntryMetrics::DistanceBased { .. } => EntryKind::DistanceBased,
            EntryMetrics::ElevationBased { .. } => EntryKind::ElevationBased,
        }
    }

    /// Pace for distance-based entries, speed for elevation-based ones
    pub fn derived_metric(&self) -> f64 {
        match *self {
            EntryMetrics::DistanceBased {
                pace_min_per_km, ..
            } => pace_min_per_km,
            EntryMetrics::ElevationBased { speed_km_per_h, .. } => speed_km_per_h,
        }
    }
}

/// One logged activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    id: EntryId,
    created_at: DateTime<Utc>,
    coordinate: Coordinate,
    distance_km: f64,
    duration_min: f64,
    label: String,
    #[serde(flatten)]
    metrics: EntryMetrics,
}

impl Entry {
    /// Build an entry stamped with the current instant.
    ///
    /// `distance_km` and `duration_min` must already be finite and positive.
    pub fn new(
        coordinate: Coordinate,
        distance_km: f64,
        duration_min: f64,
        input: KindInput,
    ) -> Self {
        Self::new_at(coordinate, distance_km, duration_min, input, Utc::now())
    }

    /// Build an entry as if created at `created_at`
    pub fn new_at(
        coordinate: Coordinate,
        distance_km: f64,
        duration_min: f64,
        input: KindInput,
        created_at: DateTime<Utc>,
    ) -> Self {
        let metrics = EntryMetrics::derive(distance_km, duration_min, input);

        Entry {
            id: EntryId::generate(created_at),
            created_at,
            coordinate,
            distance_km,
            duration_min,
            label: label_for(metrics.kind(), created_at),
            metrics,
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn kind(&self) -> EntryKind {
        self.metrics.kind()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn metrics(&self) -> &EntryMetrics {
        &self.metrics
    }

    pub fn derived_metric(&self) -> f64 {
        self.metrics.derived_metric()
    }
}

/// "<Kind> on <Month> <day>", using the UTC calendar date
pub fn label_for(kind: EntryKind, created_at: DateTime<Utc>) -> String {
    format!("{} on {}", kind.title(), created_at.format("%B %-d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 7, 30, 0).unwrap()
    }

    #[test]
    fn test_distance_based_pace() {
        let entry = Entry::new(
            Coordinate::new(40.7, -73.9),
            5.2,
            24.0,
            KindInput::Cadence(178),
        );

        assert_eq!(entry.kind(), EntryKind::DistanceBased);
        assert_eq!(entry.derived_metric(), 24.0 / 5.2);
        assert!((entry.derived_metric() - 4.615).abs() < 0.001);
        match entry.metrics() {
            EntryMetrics::DistanceBased {
                cadence_steps_per_min,
                ..
            } => assert_eq!(*cadence_steps_per_min, 178),
            other => panic!("Expected distance-based metrics, got {:?}", other),
        }
    }

    #[test]
    fn test_elevation_based_speed() {
        let entry = Entry::new(
            Coordinate::new(40.7, -73.9),
            20.0,
            95.0,
            KindInput::ElevationGain(-12.0),
        );

        assert_eq!(entry.kind(), EntryKind::ElevationBased);
        assert_eq!(entry.derived_metric(), 20.0 / (95.0 / 60.0));
        assert!((entry.derived_metric() - 12.63).abs() < 0.01);
    }

    #[test]
    fn test_label_uses_kind_and_date() {
        let entry = Entry::new_at(
            Coordinate::new(0.0, 0.0),
            1.0,
            1.0,
            KindInput::Cadence(150),
            at(2025, 4, 14),
        );
        assert_eq!(entry.label(), "Distance-based on April 14");

        let entry = Entry::new_at(
            Coordinate::new(0.0, 0.0),
            1.0,
            1.0,
            KindInput::ElevationGain(0.0),
            at(2025, 12, 3),
        );
        assert_eq!(entry.label(), "Elevation-based on December 3");
    }

    #[test]
    fn test_id_derived_from_instant() {
        let created = at(2025, 4, 14);
        let a = Entry::new_at(
            Coordinate::new(0.0, 0.0),
            1.0,
            1.0,
            KindInput::Cadence(1),
            created,
        );
        assert_eq!(a.id(), &EntryId::generate(created));
        assert_eq!(a.created_at(), created);

        let later = EntryId::generate(created + chrono::Duration::nanoseconds(1));
        assert_ne!(a.id(), &later);
    }

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(u64::MAX), "3w5e11264sgsf");
    }

    #[test]
    fn test_coordinate_from_str() {
        let c = Coordinate::from_str("40.7, -73.9").unwrap();
        assert_eq!(c, Coordinate::new(40.7, -73.9));

        assert!(Coordinate::from_str("40.7").is_err());
        assert!(Coordinate::from_str("north,east").is_err());
        assert!(Coordinate::from_str("91,0").is_err());
        assert!(Coordinate::from_str("0,181").is_err());
    }

    #[test]
    fn test_record_shape() {
        let entry = Entry::new_at(
            Coordinate::new(40.7, -73.9),
            5.0,
            25.0,
            KindInput::Cadence(170),
            at(2025, 4, 14),
        );
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["id"], entry.id().as_str());
        assert_eq!(value["createdAt"], "2025-04-14T07:30:00Z");
        assert_eq!(value["coordinate"], serde_json::json!([40.7, -73.9]));
        assert_eq!(value["distanceKm"], 5.0);
        assert_eq!(value["durationMin"], 25.0);
        assert_eq!(value["kind"], "distance-based");
        assert_eq!(value["label"], "Distance-based on April 14");
        assert_eq!(value["cadenceStepsPerMin"], 170);
        assert_eq!(value["derivedMetric"], 5.0);
        assert!(value.get("elevationGainM").is_none());
    }

    #[test]
    fn test_deserialize_adopts_stored_metric() {
        // Stored speed is stale on purpose; it must not be recomputed.
        let json = r#"{
            "id": "abc",
            "createdAt": "2025-04-14T07:30:00Z",
            "coordinate": [40.7, -73.9],
            "distanceKm": 20.0,
            "durationMin": 95.0,
            "kind": "elevation-based",
            "label": "Elevation-based on April 14",
            "elevationGainM": 310.0,
            "derivedMetric": 99.0
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.id().as_str(), "abc");
        assert_eq!(entry.kind(), EntryKind::ElevationBased);
        assert_eq!(entry.derived_metric(), 99.0);
        assert_eq!(entry.coordinate(), Coordinate::new(40.7, -73.9));
    }
}
