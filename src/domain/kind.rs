//! Entry kinds and the per-kind field and metric vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activity category; fixes which extra field and derived metric apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    /// Extra field is cadence, derived metric is pace (min/km)
    #[default]
    DistanceBased,
    /// Extra field is elevation gain, derived metric is speed (km/h)
    ElevationBased,
}

impl EntryKind {
    /// Wire and CLI name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::DistanceBased => "distance-based",
            EntryKind::ElevationBased => "elevation-based",
        }
    }

    /// Kind name with a leading capital, used in labels
    pub fn title(&self) -> &'static str {
        match self {
            EntryKind::DistanceBased => "Distance-based",
            EntryKind::ElevationBased => "Elevation-based",
        }
    }

    /// Name of the kind-specific input field
    pub fn extra_field(&self) -> &'static str {
        match self {
            EntryKind::DistanceBased => "cadence",
            EntryKind::ElevationBased => "elevation gain",
        }
    }

    /// Unit of the derived metric
    pub fn metric_unit(&self) -> &'static str {
        match self {
            EntryKind::DistanceBased => "min/km",
            EntryKind::ElevationBased => "km/h",
        }
    }

    /// The other kind; what the form switches to when its selector changes
    pub fn toggled(&self) -> Self {
        match self {
            EntryKind::DistanceBased => EntryKind::ElevationBased,
            EntryKind::ElevationBased => EntryKind::DistanceBased,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "distance-based" | "distance" => Ok(EntryKind::DistanceBased),
            "elevation-based" | "elevation" => Ok(EntryKind::ElevationBased),
            _ => Err(format!(
                "Invalid kind: '{}'. Valid kinds are: distance-based, elevation-based",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid_kinds() {
        assert_eq!(
            EntryKind::from_str("distance-based").unwrap(),
            EntryKind::DistanceBased
        );
        assert_eq!(
            EntryKind::from_str("elevation-based").unwrap(),
            EntryKind::ElevationBased
        );
    }

    #[test]
    fn test_from_str_short_and_case_insensitive() {
        assert_eq!(
            EntryKind::from_str("Distance").unwrap(),
            EntryKind::DistanceBased
        );
        assert_eq!(
            EntryKind::from_str(" ELEVATION ").unwrap(),
            EntryKind::ElevationBased
        );
    }

    #[test]
    fn test_from_str_invalid() {
        let err = EntryKind::from_str("swimming").unwrap_err();
        assert!(err.contains("Invalid kind"));
        assert!(err.contains("distance-based, elevation-based"));
    }

    #[test]
    fn test_titles_and_units() {
        assert_eq!(EntryKind::DistanceBased.title(), "Distance-based");
        assert_eq!(EntryKind::ElevationBased.metric_unit(), "km/h");
        assert_eq!(EntryKind::DistanceBased.extra_field(), "cadence");
    }

    #[test]
    fn test_toggled() {
        assert_eq!(
            EntryKind::DistanceBased.toggled(),
            EntryKind::ElevationBased
        );
        assert_eq!(
            EntryKind::ElevationBased.toggled(),
            EntryKind::DistanceBased
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&EntryKind::ElevationBased).unwrap();
        assert_eq!(json, "\"elevation-based\"");
        let kind: EntryKind = serde_json::from_str("\"distance-based\"").unwrap();
        assert_eq!(kind, EntryKind::DistanceBased);
    }
}
