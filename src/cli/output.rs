//! Output formatting utilities

use crate::domain::{Entry, EntryMetrics};

/// Format one entry as a list line
pub fn format_entry(entry: &Entry) -> String {
    let extra = match entry.metrics() {
        EntryMetrics::DistanceBased {
            cadence_steps_per_min,
            ..
        } => format!("{} spm", cadence_steps_per_min),
        EntryMetrics::ElevationBased {
            elevation_gain_m, ..
        } => format!("{} m", elevation_gain_m),
    };

    format!(
        "{}  {}  {} km  {} min  {:.1} {}  {}",
        entry.id(),
        entry.label(),
        entry.distance_km(),
        entry.duration_min(),
        entry.derived_metric(),
        entry.kind().metric_unit(),
        extra
    )
}

/// Format a map marker popup line
pub fn format_marker(entry: &Entry) -> String {
    format!("Marker  {}  at {}", entry.label(), entry.coordinate())
}
