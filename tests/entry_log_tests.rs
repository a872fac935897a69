//! Entry log behavior against file-backed storage

use pinlog::application::{EntryLog, Session};
use pinlog::domain::{Coordinate, EntryKind, RawForm};
use pinlog::infrastructure::{
    Config, FileStore, LogDirectory, RecordingRenderer, SnapshotStore,
};
use pinlog::PinlogError;
use std::fs;
use tempfile::TempDir;

fn file_log(temp: &TempDir) -> EntryLog<FileStore, RecordingRenderer> {
    let dir = LogDirectory::new(temp.path().to_path_buf());
    EntryLog::new(dir.store(), RecordingRenderer::new(), &Config::default())
}

fn slot(temp: &TempDir) -> std::path::PathBuf {
    temp.path().join(".pinlog/store/entries.json")
}

#[test]
fn test_example_distance_based_submission() {
    let temp = TempDir::new().unwrap();
    let mut log = file_log(&temp);

    let form = RawForm::new("distance-based", "5.2", "24", "178");
    log.submit(&form, Coordinate::new(40.7, -73.9)).unwrap();

    assert_eq!(log.len(), 1);
    let entry = &log.entries()[0];
    assert!((entry.derived_metric() - 4.615).abs() < 0.001);
    let today = entry.created_at().format("%B %-d").to_string();
    assert!(entry.label().contains(&today));

    let records: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(slot(&temp)).unwrap()).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_derivation_holds_across_inputs() {
    let temp = TempDir::new().unwrap();
    let mut log = file_log(&temp);

    for (distance, duration) in [(0.4, 3.0), (5.2, 24.0), (42.195, 181.5), (100.0, 0.5)] {
        let run = RawForm::new(
            "distance-based",
            &distance.to_string(),
            &duration.to_string(),
            "170",
        );
        let ride = RawForm::new(
            "elevation-based",
            &distance.to_string(),
            &duration.to_string(),
            "0",
        );
        log.submit(&run, Coordinate::new(0.0, 0.0)).unwrap();
        log.submit(&ride, Coordinate::new(0.0, 0.0)).unwrap();
    }

    for entry in log.entries() {
        let expected = match entry.kind() {
            EntryKind::DistanceBased => entry.duration_min() / entry.distance_km(),
            EntryKind::ElevationBased => entry.distance_km() / (entry.duration_min() / 60.0),
        };
        assert_eq!(entry.derived_metric(), expected);
    }
}

#[test]
fn test_round_trip_through_files() {
    let temp = TempDir::new().unwrap();
    let mut log = file_log(&temp);
    log.submit(
        &RawForm::new("distance-based", "5.2", "24", "178"),
        Coordinate::new(40.7, -73.9),
    )
    .unwrap();
    log.submit(
        &RawForm::new("elevation-based", "27.3", "61", "-12.5"),
        Coordinate::new(-33.87, 151.21),
    )
    .unwrap();
    log.persist().unwrap();
    let before = log.entries().to_vec();

    let mut restored = file_log(&temp);
    assert_eq!(restored.restore(), 2);

    assert_eq!(restored.entries(), before.as_slice());
}

#[test]
fn test_persist_twice_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let mut log = file_log(&temp);
    log.submit(
        &RawForm::new("elevation-based", "20", "95", "310"),
        Coordinate::new(40.7, -73.9),
    )
    .unwrap();

    log.persist().unwrap();
    let first = fs::read(slot(&temp)).unwrap();
    log.persist().unwrap();
    let second = fs::read(slot(&temp)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_restore_reads_stored_metric_verbatim() {
    let temp = TempDir::new().unwrap();
    let mut store = LogDirectory::new(temp.path().to_path_buf()).store();
    store
        .save(
            "entries",
            r#"[{"id":"k3x9","createdAt":"2025-06-01T09:00:00Z","coordinate":[40.7,-73.9],
                "distanceKm":20,"durationMin":95,"kind":"elevation-based",
                "label":"Elevation-based on June 1","elevationGainM":310,
                "derivedMetric":12.63}]"#,
        )
        .unwrap();

    let mut log = file_log(&temp);
    assert_eq!(log.restore(), 1);

    let entry = &log.entries()[0];
    assert_eq!(entry.id().as_str(), "k3x9");
    assert_eq!(entry.label(), "Elevation-based on June 1");
    assert_eq!(entry.derived_metric(), 12.63);
    assert_ne!(entry.derived_metric(), 20.0 / (95.0 / 60.0));
}

#[test]
fn test_rejections_leave_log_and_snapshot_alone() {
    let temp = TempDir::new().unwrap();
    let mut log = file_log(&temp);

    for distance in ["-5", "0", "five"] {
        let form = RawForm::new("distance-based", distance, "24", "178");
        assert!(matches!(
            log.submit(&form, Coordinate::new(40.7, -73.9)),
            Err(PinlogError::InvalidInput(_))
        ));
    }

    assert!(log.is_empty());
    assert!(!slot(&temp).exists());
}

#[test]
fn test_session_reload_after_clear() {
    let temp = TempDir::new().unwrap();
    let dir = LogDirectory::new(temp.path().to_path_buf());

    let mut session = Session::boot(dir.store(), RecordingRenderer::new(), Config::default());
    session.on_map_ready(Some(Coordinate::new(40.7, -73.9)));
    session.on_map_click(Coordinate::new(40.71, -73.95));
    session
        .on_submit(&RawForm::new("distance-based", "3", "18", "165"))
        .unwrap();
    assert!(slot(&temp).exists());

    let session = session.clear().unwrap();

    assert!(session.log().is_empty());
    assert!(!slot(&temp).exists());
}

#[test]
fn test_overflowing_metric_rejected_and_log_survives_restore() {
    let temp = TempDir::new().unwrap();
    let mut log = file_log(&temp);
    log.submit(
        &RawForm::new("distance-based", "5.2", "24", "178"),
        Coordinate::new(40.7, -73.9),
    )
    .unwrap();

    let huge_pace = RawForm::new("distance-based", "1e-300", "1e10", "170");
    assert!(matches!(
        log.submit(&huge_pace, Coordinate::new(40.7, -73.9)),
        Err(PinlogError::InvalidInput(_))
    ));
    assert_eq!(log.len(), 1);

    let snapshot = fs::read_to_string(slot(&temp)).unwrap();
    assert!(!snapshot.contains("null"));

    let mut restored = file_log(&temp);
    assert_eq!(restored.restore(), 1);
    assert_eq!(restored.entries(), log.entries());
}
