//! The entry log: append-only in-memory sequence kept in sync with a
//! persisted snapshot.
//!
//! The log is the single writer of its entries. The snapshot is a dependent
//! copy: fully rewritten after every successful submit and read once by
//! [`EntryLog::restore`].

use crate::domain::{Coordinate, Entry, EntryId, RawForm, ValidatedForm};
use chrono::{DateTime, Duration, Utc};
use crate::error::{PinlogError, Result};
use crate::infrastructure::{Config, Renderer, SnapshotStore};

/// Result of an accepted submission.
///
/// The entry is in the log even when `persist_error` is set.
#[derive(Debug)]
pub struct Submission {
    pub id: EntryId,
    pub persist_error: Option<PinlogError>,
}

pub struct EntryLog<S, R> {
    entries: Vec<Entry>,
    store: S,
    renderer: R,
    storage_key: String,
    zoom: u8,
}

impl<S: SnapshotStore, R: Renderer> EntryLog<S, R> {
    /// Create an empty log; call [`EntryLog::restore`] to adopt a snapshot
    pub fn new(store: S, renderer: R, config: &Config) -> Self {
        EntryLog {
            entries: Vec::new(),
            store,
            renderer,
            storage_key: config.storage_key.clone(),
            zoom: config.default_zoom,
        }
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Validate a form, append the resulting entry, render it and persist.
    ///
    /// Invalid input leaves the log untouched. A failed persist does not undo
    /// the append; it is returned in the [`Submission`].
    pub fn submit(&mut self, form: &RawForm, coordinate: Coordinate) -> Result<Submission> {
        let valid = match form.validate() {
            Ok(valid) => valid,
            Err(e) => {
                tracing::info!(error = %e, kind = %form.kind, "Submission rejected");
                return Err(e);
            }
        };

        let entry = self.fresh_entry(&valid, coordinate, Utc::now());

        let id = entry.id().clone();
        self.entries.push(entry);

        let entry = &self.entries[self.entries.len() - 1];
        self.renderer.render_list_item(entry);
        self.renderer.render_marker(entry);
        self.renderer.hide_and_reset_form();

        tracing::info!(
            id = %id,
            kind = %valid.kind(),
            count = self.entries.len(),
            "Entry logged"
        );

        let persist_error = self.persist().err();
        if let Some(e) = &persist_error {
            tracing::warn!(error = %e, id = %id, "Entry kept in memory but not persisted");
        }

        Ok(Submission { id, persist_error })
    }

    /// Build an entry whose id is not in the log yet.
    ///
    /// Ids come from the creation instant; on a repeat the instant moves one
    /// nanosecond forward, so this takes at most `len() + 1` tries.
    fn fresh_entry(
        &self,
        valid: &ValidatedForm,
        coordinate: Coordinate,
        mut at: DateTime<Utc>,
    ) -> Entry {
        loop {
            let candidate = Entry::new_at(
                coordinate,
                valid.distance_km,
                valid.duration_min,
                valid.input,
                at,
            );
            if self.get(candidate.id()).is_none() {
                return candidate;
            }
            at += Duration::nanoseconds(1);
        }
    }

    /// Adopt the persisted snapshot, if any, and render each restored entry
    /// as a list item in stored order.
    ///
    /// Records are taken verbatim. Unreadable storage or a malformed snapshot
    /// leaves the log empty. Markers are not rendered here; see
    /// [`EntryLog::render_markers`]. Returns the number of restored entries.
    pub fn restore(&mut self) -> usize {
        let snapshot = match self.store.load(&self.storage_key) {
            Ok(Some(snapshot)) if !snapshot.trim().is_empty() => snapshot,
            Ok(_) => return 0,
            Err(e) => {
                tracing::warn!(error = %e, "Cannot read snapshot, starting with an empty log");
                return 0;
            }
        };

        let entries: Vec<Entry> = match serde_json::from_str(&snapshot) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, key = %self.storage_key, "Ignoring malformed snapshot");
                return 0;
            }
        };

        self.entries = entries;
        for entry in &self.entries {
            self.renderer.render_list_item(entry);
        }

        tracing::debug!(count = self.entries.len(), "Snapshot restored");
        self.entries.len()
    }

    /// Overwrite the snapshot slot with the whole sequence
    pub fn persist(&mut self) -> Result<()> {
        let snapshot = serde_json::to_string(&self.entries)?;
        self.store.save(&self.storage_key, &snapshot)
    }

    /// Request a marker for every entry, in order
    pub fn render_markers(&mut self) {
        for entry in &self.entries {
            self.renderer.render_marker(entry);
        }
    }

    /// Recenter the map on an entry at the default zoom
    pub fn center_on(&mut self, id: &EntryId) -> Result<()> {
        let coordinate = self
            .get(id)
            .map(Entry::coordinate)
            .ok_or_else(|| PinlogError::EntryNotFound(id.to_string()))?;

        self.renderer.recenter_map(coordinate, self.zoom);
        Ok(())
    }

    /// Erase the snapshot and give up this log.
    ///
    /// The in-memory entries are dropped with the log; the caller rebuilds a
    /// fresh one from the returned store and renderer.
    pub fn clear(mut self) -> Result<(S, R)> {
        self.store.remove(&self.storage_key)?;
        tracing::info!(key = %self.storage_key, "Snapshot cleared");
        Ok((self.store, self.renderer))
    }
}
