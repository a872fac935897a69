//! Application context: one per session, owning the entry log and routing
//! the host's events into it.

use crate::application::entry_log::{EntryLog, Submission};
use crate::domain::{Coordinate, EntryId, EntryKind, RawForm};
use crate::error::{PinlogError, Result};
use crate::infrastructure::{Config, Renderer, SnapshotStore};

pub struct Session<S, R> {
    log: EntryLog<S, R>,
    config: Config,
    pending_point: Option<Coordinate>,
    form_kind: EntryKind,
    map_ready: bool,
}

impl<S: SnapshotStore, R: Renderer> Session<S, R> {
    /// Build the log and restore the persisted snapshot into it
    pub fn boot(store: S, renderer: R, config: Config) -> Self {
        let mut log = EntryLog::new(store, renderer, &config);
        let restored = log.restore();
        tracing::debug!(restored, "Session started");

        Session {
            log,
            config,
            pending_point: None,
            form_kind: EntryKind::default(),
            map_ready: false,
        }
    }

    pub fn log(&self) -> &EntryLog<S, R> {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut EntryLog<S, R> {
        &mut self.log
    }

    pub fn is_map_ready(&self) -> bool {
        self.map_ready
    }

    /// The point the next submission will be logged at
    pub fn pending_point(&self) -> Option<Coordinate> {
        self.pending_point
    }

    /// The map surface exists. Center it on `position`, or on the configured
    /// home when no position could be acquired, then place markers for the
    /// entries already in the log.
    pub fn on_map_ready(&mut self, position: Option<Coordinate>) {
        let center = position.unwrap_or_else(|| {
            tracing::debug!(home = %self.config.home, "No position available, using home");
            self.config.home
        });
        let zoom = self.config.default_zoom;

        self.log.renderer_mut().recenter_map(center, zoom);
        self.map_ready = true;
        self.log.render_markers();
    }

    /// Remember the clicked point and reveal the form.
    ///
    /// Clicks before the map is ready are ignored; returns whether the click
    /// was taken.
    pub fn on_map_click(&mut self, coordinate: Coordinate) -> bool {
        if !self.map_ready {
            tracing::debug!(%coordinate, "Map click before map initialization ignored");
            return false;
        }

        self.pending_point = Some(coordinate);
        self.log.renderer_mut().reveal_form();
        true
    }

    /// Kind currently selected in the form; decides which extra field shows
    pub fn form_kind(&self) -> EntryKind {
        self.form_kind
    }

    /// The form's kind selector flipped to the other kind
    pub fn on_kind_change(&mut self) {
        self.form_kind = self.form_kind.toggled();
        self.log.renderer_mut().toggle_cadence_elevation_fields();
    }

    /// Submit the form at the pending point.
    ///
    /// The point is consumed whether or not the form validates, so a rejected
    /// submission needs a fresh map click before the next attempt.
    pub fn on_submit(&mut self, form: &RawForm) -> Result<Submission> {
        let point = self
            .pending_point
            .take()
            .ok_or(PinlogError::NoPointSelected)?;

        self.log.submit(form, point)
    }

    /// Recenter on a clicked list item. Stale ids are logged and ignored;
    /// returns whether the entry was found.
    pub fn on_list_click(&mut self, id: &str) -> bool {
        match self.log.center_on(&EntryId::from(id)) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring click on unknown entry");
                false
            }
        }
    }

    /// Erase the snapshot and reload: the old session is consumed and a new
    /// one is booted from the same store and renderer.
    pub fn clear(self) -> Result<Self> {
        let config = self.config;
        let (store, renderer) = self.log.clear()?;
        Ok(Self::boot(store, renderer, config))
    }
}
