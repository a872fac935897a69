//! Outbound display capability: list, map and form

use crate::domain::{Coordinate, Entry, EntryId};

/// Commands the log and session issue to whatever displays them
pub trait Renderer {
    /// Add an entry to the visible list
    fn render_list_item(&mut self, entry: &Entry);

    /// Place a marker for an entry on the map
    fn render_marker(&mut self, entry: &Entry);

    /// Move the map to a coordinate at the given zoom, with a smooth transition
    fn recenter_map(&mut self, coordinate: Coordinate, zoom: u8);

    /// Show the entry form after a map click
    fn reveal_form(&mut self);

    /// Hide the form and empty its input fields
    fn hide_and_reset_form(&mut self);

    /// Switch between the cadence and elevation gain inputs
    fn toggle_cadence_elevation_fields(&mut self);
}

/// One issued render request, by entry id where an entry is involved
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ListItem(EntryId),
    Marker(EntryId),
    Recenter(Coordinate, u8),
    RevealForm,
    HideAndResetForm,
    ToggleFields,
}

/// Keeps every request in issue order
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids passed to `render_list_item`, in order
    pub fn list_items(&self) -> Vec<EntryId> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::ListItem(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Ids passed to `render_marker`, in order
    pub fn markers(&self) -> Vec<EntryId> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Marker(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn render_list_item(&mut self, entry: &Entry) {
        self.commands.push(RenderCommand::ListItem(entry.id().clone()));
    }

    fn render_marker(&mut self, entry: &Entry) {
        self.commands.push(RenderCommand::Marker(entry.id().clone()));
    }

    fn recenter_map(&mut self, coordinate: Coordinate, zoom: u8) {
        self.commands.push(RenderCommand::Recenter(coordinate, zoom));
    }

    fn reveal_form(&mut self) {
        self.commands.push(RenderCommand::RevealForm);
    }

    fn hide_and_reset_form(&mut self) {
        self.commands.push(RenderCommand::HideAndResetForm);
    }

    fn toggle_cadence_elevation_fields(&mut self) {
        self.commands.push(RenderCommand::ToggleFields);
    }
}
