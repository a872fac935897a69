//! Renderer that prints to a terminal stream

use crate::cli::output::{format_entry, format_marker};
use crate::domain::{Coordinate, Entry};
use crate::infrastructure::Renderer;
use std::io::{self, Write};

/// Prints list items, markers and map moves as lines; form commands have no
/// terminal counterpart and are dropped.
pub struct TerminalRenderer<W: Write> {
    out: W,
    muted: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        TerminalRenderer::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        TerminalRenderer { out, muted: false }
    }

    /// While muted nothing is printed
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if self.muted {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", line) {
            tracing::warn!(error = %e, "Cannot write to terminal");
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_list_item(&mut self, entry: &Entry) {
        self.emit(&format_entry(entry));
    }

    fn render_marker(&mut self, entry: &Entry) {
        self.emit(&format_marker(entry));
    }

    fn recenter_map(&mut self, coordinate: Coordinate, zoom: u8) {
        self.emit(&format!("Map centered on {} (zoom {})", coordinate, zoom));
    }

    fn reveal_form(&mut self) {}

    fn hide_and_reset_form(&mut self) {}

    fn toggle_cadence_elevation_fields(&mut self) {}
}
