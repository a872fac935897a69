//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod terminal;

pub use commands::{Cli, Commands};
pub use output::{format_entry, format_marker};
pub use terminal::TerminalRenderer;
