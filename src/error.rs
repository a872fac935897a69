//! Error types for pinlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pinlog
#[derive(Debug, Error)]
pub enum PinlogError {
    #[error("Not a pinlog directory: {0}")]
    NotPinlogDirectory(PathBuf),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("No map point selected")]
    NoPointSelected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Snapshot format error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PinlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PinlogError::NotPinlogDirectory(_) => 2,
            PinlogError::InvalidInput(_) | PinlogError::NoPointSelected => 3,
            PinlogError::EntryNotFound(_) => 4,
            PinlogError::StorageUnavailable(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PinlogError::NotPinlogDirectory(path) => {
                format!(
                    "Not a pinlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'pinlog init' in this directory to start a log\n\
                    • Navigate to an existing pinlog directory\n\
                    • Set PINLOG_ROOT environment variable to your log path",
                    path.display()
                )
            }
            PinlogError::InvalidInput(msg) => {
                format!(
                    "{}\n\n\
                    Distance, duration and cadence have to be positive numbers.\n\
                    Elevation gain may be zero or negative.\n\n\
                    Examples:\n\
                    pinlog add --kind distance-based --distance 5.2 --duration 24 --metric 178 --at 40.7,-73.9\n\
                    pinlog add --kind elevation-based --distance 20 --duration 95 --metric 310 --at 40.7,-73.9",
                    msg
                )
            }
            PinlogError::NoPointSelected => "No map point selected\n\n\
                Suggestions:\n\
                • Pick a point with --at LAT,LNG (e.g., --at 40.7,-73.9)"
                .to_string(),
            PinlogError::EntryNotFound(id) => {
                format!(
                    "No entry with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'pinlog list' to see logged entries and their ids",
                    id
                )
            }
            PinlogError::StorageUnavailable(msg) => {
                format!(
                    "Storage unavailable: {}\n\n\
                    Suggestions:\n\
                    • Check that the .pinlog directory is writable\n\
                    • Use --ephemeral to keep entries for this session only",
                    msg
                )
            }
            PinlogError::Config(msg) => {
                if msg.contains("coordinate") {
                    format!(
                        "{}\n\n\
                        Expected format: LAT,LNG\n\
                        Example: pinlog config home 40.7,-73.9",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PinlogError
pub type Result<T> = std::result::Result<T, PinlogError>;
