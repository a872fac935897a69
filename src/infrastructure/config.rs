//! Configuration management

use crate::domain::Coordinate;
use crate::error::{PinlogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_STORAGE_KEY: &str = "entries";
pub const DEFAULT_ZOOM: u8 = 13;

/// Settings stored in .pinlog/config.toml; missing keys take defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the persisted snapshot slot
    pub storage_key: String,
    /// Zoom level used when the map recenters on an entry
    pub default_zoom: u8,
    /// Map center used when no position is available at startup
    pub home: Coordinate,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_zoom: DEFAULT_ZOOM,
            home: Coordinate::new(51.505, -0.09),
        }
    }
}

/// Storage keys name a file in the store directory, so only letters,
/// digits, '-' and '_' are allowed
pub fn validate_storage_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(PinlogError::Config(format!(
            "Invalid storage key: '{}'. Use letters, digits, '-' or '_'",
            key
        )))
    }
}

impl Config {
    /// Load config from .pinlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".pinlog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PinlogError::NotPinlogDirectory(path.to_path_buf())
            } else {
                PinlogError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| PinlogError::Config(format!("Failed to parse config.toml: {}", e)))?;

        validate_storage_key(&config.storage_key)?;
        Ok(config)
    }

    /// Save config to .pinlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let pinlog_dir = path.join(".pinlog");
        let config_path = pinlog_dir.join("config.toml");

        if !pinlog_dir.exists() {
            fs::create_dir(&pinlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| PinlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
