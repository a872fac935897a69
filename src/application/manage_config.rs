//! Config management use case

use crate::domain::Coordinate;
use crate::error::{PinlogError, Result};
use crate::infrastructure::config::validate_storage_key;
use crate::infrastructure::{Config, LogDirectory};
use std::str::FromStr;

const VALID_KEYS: &str = "storage_key, default_zoom, home";

/// Service for managing log configuration
pub struct ConfigService {
    dir: LogDirectory,
}

impl ConfigService {
    pub fn new(dir: LogDirectory) -> Self {
        ConfigService { dir }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.dir.load_config()?;

        match key {
            "storage_key" => Ok(config.storage_key),
            "default_zoom" => Ok(config.default_zoom.to_string()),
            "home" => Ok(format!("{},{}", config.home.lat, config.home.lng)),
            _ => Err(PinlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.dir.load_config()?;

        match key {
            "storage_key" => {
                let value = value.trim();
                validate_storage_key(value)?;
                config.storage_key = value.to_string();
            }
            "default_zoom" => {
                config.default_zoom = value
                    .trim()
                    .parse::<u8>()
                    .ok()
                    .filter(|z| *z <= 20)
                    .ok_or_else(|| {
                        PinlogError::Config(format!(
                            "Invalid zoom: '{}'. Expected a whole number from 0 to 20",
                            value
                        ))
                    })?;
            }
            "home" => {
                config.home = Coordinate::from_str(value).map_err(PinlogError::Config)?;
            }
            _ => {
                return Err(PinlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        self.dir.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.dir.load_config()
    }
}
