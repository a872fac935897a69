//! Initialize log directory use case

use crate::domain::Coordinate;
use crate::error::Result;
use crate::infrastructure::{Config, LogDirectory};
use std::fs;
use std::path::Path;

/// Initialize a new log at the specified path.
pub fn init(path: &Path, home: Option<Coordinate>) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let dir = LogDirectory::new(path.to_path_buf());
    dir.initialize()?;

    let mut config = Config::default();
    if let Some(home) = home {
        config.home = home;
    }
    dir.save_config(&config)?;

    tracing::info!(path = %path.display(), "Log initialized");
    println!("Initialized pinlog at {}", path.display());

    Ok(())
}
