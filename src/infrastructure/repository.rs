//! Log directory discovery and layout

use crate::error::{PinlogError, Result};
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::{Path, PathBuf};

/// A directory holding a `.pinlog` folder with config and snapshot slots
#[derive(Debug, Clone)]
pub struct LogDirectory {
    pub root: PathBuf,
}

impl LogDirectory {
    pub fn new(root: PathBuf) -> Self {
        LogDirectory { root }
    }

    /// Find the log root.
    /// First checks PINLOG_ROOT, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("PINLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_pinlog_dir(&path) {
                return Ok(LogDirectory::new(path));
            } else {
                return Err(PinlogError::Config(format!(
                    "PINLOG_ROOT is set to '{}' but no .pinlog directory found. \
                    Run 'pinlog init' in that directory or unset PINLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing `.pinlog` is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_pinlog_dir(&current) {
                return Ok(LogDirectory::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(PinlogError::NotPinlogDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_pinlog_dir(path: &Path) -> bool {
        path.join(".pinlog").is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_pinlog_dir(&self.root)
    }

    /// Create the `.pinlog` directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let pinlog_dir = self.root.join(".pinlog");

        if pinlog_dir.exists() {
            return Err(PinlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&pinlog_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Snapshot storage rooted at `.pinlog/store`
    pub fn store(&self) -> FileStore {
        FileStore::new(self.root.join(".pinlog").join("store"))
    }
}
