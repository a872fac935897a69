//! Durable key-value slots for persisted snapshots

use crate::error::{PinlogError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Abstract durable storage holding named string slots
pub trait SnapshotStore {
    /// Read a slot; `Ok(None)` when it was never written or has been removed
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot wholesale
    fn save(&mut self, key: &str, value: &str) -> Result<()>;

    /// Erase a slot; removing a missing slot is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// One JSON file per slot under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        FileStore { dir }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

fn unavailable(action: &str, path: &std::path::Path, e: std::io::Error) -> PinlogError {
    PinlogError::StorageUnavailable(format!("cannot {} {}: {}", action, path.display(), e))
}

impl SnapshotStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable("read", &path, e)),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);

        fs::create_dir_all(&self.dir).map_err(|e| unavailable("create", &self.dir, e))?;

        let tmp_path = self
            .dir
            .join(format!("{}.json.pinlog-tmp-{}", key, std::process::id()));

        fs::write(&tmp_path, value).map_err(|e| unavailable("write", &tmp_path, e))?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(&path).map_err(|e| unavailable("replace", &path, e))?;
        }

        fs::rename(&tmp_path, &path).map_err(|e| unavailable("replace", &path, e))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.slot_path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(unavailable("remove", &path, e)),
        }
    }
}

/// Process-local slots; lost when the process ends
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    disabled: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails every operation, as storage does when disabled
    pub fn disabled() -> Self {
        MemoryStore {
            slots: HashMap::new(),
            disabled: true,
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn check(&self) -> Result<()> {
        if self.disabled {
            Err(PinlogError::StorageUnavailable(
                "storage is disabled".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.slots.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.check()?;
        self.slots.remove(key);
        Ok(())
    }
}
