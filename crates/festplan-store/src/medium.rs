//! Key/value storage medium: the localStorage contract.
//!
//! `get` returns `None` for an absent slot. Values are UTF-8 text; the
//! codec layer decides what goes inside.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use parking_lot::RwLock;

use crate::error::StoreError;

pub trait StorageMedium: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory medium for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryMedium {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageMedium for MemoryMedium {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.slots.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.slots.write().remove(key);
        Ok(())
    }
}

/// On-disk medium: one UTF-8 file per slot under a data directory.
pub struct FileMedium {
    dir: PathBuf,
}

impl FileMedium {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Platform data directory for the default profile.
    pub fn default_dir() -> Result<PathBuf, StoreError> {
        let dirs = ProjectDirs::from("com", "festplan", "festplan")
            .ok_or_else(|| StoreError::Medium("cannot determine data directory".into()))?;
        Ok(dirs.data_dir().to_path_buf())
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageMedium for FileMedium {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::write(self.slot_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_medium_roundtrip() {
        let medium = MemoryMedium::new();
        assert_eq!(medium.get("a").unwrap(), None);
        medium.set("a", "1").unwrap();
        assert_eq!(medium.get("a").unwrap().as_deref(), Some("1"));
        medium.remove("a").unwrap();
        assert_eq!(medium.get("a").unwrap(), None);
    }

    #[test]
    fn file_medium_roundtrip() {
        let dir = tempdir().unwrap();
        let medium = FileMedium::new(dir.path()).unwrap();
        assert_eq!(medium.get("slot").unwrap(), None);
        medium.set("slot", "{\"x\":1}").unwrap();
        assert_eq!(medium.get("slot").unwrap().as_deref(), Some("{\"x\":1}"));
        medium.remove("slot").unwrap();
        medium.remove("slot").unwrap(); // second remove is a no-op
        assert_eq!(medium.get("slot").unwrap(), None);
    }
}
