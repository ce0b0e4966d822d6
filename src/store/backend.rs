use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use directories::BaseDirs;
use thiserror::Error;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".recital-order-manager";

/// Failures the storage backend can produce. Callers generally fold these
/// into `anyhow` chains; the variants exist so tests and the load path can
/// tell "no home directory" apart from plain IO trouble.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not locate home directory")]
    NoHomeDir,
    #[error("failed to access store file")]
    Io(#[from] io::Error),
}

/// Minimal key-value surface the rest of the app persists through. Modeling
/// storage as an injected interface instead of an ambient global keeps the
/// controller testable without a real filesystem behind it.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` when nothing has ever
    /// been written there.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, overwriting any prior value.
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Disk-backed store keeping one JSON file per key inside the application
/// data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Resolve the store beneath the user's home directory, creating the
    /// data directory if it does not exist yet.
    pub fn open() -> Result<Self, StoreError> {
        let base_dirs = BaseDirs::new().ok_or(StoreError::NoHomeDir)?;
        Self::open_at(base_dirs.home_dir().join(DATA_DIR_NAME))
    }

    /// Open a store rooted at an explicit directory. Tests point this at a
    /// scratch directory.
    pub fn open_at(root: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// In-process store used by tests and any future headless tooling.
#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrips() {
        let mut store = MemoryStore::default();
        assert!(store.get("dances").unwrap().is_none());
        store.put("dances", "[1,2,3]").unwrap();
        assert_eq!(store.get("dances").unwrap().as_deref(), Some("[1,2,3]"));
        store.put("dances", "[]").unwrap();
        assert_eq!(store.get("dances").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn file_store_roundtrips() {
        let root = std::env::temp_dir().join("recital_order_store_test");
        let mut store = FileStore::open_at(root.clone()).unwrap();

        assert!(store.get("dances").unwrap().is_none());
        store.put("dances", "{\"a\":1}").unwrap();
        assert_eq!(store.get("dances").unwrap().as_deref(), Some("{\"a\":1}"));

        let _ = std::fs::remove_dir_all(&root);
    }
}
