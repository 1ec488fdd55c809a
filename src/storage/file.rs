//! File-backed storage engine: one JSON file per document key.
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::storage::{StorageEngine, StorageError, StoreKey};

/// Stores each document as `habana_<key>.json` under a data directory.
/// Writes go through a temporary file and rename so a crash mid-write never
/// leaves a half-written document behind.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates the data directory when missing.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("habana_{}.json", key.as_str()))
    }
}

impl StorageEngine for FileStorage {
    fn read(&self, key: StoreKey) -> Result<Option<Value>, StorageError> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let value = serde_json::from_str(&raw).map_err(|source| StorageError::CorruptDocument {
            key: key.as_str(),
            source,
        })?;
        Ok(Some(value))
    }

    fn write(&self, key: StoreKey, value: &Value) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(value)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: StoreKey) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
