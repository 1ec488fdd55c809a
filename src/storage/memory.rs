//! In-memory storage engine used by tests and ephemeral runs.
use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::storage::{StorageEngine, StorageError, StoreKey};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    documents: RwLock<HashMap<&'static str, Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageEngine for MemoryStorage {
    fn read(&self, key: StoreKey) -> Result<Option<Value>, StorageError> {
        let documents = self
            .documents
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(documents.get(key.as_str()).cloned())
    }

    fn write(&self, key: StoreKey, value: &Value) -> Result<(), StorageError> {
        let mut documents = self
            .documents
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        documents.insert(key.as_str(), value.clone());
        Ok(())
    }

    fn remove(&self, key: StoreKey) -> Result<(), StorageError> {
        let mut documents = self
            .documents
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        documents.remove(key.as_str());
        Ok(())
    }
}
