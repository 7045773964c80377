//! JSON file backed key-value store
//!
//! Keeps the whole namespace in memory and rewrites `store.json` atomically
//! on every write.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::BudgetError;

use super::file_io::{read_json, write_json_atomic};
use super::kv::{KeyValueStore, StoredValue};

/// Key-value store persisted as a single JSON object
pub struct JsonKeyValueStore {
    path: PathBuf,
    data: RwLock<BTreeMap<String, StoredValue>>,
}

impl JsonKeyValueStore {
    /// Create a store for `path` without reading it
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create a store and load whatever is on disk
    pub fn open(path: PathBuf) -> Result<Self, BudgetError> {
        let store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the namespace from disk, replacing what is in memory
    pub fn load(&self) -> Result<(), BudgetError> {
        let file_data: BTreeMap<String, StoredValue> = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        debug!(path = %self.path.display(), keys = file_data.len(), "loaded store");
        *data = file_data;
        Ok(())
    }

    /// Write the namespace to disk
    pub fn save(&self) -> Result<(), BudgetError> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*data)
    }
}

impl KeyValueStore for JsonKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<StoredValue>, BudgetError> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: StoredValue) -> Result<(), BudgetError> {
        self.set_many(vec![(key, value)])
    }

    fn set_many(&self, entries: Vec<(&str, StoredValue)>) -> Result<(), BudgetError> {
        {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            for (key, value) in entries {
                data.insert(key.to_string(), value);
            }
        }

        self.save()
    }
}
