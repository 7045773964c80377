//! In-memory key-value store for tests and ephemeral sessions

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::BudgetError;

use super::kv::{KeyValueStore, StoredValue};

/// Store that never touches the filesystem
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, StoredValue>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<StoredValue>, BudgetError> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: StoredValue) -> Result<(), BudgetError> {
        let mut data = self.data.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.insert(key.to_string(), value);
        Ok(())
    }
}
