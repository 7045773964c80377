//! Key-value persistence contract
//!
//! A flat namespace of string keys mapping to primitive values. Managers
//! borrow a store as `&dyn KeyValueStore`; implementations use interior
//! mutability so reads and writes both take `&self`.

use serde::{Deserialize, Serialize};

use crate::error::BudgetResult;

/// A primitive value held in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl StoredValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for StoredValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<f64> for StoredValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for StoredValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for StoredValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Synchronous get/set over a flat key namespace
pub trait KeyValueStore {
    /// Read a value, `None` if the key was never written
    fn get(&self, key: &str) -> BudgetResult<Option<StoredValue>>;

    /// Write a single value through to the backing medium
    fn set(&self, key: &str, value: StoredValue) -> BudgetResult<()>;

    /// Write several values; file-backed stores flush once
    fn set_many(&self, entries: Vec<(&str, StoredValue)>) -> BudgetResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Read a bool, `None` if missing or of another type
    fn get_bool(&self, key: &str) -> BudgetResult<Option<bool>> {
        Ok(self.get(key)?.and_then(|v| v.as_bool()))
    }

    /// Read a number, `None` if missing or of another type
    fn get_f64(&self, key: &str) -> BudgetResult<Option<f64>> {
        Ok(self.get(key)?.and_then(|v| v.as_f64()))
    }

    /// Read a string, `None` if missing or of another type
    fn get_string(&self, key: &str) -> BudgetResult<Option<String>> {
        Ok(self.get(key)?.and_then(|v| v.as_str().map(str::to_string)))
    }
}
