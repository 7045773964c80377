//! Storage layer for daily-budget
//!
//! A flat key-value namespace behind the `KeyValueStore` trait, with a JSON
//! file implementation (atomic writes) and an in-memory one.

pub mod file_io;
pub mod json_store;
pub mod keys;
pub mod kv;
pub mod memory;

pub use file_io::{read_json, write_json_atomic};
pub use json_store::JsonKeyValueStore;
pub use kv::{KeyValueStore, StoredValue};
pub use memory::MemoryStore;

use crate::config::paths::DailyBudgetPaths;
use crate::error::BudgetError;

/// Open the file-backed store under the configured data directory
pub fn open_store(paths: &DailyBudgetPaths) -> Result<JsonKeyValueStore, BudgetError> {
    paths.ensure_directories()?;
    JsonKeyValueStore::open(paths.store_file())
}
