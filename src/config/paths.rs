//! Path management for daily-budget
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory passed by the caller (`--data-dir`)
//! 2. `DAILY_BUDGET_DATA_DIR` environment variable (if set)
//! 3. The platform data directory for the project (via `directories`)

use std::path::{Path, PathBuf};

use crate::error::BudgetError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "DAILY_BUDGET_DATA_DIR";

/// Manages all paths used by daily-budget
#[derive(Debug, Clone)]
pub struct DailyBudgetPaths {
    base_dir: PathBuf,
}

impl DailyBudgetPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no platform data directory can be determined and
    /// no override is set.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Resolve paths, preferring an explicit directory when one is given
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, BudgetError> {
        match explicit {
            Some(dir) => Ok(Self::with_base_dir(dir.to_path_buf())),
            None => Self::new(),
        }
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Flat key-value store holding budget state and settings
    pub fn store_file(&self) -> PathBuf {
        self.base_dir.join("store.json")
    }

    /// Append-only log of confirmed expenses
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("expenses.jsonl")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    directories::ProjectDirs::from("com", "dailybudget", "daily-budget")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BudgetError::Config("Could not determine a data directory".into()))
}
