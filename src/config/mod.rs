//! Configuration module for daily-budget
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings with defaults and validation

pub mod paths;
pub mod settings;

pub use paths::DailyBudgetPaths;
pub use settings::Settings;
