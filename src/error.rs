//! Custom error types for daily-budget
//!
//! The budget state machine itself never fails; these errors cover the
//! ambient layers around it (paths, persistence, settings validation, ledger).

use thiserror::Error;

/// The main error type for daily-budget operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Key-value store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Expense ledger errors
    #[error("Ledger error: {0}")]
    Ledger(String),
}

impl BudgetError {
    /// Create a validation error for an out-of-range setting
    pub fn invalid_setting(name: &str, reason: impl Into<String>) -> Self {
        Self::Validation(format!("invalid {}: {}", name, reason.into()))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for daily-budget operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_setting() {
        let err = BudgetError::invalid_setting("daily limit", "must be positive");
        assert_eq!(
            err.to_string(),
            "Validation error: invalid daily limit: must be positive"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BudgetError = io_err.into();
        assert!(matches!(err, BudgetError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: BudgetError = json_err.into();
        assert!(matches!(err, BudgetError::Json(_)));
    }
}
