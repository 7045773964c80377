//! User settings for daily-budget
//!
//! Settings live in the same flat key-value namespace as the budget state.
//! Missing or mistyped keys fall back to their defaults.

use tracing::warn;

use crate::error::BudgetError;
use crate::models::status::{DEFAULT_WARNING_THRESHOLD, HEALTHY_FRACTION};
use crate::models::Money;
use crate::storage::keys;
use crate::storage::KeyValueStore;

/// User settings for daily-budget
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Spending ceiling for one calendar day
    pub daily_limit: Money,

    /// ISO 4217 currency code used when displaying amounts
    pub currency_code: String,

    pub haptics_enabled: bool,

    /// Fraction of the limit at or below which the budget is critical
    pub warning_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_limit: Money::from_cents(10_000),
            currency_code: "USD".to_string(),
            haptics_enabled: true,
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
        }
    }
}

impl Settings {
    /// Load settings from the store, using defaults for anything unset
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, BudgetError> {
        let mut settings = Settings::default();

        match store.get_f64(keys::DAILY_BUDGET_LIMIT)? {
            Some(value) if validate_daily_limit(Money::from_f64(value)).is_ok() => {
                settings.daily_limit = Money::from_f64(value);
            }
            Some(value) => warn!(value, "ignoring invalid stored daily limit"),
            None => {}
        }

        if let Some(code) = store.get_string(keys::CURRENCY_CODE)? {
            match normalize_currency_code(&code) {
                Ok(code) => settings.currency_code = code,
                Err(_) => warn!(code = %code, "ignoring invalid stored currency code"),
            }
        }

        if let Some(enabled) = store.get_bool(keys::HAPTICS_ENABLED)? {
            settings.haptics_enabled = enabled;
        }

        match store.get_f64(keys::WARNING_THRESHOLD)? {
            Some(value) if validate_warning_threshold(value).is_ok() => {
                settings.warning_threshold = value;
            }
            Some(value) => warn!(value, "ignoring invalid stored warning threshold"),
            None => {}
        }

        Ok(settings)
    }
}

/// A daily limit must be positive and no larger than `Money::MAX_BALANCE`
pub fn validate_daily_limit(limit: Money) -> Result<Money, BudgetError> {
    if !limit.is_positive() {
        return Err(BudgetError::invalid_setting(
            "daily limit",
            format!("{} must be greater than zero", limit),
        ));
    }
    if limit > Money::MAX_BALANCE {
        return Err(BudgetError::invalid_setting(
            "daily limit",
            format!("{} is larger than {}", limit, Money::MAX_BALANCE),
        ));
    }
    Ok(limit)
}

/// Three ASCII letters, returned uppercase
pub fn normalize_currency_code(code: &str) -> Result<String, BudgetError> {
    let code = code.trim();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(BudgetError::invalid_setting(
            "currency code",
            format!("'{}' is not a three-letter code", code),
        ))
    }
}

/// The warning band must sit between zero and the healthy line
pub fn validate_warning_threshold(threshold: f64) -> Result<f64, BudgetError> {
    if threshold.is_finite() && (0.0..=HEALTHY_FRACTION).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(BudgetError::invalid_setting(
            "warning threshold",
            format!("{} must be between 0 and {}", threshold, HEALTHY_FRACTION),
        ))
    }
}
