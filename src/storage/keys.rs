//! Key names in the flat store namespace

/// Remaining budget for today, in currency units
pub const REMAINING_BUDGET: &str = "remaining_budget";

/// Local date of the last full reset, `YYYY-MM-DD`
pub const LAST_RESET_DATE: &str = "last_reset_date";

/// Set once the budget has been written, so zero is not mistaken for unset
pub const BUDGET_INITIALIZED: &str = "budget_initialized";

/// Configured daily limit, in currency units
pub const DAILY_BUDGET_LIMIT: &str = "daily_budget_limit";

/// ISO 4217 currency code
pub const CURRENCY_CODE: &str = "currency_code";

pub const HAPTICS_ENABLED: &str = "haptics_enabled";

/// Fraction of the limit below which the budget is critical
pub const WARNING_THRESHOLD: &str = "warning_threshold";

/// Date format used for persisted dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";
