//! Presentation banding of the remaining budget

use serde::{Deserialize, Serialize};
use std::fmt;

/// Above this fraction of the limit the budget is healthy
pub const HEALTHY_FRACTION: f64 = 0.5;

/// Default boundary between the warning and critical bands
pub const DEFAULT_WARNING_THRESHOLD: f64 = 0.25;

/// Four-way classification of how much of today's budget is left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// More than half the limit remains
    Healthy,
    /// At most half remains, but more than the warning threshold
    Warning,
    /// At or below the warning threshold, not yet negative
    Critical,
    /// Spending has exceeded the limit
    OverBudget,
}

impl BudgetStatus {
    /// Classify a remaining fraction of the limit
    ///
    /// `fraction` is `remaining / limit` and may be negative.
    pub fn classify(fraction: f64, warning_threshold: f64) -> Self {
        if fraction < 0.0 {
            Self::OverBudget
        } else if fraction > HEALTHY_FRACTION {
            Self::Healthy
        } else if fraction > warning_threshold {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    /// Short label for terminal output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::OverBudget => "over budget",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
