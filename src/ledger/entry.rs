//! Expense ledger entries

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::models::{Money, Tag};

/// Unique identifier of a recorded expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exp-{}", &self.0.to_string()[..8])
    }
}

/// One confirmed expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: ExpenseId,

    /// When the expense was confirmed (UTC)
    pub timestamp: DateTime<Utc>,

    /// Local day the expense was charged against
    pub date: NaiveDate,

    pub amount: Money,

    /// Tag text, absent when no tag was chosen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Remaining budget right after this expense
    pub remaining_after: Money,
}

impl ExpenseEntry {
    /// Record an expense confirmed now
    pub fn new(date: NaiveDate, amount: Money, tag: &Tag, remaining_after: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            timestamp: Utc::now(),
            date,
            amount,
            tag: tag.label().map(str::to_string),
            remaining_after,
        }
    }

    /// Tag for display, "-" when untagged
    pub fn tag_display(&self) -> &str {
        self.tag.as_deref().unwrap_or("-")
    }
}
