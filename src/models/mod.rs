//! Core data models for daily-budget
//!
//! The budget state machine and the value types it is built from.

pub mod input;
pub mod money;
pub mod state;
pub mod status;
pub mod tag;

pub use input::AmountInput;
pub use money::{Money, MoneyParseError};
pub use state::BudgetState;
pub use status::{BudgetStatus, DEFAULT_WARNING_THRESHOLD};
pub use tag::{Tag, UNSET_TAG};
