//! daily-budget - a daily spending allowance that refills every calendar day
//!
//! The core is a small state machine: a keypad entry buffer, an optional tag,
//! and the remaining budget for the current day. Confirming an expense
//! subtracts it; the first check on a new calendar day restores the full
//! limit; changing the limit rescales what is left proportionally.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, keypad input, tag, and the pure budget state machine
//! - `storage`: Flat key-value store (JSON file or in-memory)
//! - `config`: Data paths and user settings
//! - `services`: Persistence, change notifications, and settings wiring
//! - `ledger`: Append-only record of confirmed expenses
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use daily_budget::services::Tracker;
//! use daily_budget::storage::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let mut tracker = Tracker::open(&store, None, today)?;
//! tracker.budget.append_digit('5');
//! tracker.budget.confirm_expense()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod services;
pub mod storage;

pub use error::BudgetError;
