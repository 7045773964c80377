//! Expense ledger for daily-budget
//!
//! Records every confirmed expense, with its tag, in an append-only log
//! using a line-delimited JSON format (JSONL). The budget itself only keeps
//! the running remaining amount; the ledger is what `history` reads.
//!
//! # Example
//!
//! ```rust,ignore
//! use daily_budget::ledger::{ExpenseEntry, ExpenseLedger};
//!
//! let ledger = ExpenseLedger::new(paths.ledger_file());
//! ledger.record(&ExpenseEntry::new(today, amount, &tag, remaining))?;
//! let spent = ledger.total_for(today)?;
//! ```

mod entry;
mod log;

pub use entry::{ExpenseEntry, ExpenseId};
pub use log::ExpenseLedger;
