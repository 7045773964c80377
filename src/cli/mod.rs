//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod keypad;
pub mod settings;

use std::cell::RefCell;
use std::rc::Rc;

use crate::display::format_event;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::services::{BudgetEvent, BudgetManager, SubscriptionId};

pub use expense::{handle_history, handle_reset, handle_spend, handle_status};
pub use keypad::run_keypad;
pub use settings::{handle_settings_command, SettingsCommands, Switch};

/// Parse an amount typed on the command line
///
/// Unlike `Money::parse`, more than two decimal places is an error rather
/// than being cut off.
pub fn parse_amount(raw: &str) -> BudgetResult<Money> {
    let raw = raw.trim();
    let amount = Money::parse(raw).map_err(|e| BudgetError::Validation(e.to_string()))?;

    let fraction_digits = raw.split_once('.').map_or(0, |(_, f)| f.len());
    if fraction_digits > 2 {
        return Err(BudgetError::Validation(format!(
            "'{}' has more than two decimal places",
            raw
        )));
    }

    Ok(amount)
}

/// Collects budget events while a command runs
///
/// Commands attach before mutating the budget and turn whatever was emitted
/// into printable notifications afterwards.
pub struct EventQueue {
    events: Rc<RefCell<Vec<BudgetEvent>>>,
    subscription: SubscriptionId,
}

impl EventQueue {
    pub fn attach(budget: &mut BudgetManager<'_>) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let subscription = budget.subscribe(move |event: &BudgetEvent| {
            sink.borrow_mut().push(event.clone());
        });
        Self {
            events,
            subscription,
        }
    }

    /// Take every event collected so far
    pub fn drain(&self) -> Vec<BudgetEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    /// Drain and format the events worth telling the user about
    pub fn notifications(&self, currency_code: &str) -> Vec<String> {
        self.drain()
            .iter()
            .filter_map(|event| format_event(event, currency_code))
            .collect()
    }

    pub fn detach(self, budget: &mut BudgetManager<'_>) {
        budget.unsubscribe(self.subscription);
    }
}
