//! Budget manager
//!
//! Wraps the budget state machine with write-through persistence, expense
//! recording, and change notifications. The in-memory mutation is applied
//! first; a returned error means only that writing it out failed.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::BudgetResult;
use crate::ledger::{ExpenseEntry, ExpenseLedger};
use crate::models::{BudgetState, BudgetStatus, Money, DEFAULT_WARNING_THRESHOLD};
use crate::storage::keys;
use crate::storage::{KeyValueStore, StoredValue};

use super::events::{BudgetEvent, EventBus, SettingsEvent, SubscriptionId};

/// Owner of today's budget state
pub struct BudgetManager<'a> {
    store: &'a dyn KeyValueStore,
    ledger: Option<&'a ExpenseLedger>,
    state: BudgetState,
    warning_threshold: f64,
    events: EventBus<BudgetEvent>,
}

impl<'a> BudgetManager<'a> {
    /// Load persisted state, or start fresh, then apply any pending rollover
    ///
    /// Stored state is only trusted when the initialized flag is set and both
    /// the amount and the date are readable.
    pub fn load(
        store: &'a dyn KeyValueStore,
        daily_limit: Money,
        today: NaiveDate,
    ) -> BudgetResult<Self> {
        let restored = if store.get_bool(keys::BUDGET_INITIALIZED)?.unwrap_or(false) {
            let remaining = store.get_f64(keys::REMAINING_BUDGET)?;
            let last_reset = store
                .get_string(keys::LAST_RESET_DATE)?
                .and_then(|s| NaiveDate::parse_from_str(&s, keys::DATE_FORMAT).ok());

            match (remaining, last_reset) {
                (Some(remaining), Some(date)) => Some(BudgetState::restore(
                    Money::from_f64(remaining),
                    daily_limit,
                    date,
                )),
                _ => {
                    warn!("stored budget is incomplete, starting fresh");
                    None
                }
            }
        } else {
            None
        };

        let fresh = restored.is_none();
        let state = restored.unwrap_or_else(|| BudgetState::new(daily_limit, today));

        let mut manager = Self {
            store,
            ledger: None,
            state,
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
            events: EventBus::new(),
        };

        if fresh {
            info!(limit = %daily_limit, %today, "initializing budget");
            manager.persist()?;
        }
        manager.check_for_rollover(today)?;

        Ok(manager)
    }

    /// Record confirmed expenses in `ledger`
    pub fn with_ledger(mut self, ledger: &'a ExpenseLedger) -> Self {
        self.ledger = Some(ledger);
        self
    }

    pub fn with_warning_threshold(mut self, threshold: f64) -> Self {
        self.warning_threshold = threshold;
        self
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn warning_threshold(&self) -> f64 {
        self.warning_threshold
    }

    pub fn set_warning_threshold(&mut self, threshold: f64) {
        self.warning_threshold = threshold;
    }

    /// Register a callback for budget changes
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&BudgetEvent) + 'static,
    {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn append_digit(&mut self, key: char) {
        if self.state.append_digit(key) {
            debug!(key = %key, buffer = %self.state.input(), "digit appended");
            self.emit_input();
        }
    }

    pub fn delete_last_digit(&mut self) {
        if self.state.delete_last_digit() {
            debug!(buffer = %self.state.input(), "digit deleted");
            self.emit_input();
        }
    }

    pub fn clear_all_digits(&mut self) {
        if self.state.clear_all_digits() {
            debug!("input cleared");
            self.emit_input();
        }
    }

    pub fn update_tag(&mut self, raw: &str) {
        if self.state.update_tag(raw) {
            debug!(tag = %self.state.tag(), "tag updated");
            self.events.emit(&BudgetEvent::TagChanged {
                tag: self.state.tag().clone(),
            });
        }
    }

    /// Spend the typed amount
    ///
    /// Returns the amount spent, or `None` when the entry was not a positive
    /// amount. The expense is charged against the current budget day.
    pub fn confirm_expense(&mut self) -> BudgetResult<Option<Money>> {
        let Some(amount) = self.state.confirm_expense() else {
            debug!("ignoring confirm of non-positive amount");
            return Ok(None);
        };

        let remaining = self.state.remaining_budget();
        info!(%amount, %remaining, tag = %self.state.tag(), "expense confirmed");

        self.persist()?;

        if let Some(ledger) = self.ledger {
            let entry = ExpenseEntry::new(
                self.state.last_reset_date(),
                amount,
                self.state.tag(),
                remaining,
            );
            ledger.record(&entry)?;
        }

        self.emit_input();
        self.events.emit(&BudgetEvent::ExpenseConfirmed {
            amount,
            tag: self.state.tag().clone(),
            remaining,
        });

        Ok(Some(amount))
    }

    /// Make the full daily limit available again
    pub fn reset_budget(&mut self, today: NaiveDate) -> BudgetResult<()> {
        self.state.reset_budget(today);
        info!(%today, remaining = %self.state.remaining_budget(), "budget reset");

        self.persist()?;
        self.events.emit(&BudgetEvent::BudgetReset {
            date: today,
            remaining: self.state.remaining_budget(),
        });
        Ok(())
    }

    /// Reset if the day has changed since the last reset
    pub fn check_for_rollover(&mut self, today: NaiveDate) -> BudgetResult<bool> {
        if self.state.last_reset_date() == today {
            return Ok(false);
        }

        info!(from = %self.state.last_reset_date(), to = %today, "day rolled over");
        self.reset_budget(today)?;
        Ok(true)
    }

    /// Rescale the remaining budget to a new daily limit
    pub fn on_daily_limit_changed(&mut self, old_limit: Money, new_limit: Money) -> BudgetResult<()> {
        self.state.on_daily_limit_changed(old_limit, new_limit);
        let remaining = self.state.remaining_budget();
        info!(%old_limit, %new_limit, %remaining, "budget rescaled");

        self.persist()?;
        self.events.emit(&BudgetEvent::BudgetRescaled {
            old_limit,
            new_limit,
            remaining,
        });
        Ok(())
    }

    /// React to a settings change that affects the budget
    pub fn apply_settings_event(&mut self, event: &SettingsEvent) -> BudgetResult<()> {
        match event {
            SettingsEvent::DailyLimitChanged { old, new } => self.on_daily_limit_changed(*old, *new),
            SettingsEvent::WarningThresholdChanged { threshold } => {
                self.set_warning_threshold(*threshold);
                Ok(())
            }
            SettingsEvent::CurrencyChanged { .. } | SettingsEvent::HapticsChanged { .. } => Ok(()),
        }
    }

    pub fn current_amount(&self) -> Money {
        self.state.current_amount()
    }

    pub fn budget_percentage(&self) -> f64 {
        self.state.budget_percentage()
    }

    pub fn is_over_budget(&self) -> bool {
        self.state.is_over_budget()
    }

    /// Presentation band using the configured warning threshold
    pub fn status(&self) -> BudgetStatus {
        self.state.status(self.warning_threshold)
    }

    /// Write remaining budget, reset date, and the initialized flag
    fn persist(&self) -> BudgetResult<()> {
        self.store.set_many(vec![
            (
                keys::REMAINING_BUDGET,
                StoredValue::Number(self.state.remaining_budget().as_f64()),
            ),
            (
                keys::LAST_RESET_DATE,
                StoredValue::Text(
                    self.state
                        .last_reset_date()
                        .format(keys::DATE_FORMAT)
                        .to_string(),
                ),
            ),
            (keys::BUDGET_INITIALIZED, StoredValue::Flag(true)),
        ])
    }

    fn emit_input(&mut self) {
        self.events.emit(&BudgetEvent::InputChanged {
            buffer: self.state.input().as_str().to_string(),
        });
    }
}
