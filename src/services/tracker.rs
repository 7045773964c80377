//! Tracker: settings and budget wired together
//!
//! The settings manager owns the daily limit; the budget manager must hear
//! about every limit or threshold change. The tracker forwards each settings
//! event to the budget so the two never drift apart.

use chrono::NaiveDate;

use crate::error::BudgetResult;
use crate::ledger::ExpenseLedger;
use crate::models::Money;
use crate::storage::KeyValueStore;

use super::budget::BudgetManager;
use super::events::SettingsEvent;
use super::settings::SettingsManager;

/// Settings and budget sharing one store
pub struct Tracker<'a> {
    pub settings: SettingsManager<'a>,
    pub budget: BudgetManager<'a>,
}

impl<'a> Tracker<'a> {
    /// Load settings, then the budget for `today`
    pub fn open(
        store: &'a dyn KeyValueStore,
        ledger: Option<&'a ExpenseLedger>,
        today: NaiveDate,
    ) -> BudgetResult<Self> {
        let settings = SettingsManager::load(store)?;
        let mut budget = BudgetManager::load(store, settings.daily_limit(), today)?
            .with_warning_threshold(settings.warning_threshold());

        if let Some(ledger) = ledger {
            budget = budget.with_ledger(ledger);
        }

        Ok(Self { settings, budget })
    }

    /// Change the daily limit and rescale today's remaining budget
    ///
    /// Returns whether the limit changed.
    pub fn set_daily_limit(&mut self, limit: Money) -> BudgetResult<bool> {
        let event = self.settings.set_daily_limit(limit)?;
        self.forward(event)
    }

    pub fn set_warning_threshold(&mut self, threshold: f64) -> BudgetResult<bool> {
        let event = self.settings.set_warning_threshold(threshold)?;
        self.forward(event)
    }

    pub fn set_currency_code(&mut self, code: &str) -> BudgetResult<bool> {
        Ok(self.settings.set_currency_code(code)?.is_some())
    }

    pub fn set_haptics_enabled(&mut self, enabled: bool) -> BudgetResult<bool> {
        Ok(self.settings.set_haptics_enabled(enabled)?.is_some())
    }

    /// Restore default settings, forwarding the resulting changes
    pub fn reset_settings(&mut self) -> BudgetResult<usize> {
        let events = self.settings.reset_to_defaults()?;
        for event in &events {
            self.budget.apply_settings_event(event)?;
        }
        Ok(events.len())
    }

    /// Format an amount in the configured currency
    pub fn format(&self, amount: Money) -> String {
        amount.format_with_code(self.settings.currency_code())
    }

    fn forward(&mut self, event: Option<SettingsEvent>) -> BudgetResult<bool> {
        match event {
            Some(event) => {
                self.budget.apply_settings_event(&event)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_limit_change_reaches_budget() {
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(&store, None, date("2025-01-01")).unwrap();

        for key in "60".chars() {
            tracker.budget.append_digit(key);
        }
        tracker.budget.confirm_expense().unwrap();

        assert!(tracker.set_daily_limit(Money::from_cents(15000)).unwrap());
        assert_eq!(tracker.budget.state().remaining_budget(), Money::from_cents(6000));
        assert_eq!(tracker.budget.state().daily_limit(), Money::from_cents(15000));

        assert!(!tracker.set_daily_limit(Money::from_cents(15000)).unwrap());
    }

    #[test]
    fn test_reopen_uses_stored_limit() {
        let store = MemoryStore::new();
        {
            let mut tracker = Tracker::open(&store, None, date("2025-01-01")).unwrap();
            tracker.set_daily_limit(Money::from_cents(5000)).unwrap();
        }

        let tracker = Tracker::open(&store, None, date("2025-01-02")).unwrap();
        assert_eq!(tracker.budget.state().daily_limit(), Money::from_cents(5000));
        assert_eq!(tracker.budget.state().remaining_budget(), Money::from_cents(5000));
    }

    #[test]
    fn test_threshold_change_reaches_budget() {
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(&store, None, date("2025-01-01")).unwrap();

        assert!(tracker.set_warning_threshold(0.4).unwrap());
        assert_eq!(tracker.budget.warning_threshold(), 0.4);
    }

    #[test]
    fn test_reset_settings_rescales() {
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(&store, None, date("2025-01-01")).unwrap();
        tracker.set_daily_limit(Money::from_cents(20000)).unwrap();
        tracker.set_currency_code("jpy").unwrap();

        assert_eq!(tracker.reset_settings().unwrap(), 2);
        assert_eq!(tracker.budget.state().remaining_budget(), Money::from_cents(10000));
        assert_eq!(tracker.format(Money::from_cents(150)), "USD 1.50");
    }
}
