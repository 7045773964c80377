//! Daily budget state machine
//!
//! Pure in-memory state for one day's spending. Every operation is total:
//! invalid input is ignored rather than reported. The current date is always
//! supplied by the caller.

use chrono::NaiveDate;

use super::input::AmountInput;
use super::money::Money;
use super::status::BudgetStatus;
use super::tag::Tag;

/// Remaining budget, daily limit, keypad entry, and tag for the current day
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetState {
    remaining_budget: Money,
    daily_limit: Money,
    input: AmountInput,
    tag: Tag,
    last_reset_date: NaiveDate,
}

impl BudgetState {
    /// Start a fresh day with the full limit available
    pub fn new(daily_limit: Money, today: NaiveDate) -> Self {
        Self {
            remaining_budget: daily_limit,
            daily_limit,
            input: AmountInput::new(),
            tag: Tag::unset(),
            last_reset_date: today,
        }
    }

    /// Rebuild state from persisted values
    pub fn restore(remaining_budget: Money, daily_limit: Money, last_reset_date: NaiveDate) -> Self {
        Self {
            remaining_budget: remaining_budget.clamp_balance(),
            daily_limit,
            input: AmountInput::new(),
            tag: Tag::unset(),
            last_reset_date,
        }
    }

    pub fn remaining_budget(&self) -> Money {
        self.remaining_budget
    }

    pub fn daily_limit(&self) -> Money {
        self.daily_limit
    }

    pub fn input(&self) -> &AmountInput {
        &self.input
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn last_reset_date(&self) -> NaiveDate {
        self.last_reset_date
    }

    /// Apply a keypad press; returns whether the entry changed
    pub fn append_digit(&mut self, key: char) -> bool {
        self.input.push(key)
    }

    /// Backspace; the entry never drops below "0"
    pub fn delete_last_digit(&mut self) -> bool {
        self.input.pop()
    }

    /// Long-press clear; returns whether the entry changed
    pub fn clear_all_digits(&mut self) -> bool {
        let changed = !self.input.is_placeholder();
        self.input.clear();
        changed
    }

    /// Spend the typed amount
    ///
    /// Does nothing unless the entry parses to a positive amount. On success
    /// the entry is reset and the spent amount is returned. The tag is kept
    /// for the next expense.
    pub fn confirm_expense(&mut self) -> Option<Money> {
        let amount = self.input.amount();
        if !amount.is_positive() {
            return None;
        }

        self.remaining_budget = self.remaining_budget.debit(amount);
        self.input.clear();
        Some(amount)
    }

    /// Set the tag from raw input; returns whether it changed
    pub fn update_tag(&mut self, raw: &str) -> bool {
        let tag = Tag::from_input(raw);
        if tag == self.tag {
            return false;
        }
        self.tag = tag;
        true
    }

    /// Make the full daily limit available again
    pub fn reset_budget(&mut self, today: NaiveDate) {
        self.remaining_budget = self.daily_limit;
        self.last_reset_date = today;
    }

    /// Reset if `today` differs from the last reset date
    ///
    /// Returns whether a reset happened.
    pub fn check_for_rollover(&mut self, today: NaiveDate) -> bool {
        if self.last_reset_date == today {
            return false;
        }
        self.reset_budget(today);
        true
    }

    /// Adopt a new daily limit, keeping the same fraction of it remaining
    ///
    /// With no valid previous limit the new limit becomes the remaining budget.
    pub fn on_daily_limit_changed(&mut self, old_limit: Money, new_limit: Money) {
        self.remaining_budget = if old_limit.is_positive() {
            self.remaining_budget.rescale(old_limit, new_limit)
        } else {
            new_limit
        };
        self.daily_limit = new_limit;
    }

    /// The typed amount, zero if it does not parse
    pub fn current_amount(&self) -> Money {
        self.input.amount()
    }

    /// Remaining fraction of the limit, floored at zero
    pub fn budget_percentage(&self) -> f64 {
        self.remaining_budget
            .fraction_of(self.daily_limit)
            .map(|fraction| fraction.max(0.0))
            .unwrap_or(0.0)
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining_budget.is_negative()
    }

    /// Presentation band for the remaining budget
    pub fn status(&self, warning_threshold: f64) -> BudgetStatus {
        if self.is_over_budget() {
            return BudgetStatus::OverBudget;
        }
        BudgetStatus::classify(self.budget_percentage(), warning_threshold)
    }
}
