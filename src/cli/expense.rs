//! Budget CLI commands
//!
//! One-shot commands for checking today's budget, spending, resetting, and
//! listing recorded expenses.

use chrono::NaiveDate;

use crate::display::{format_history, format_status};
use crate::error::{BudgetError, BudgetResult};
use crate::ledger::ExpenseLedger;
use crate::models::Money;
use crate::services::{BudgetManager, Tracker};

use super::{parse_amount, EventQueue};

/// Print today's budget summary
pub fn handle_status(tracker: &Tracker<'_>) -> BudgetResult<()> {
    print!("{}", format_status(tracker));
    Ok(())
}

/// Type `amount` on the keypad, apply the tag, and confirm
///
/// The amount goes through the same keypad rules as interactive entry, so
/// anything the keypad would not accept is rejected here.
pub fn handle_spend(
    tracker: &mut Tracker<'_>,
    amount: &str,
    tag: Option<&str>,
) -> BudgetResult<Money> {
    let requested = parse_amount(amount)?;
    if !requested.is_positive() {
        return Err(BudgetError::Validation(format!(
            "amount must be greater than zero, got {}",
            amount.trim()
        )));
    }

    let queue = EventQueue::attach(&mut tracker.budget);
    let result = type_and_confirm(&mut tracker.budget, amount.trim(), requested, tag);

    for message in queue.notifications(tracker.settings.currency_code()) {
        println!("{}", message);
    }
    queue.detach(&mut tracker.budget);

    result
}

fn type_and_confirm(
    budget: &mut BudgetManager<'_>,
    keys: &str,
    requested: Money,
    tag: Option<&str>,
) -> BudgetResult<Money> {
    budget.clear_all_digits();
    for key in keys.chars() {
        budget.append_digit(key);
    }

    if budget.current_amount() != requested {
        let typed = budget.state().input().as_str().to_string();
        budget.clear_all_digits();
        return Err(BudgetError::Validation(format!(
            "'{}' is not a keypad amount, keypad read {}",
            keys, typed
        )));
    }

    if let Some(tag) = tag {
        budget.update_tag(tag);
    }

    budget
        .confirm_expense()?
        .ok_or_else(|| BudgetError::Validation("nothing to confirm".into()))
}

/// Restore the full daily limit for today
pub fn handle_reset(tracker: &mut Tracker<'_>, today: NaiveDate) -> BudgetResult<()> {
    tracker.budget.reset_budget(today)?;
    println!(
        "Budget reset: {} available for {}",
        tracker.format(tracker.budget.state().remaining_budget()),
        today
    );
    Ok(())
}

/// List recorded expenses for one day, or all of them
pub fn handle_history(
    tracker: &Tracker<'_>,
    ledger: &ExpenseLedger,
    date: NaiveDate,
    all: bool,
) -> BudgetResult<()> {
    let entries = if all {
        ledger.read_all()?
    } else {
        ledger.entries_for(date)?
    };

    print!("{}", format_history(&entries, tracker.settings.currency_code()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_spend_applies_amount_and_tag() {
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(&store, None, date("2025-01-01")).unwrap();

        let spent = handle_spend(&mut tracker, "17.86", Some("Coffee")).unwrap();
        assert_eq!(spent, Money::from_cents(1786));
        assert_eq!(tracker.budget.state().remaining_budget(), Money::from_cents(8214));
        assert_eq!(tracker.budget.state().tag().as_str(), "Coffee");
    }

    #[test]
    fn test_spend_rejects_three_decimals() {
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(&store, None, date("2025-01-01")).unwrap();

        let err = handle_spend(&mut tracker, "1.999", None).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(tracker.budget.state().remaining_budget(), Money::from_cents(10000));
        assert_eq!(tracker.budget.state().input().as_str(), "0");
    }

    #[test]
    fn test_spend_rejects_amount_longer_than_keypad() {
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(&store, None, date("2025-01-01")).unwrap();

        let err = handle_spend(&mut tracker, "92233720368547758", None).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(tracker.budget.state().remaining_budget(), Money::from_cents(10000));
        assert_eq!(tracker.budget.state().input().as_str(), "0");
    }

    #[test]
    fn test_spend_rejects_zero_and_garbage() {
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(&store, None, date("2025-01-01")).unwrap();

        assert!(handle_spend(&mut tracker, "0", None).unwrap_err().is_validation());
        assert!(handle_spend(&mut tracker, "-5", None).unwrap_err().is_validation());
        assert!(handle_spend(&mut tracker, "five", None).unwrap_err().is_validation());
    }

    #[test]
    fn test_reset() {
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(&store, None, date("2025-01-01")).unwrap();
        handle_spend(&mut tracker, "30", None).unwrap();

        handle_reset(&mut tracker, date("2025-01-01")).unwrap();
        assert_eq!(tracker.budget.state().remaining_budget(), Money::from_cents(10000));
    }
}
