//! Budget display formatting
//!
//! Formats today's budget and keypad state for terminal output.

use crate::config::Settings;
use crate::models::{BudgetStatus, Money};
use crate::services::{BudgetEvent, Tracker};

const METER_WIDTH: usize = 20;

/// Text meter of the remaining fraction, e.g. `[#####---------------]`
pub fn format_meter(fraction: f64) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * METER_WIDTH as f64).round()) as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(METER_WIDTH - filled))
}

fn status_icon(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Healthy => "●",
        BudgetStatus::Warning => "◐",
        BudgetStatus::Critical => "○",
        BudgetStatus::OverBudget => "✗",
    }
}

/// Multi-line summary of today's budget
pub fn format_status(tracker: &Tracker<'_>) -> String {
    let budget = &tracker.budget;
    let state = budget.state();
    let percentage = budget.budget_percentage();
    let status = budget.status();

    let mut output = String::new();
    output.push_str(&format!(
        "Remaining:  {}\n",
        tracker.format(state.remaining_budget())
    ));
    output.push_str(&format!(
        "Daily limit: {}\n",
        tracker.format(state.daily_limit())
    ));
    output.push_str(&format!(
        "{} {:.0}%  {} {}\n",
        format_meter(percentage),
        percentage * 100.0,
        status_icon(status),
        status
    ));
    if budget.is_over_budget() {
        output.push_str(&format!(
            "Over budget by {}\n",
            tracker.format(state.remaining_budget().abs())
        ));
    }
    output.push_str(&format!("Since: {}\n", state.last_reset_date()));

    output
}

/// One-line keypad view: entry, tag, and remaining budget
pub fn format_keypad_line(tracker: &Tracker<'_>) -> String {
    let state = tracker.budget.state();
    format!(
        "[ {:>10} ]  {:<12}  left: {} ({:.0}%)",
        state.input().as_str(),
        state.tag().as_str(),
        tracker.format(state.remaining_budget()),
        tracker.budget.budget_percentage() * 100.0
    )
}

/// Notification text for events worth telling the user about
pub fn format_event(event: &BudgetEvent, currency_code: &str) -> Option<String> {
    let fmt = |m: &Money| m.format_with_code(currency_code);
    match event {
        BudgetEvent::ExpenseConfirmed {
            amount,
            tag,
            remaining,
        } => Some(match tag.label() {
            Some(label) => format!("✓ Spent {} on {} ({} left)", fmt(amount), label, fmt(remaining)),
            None => format!("✓ Spent {} ({} left)", fmt(amount), fmt(remaining)),
        }),
        BudgetEvent::BudgetReset { date, remaining } => {
            Some(format!("New day {}: {} available", date, fmt(remaining)))
        }
        BudgetEvent::BudgetRescaled {
            new_limit,
            remaining,
            ..
        } => Some(format!(
            "Limit is now {}: {} left",
            fmt(new_limit),
            fmt(remaining)
        )),
        BudgetEvent::InputChanged { .. } | BudgetEvent::TagChanged { .. } => None,
    }
}

/// Settings listing
pub fn format_settings(settings: &Settings) -> String {
    format!(
        "Daily limit:       {}\n\
         Currency:          {}\n\
         Haptics:           {}\n\
         Warning threshold: {:.0}%\n",
        settings.daily_limit.format_with_code(&settings.currency_code),
        settings.currency_code,
        if settings.haptics_enabled { "on" } else { "off" },
        settings.warning_threshold * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tag;
    use chrono::NaiveDate;

    #[test]
    fn test_meter() {
        assert_eq!(format_meter(1.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(format_meter(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(format_meter(0.25), format!("[{}{}]", "#".repeat(5), "-".repeat(15)));
        assert_eq!(format_meter(-3.0), format_meter(0.0));
    }

    #[test]
    fn test_expense_notification() {
        let event = BudgetEvent::ExpenseConfirmed {
            amount: Money::from_cents(350),
            tag: Tag::from_input("Coffee"),
            remaining: Money::from_cents(9650),
        };
        assert_eq!(
            format_event(&event, "USD").unwrap(),
            "✓ Spent USD 3.50 on Coffee (USD 96.50 left)"
        );

        let untagged = BudgetEvent::ExpenseConfirmed {
            amount: Money::from_cents(350),
            tag: Tag::unset(),
            remaining: Money::from_cents(9650),
        };
        assert_eq!(
            format_event(&untagged, "USD").unwrap(),
            "✓ Spent USD 3.50 (USD 96.50 left)"
        );
    }

    #[test]
    fn test_quiet_events() {
        let event = BudgetEvent::InputChanged { buffer: "4".into() };
        assert!(format_event(&event, "USD").is_none());

        let reset = BudgetEvent::BudgetReset {
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            remaining: Money::from_cents(10000),
        };
        assert_eq!(
            format_event(&reset, "EUR").unwrap(),
            "New day 2025-01-02: EUR 100.00 available"
        );
    }

    #[test]
    fn test_settings_listing() {
        let text = format_settings(&Settings::default());
        assert!(text.contains("USD 100.00"));
        assert!(text.contains("Haptics:           on"));
        assert!(text.contains("25%"));
    }
}
