//! Interactive keypad session
//!
//! A line-oriented stand-in for the on-screen keypad. Each input line is one
//! gesture: digits and '.' are key presses, `<` is backspace, `c` is the
//! long-press clear, `ok` confirms. Rollover is checked before every line,
//! the way the app re-checks whenever it becomes active.

use std::io::{BufRead, Write};

use crate::display::format_keypad_line;
use crate::error::BudgetResult;
use crate::services::{Clock, Tracker};

use super::EventQueue;

const HELP: &str = "\
keys:   0-9 and '.' (several per line are fine), '<' delete, 'c' clear
tag:    tag <text>   (blank clears the tag)
other:  ok | = confirm, s status, ? help, q quit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Gesture {
    Keys(String),
    Delete,
    Clear,
    Tag(String),
    Confirm,
    Status,
    Help,
    Quit,
    Unknown(String),
}

fn parse_gesture(line: &str) -> Gesture {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix("tag") {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Gesture::Tag(rest.to_string());
        }
    }

    match trimmed {
        "" | "s" | "status" => Gesture::Status,
        "<" | "del" => Gesture::Delete,
        "c" | "clear" => Gesture::Clear,
        "ok" | "=" => Gesture::Confirm,
        "?" | "help" => Gesture::Help,
        "q" | "quit" | "exit" => Gesture::Quit,
        keys if keys.chars().all(|c| c.is_ascii_digit() || c == '.') => {
            Gesture::Keys(keys.to_string())
        }
        other => Gesture::Unknown(other.to_string()),
    }
}

/// Run the keypad until `q` or end of input
pub fn run_keypad<R, W>(
    tracker: &mut Tracker<'_>,
    clock: &dyn Clock,
    input: R,
    output: &mut W,
) -> BudgetResult<()>
where
    R: BufRead,
    W: Write,
{
    let queue = EventQueue::attach(&mut tracker.budget);

    writeln!(output, "{}", HELP)?;
    writeln!(output, "{}", format_keypad_line(tracker))?;

    for line in input.lines() {
        let line = line?;

        tracker.budget.check_for_rollover(clock.today())?;

        match parse_gesture(&line) {
            Gesture::Keys(keys) => {
                for key in keys.chars() {
                    tracker.budget.append_digit(key);
                }
            }
            Gesture::Delete => tracker.budget.delete_last_digit(),
            Gesture::Clear => tracker.budget.clear_all_digits(),
            Gesture::Tag(raw) => tracker.budget.update_tag(&raw),
            Gesture::Confirm => {
                if tracker.budget.confirm_expense()?.is_none() {
                    writeln!(output, "Enter an amount first")?;
                }
            }
            Gesture::Status => {}
            Gesture::Help => {
                writeln!(output, "{}", HELP)?;
            }
            Gesture::Quit => break,
            Gesture::Unknown(text) => {
                writeln!(output, "Unknown key '{}' (? for help)", text)?;
            }
        }

        for message in queue.notifications(tracker.settings.currency_code()) {
            writeln!(output, "{}", message)?;
        }
        writeln!(output, "{}", format_keypad_line(tracker))?;
    }

    queue.detach(&mut tracker.budget);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ExpenseLedger;
    use crate::models::Money;
    use crate::services::FixedClock;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn run(tracker: &mut Tracker<'_>, clock: &dyn Clock, script: &str) -> String {
        let mut output = Vec::new();
        run_keypad(tracker, clock, Cursor::new(script.to_string()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_gestures() {
        assert_eq!(parse_gesture("17.86"), Gesture::Keys("17.86".into()));
        assert_eq!(parse_gesture(" < "), Gesture::Delete);
        assert_eq!(parse_gesture("tag Coffee"), Gesture::Tag(" Coffee".into()));
        assert_eq!(parse_gesture("tag"), Gesture::Tag(String::new()));
        assert_eq!(parse_gesture("tagline"), Gesture::Unknown("tagline".into()));
        assert_eq!(parse_gesture("ok"), Gesture::Confirm);
        assert_eq!(parse_gesture(""), Gesture::Status);
        assert_eq!(parse_gesture("x"), Gesture::Unknown("x".into()));
    }

    #[test]
    fn test_session_spends_with_tag() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = ExpenseLedger::new(temp_dir.path().join("expenses.jsonl"));
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(&store, Some(&ledger), day(1)).unwrap();

        let out = run(&mut tracker, &FixedClock(day(1)), "tag Coffee\n3.5\nok\nq\n");

        assert!(out.contains("✓ Spent USD 3.50 on Coffee (USD 96.50 left)"));
        assert_eq!(tracker.budget.state().remaining_budget(), Money::from_cents(9650));
        assert_eq!(ledger.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_session_editing_keys() {
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(&store, None, day(1)).unwrap();

        let out = run(&mut tracker, &FixedClock(day(1)), "12\n<\n.\n.\n25\n");

        assert_eq!(tracker.budget.state().input().as_str(), "1.25");
        assert!(out.contains("1.25"));
    }

    #[test]
    fn test_confirm_without_amount() {
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(&store, None, day(1)).unwrap();

        let out = run(&mut tracker, &FixedClock(day(1)), "ok\n");
        assert!(out.contains("Enter an amount first"));
        assert_eq!(tracker.budget.state().remaining_budget(), Money::from_cents(10000));
    }

    #[test]
    fn test_rollover_during_session() {
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(&store, None, day(1)).unwrap();
        tracker.budget.append_digit('9');
        tracker.budget.confirm_expense().unwrap();

        let out = run(&mut tracker, &FixedClock(day(2)), "s\n");

        assert!(out.contains("New day 2025-01-02"));
        assert_eq!(tracker.budget.state().remaining_budget(), Money::from_cents(10000));
    }
}
