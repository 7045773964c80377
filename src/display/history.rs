//! Expense history formatting

use crate::ledger::ExpenseEntry;
use crate::models::Money;

/// Truncate a string to `max` characters, ending with "…" when cut
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

const DATE_WIDTH: usize = 10;
const TIME_WIDTH: usize = 5;
const TAG_WIDTH: usize = 20;
const AMOUNT_WIDTH: usize = 12;

/// Full row width: five columns separated by single spaces
const RULE_WIDTH: usize = DATE_WIDTH + TIME_WIDTH + TAG_WIDTH + 2 * AMOUNT_WIDTH + 4;

fn push_row(output: &mut String, date: &str, time: &str, tag: &str, amount: &str, left: &str) {
    output.push_str(&format!(
        "{:dw$} {:tw$} {:gw$} {:>aw$} {:>aw$}\n",
        date,
        time,
        tag,
        amount,
        left,
        dw = DATE_WIDTH,
        tw = TIME_WIDTH,
        gw = TAG_WIDTH,
        aw = AMOUNT_WIDTH
    ));
}

fn push_rule(output: &mut String) {
    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');
}

/// Format expenses as a register with a total line
pub fn format_history(entries: &[ExpenseEntry], currency_code: &str) -> String {
    if entries.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    push_row(&mut output, "Date", "Time", "Tag", "Amount", "Left");
    push_rule(&mut output);

    for entry in entries {
        let local_time = entry.timestamp.with_timezone(&chrono::Local);
        push_row(
            &mut output,
            &entry.date.format("%Y-%m-%d").to_string(),
            &local_time.format("%H:%M").to_string(),
            &truncate(entry.tag_display(), TAG_WIDTH),
            &entry.amount.to_string(),
            &entry.remaining_after.to_string(),
        );
    }

    let total: Money = entries.iter().map(|e| e.amount).sum();
    push_rule(&mut output);
    output.push_str(&format!(
        "{} expense(s), total {}\n",
        entries.len(),
        total.format_with_code(currency_code)
    ));

    output
}
