//! Append-only expense log
//!
//! Each confirmed expense is written as a single JSON line and flushed
//! immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

use super::entry::ExpenseEntry;

/// Writes and reads the JSONL expense log
pub struct ExpenseLedger {
    log_path: PathBuf,
}

impl ExpenseLedger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one expense
    pub fn record(&self, entry: &ExpenseEntry) -> BudgetResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| BudgetError::Ledger(format!("Failed to create directory: {}", e)))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| BudgetError::Ledger(format!("Failed to open expense log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| BudgetError::Json(format!("Failed to serialize expense: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| BudgetError::Ledger(format!("Failed to write expense: {}", e)))?;

        file.flush()
            .map_err(|e| BudgetError::Ledger(format!("Failed to flush expense log: {}", e)))?;

        Ok(())
    }

    /// Read every expense, oldest first
    pub fn read_all(&self) -> BudgetResult<Vec<ExpenseEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| BudgetError::Ledger(format!("Failed to open expense log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                BudgetError::Ledger(format!("Failed to read line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: ExpenseEntry = serde_json::from_str(&line).map_err(|e| {
                BudgetError::Ledger(format!(
                    "Failed to parse expense at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Expenses charged against `date`
    pub fn entries_for(&self, date: NaiveDate) -> BudgetResult<Vec<ExpenseEntry>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|e| e.date == date)
            .collect())
    }

    /// Total spent on `date`
    pub fn total_for(&self, date: NaiveDate) -> BudgetResult<Money> {
        Ok(self.entries_for(date)?.iter().map(|e| e.amount).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tag;
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(day: &str, cents: i64, tag: &str) -> ExpenseEntry {
        ExpenseEntry::new(
            date(day),
            Money::from_cents(cents),
            &Tag::from_input(tag),
            Money::from_cents(10000 - cents),
        )
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = ExpenseLedger::new(temp_dir.path().join("expenses.jsonl"));

        assert!(ledger.read_all().unwrap().is_empty());
        assert!(!temp_dir.path().join("expenses.jsonl").exists());
    }

    #[test]
    fn test_record_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = ExpenseLedger::new(temp_dir.path().join("expenses.jsonl"));

        ledger.record(&entry("2025-01-01", 350, "Coffee")).unwrap();
        ledger.record(&entry("2025-01-01", 1200, "")).unwrap();
        ledger.record(&entry("2025-01-02", 500, "Lunch")).unwrap();

        let all = ledger.read_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].tag.as_deref(), Some("Coffee"));
        assert_eq!(all[1].tag, None);

        assert_eq!(ledger.entries_for(date("2025-01-01")).unwrap().len(), 2);
        assert_eq!(ledger.total_for(date("2025-01-01")).unwrap(), Money::from_cents(1550));
        assert_eq!(ledger.total_for(date("2025-01-03")).unwrap(), Money::zero());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.jsonl");
        let ledger = ExpenseLedger::new(path.clone());

        ledger.record(&entry("2025-01-01", 100, "a")).unwrap();
        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file).unwrap();
        ledger.record(&entry("2025-01-01", 200, "b")).unwrap();

        assert_eq!(ledger.read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_corrupt_line_names_line_number() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.jsonl");
        let ledger = ExpenseLedger::new(path.clone());

        ledger.record(&entry("2025-01-01", 100, "a")).unwrap();
        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file, "{{broken").unwrap();

        let err = ledger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
