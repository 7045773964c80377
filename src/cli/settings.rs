//! Settings CLI commands

use clap::{Subcommand, ValueEnum};

use crate::display::format_settings;
use crate::error::BudgetResult;
use crate::services::Tracker;

use super::{parse_amount, EventQueue};

/// On/off switch for boolean settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl From<Switch> for bool {
    fn from(switch: Switch) -> Self {
        matches!(switch, Switch::On)
    }
}

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Set the daily limit; today's remaining budget is rescaled to match
    Limit {
        /// New limit (e.g., "150" or "150.00")
        amount: String,
    },

    /// Set the display currency (three-letter code, e.g. "EUR")
    Currency {
        code: String,
    },

    /// Turn haptic feedback on or off
    Haptics {
        #[arg(value_enum)]
        state: Switch,
    },

    /// Set the warning threshold as a fraction of the limit (0 to 0.5)
    Threshold {
        fraction: f64,
    },

    /// Restore default settings
    Reset,
}

/// Handle a settings command
pub fn handle_settings_command(tracker: &mut Tracker<'_>, cmd: SettingsCommands) -> BudgetResult<()> {
    match cmd {
        SettingsCommands::Show => {
            print!("{}", format_settings(tracker.settings.settings()));
        }

        SettingsCommands::Limit { amount } => {
            let limit = parse_amount(&amount)?;
            let queue = EventQueue::attach(&mut tracker.budget);
            let changed = tracker.set_daily_limit(limit);

            for message in queue.notifications(tracker.settings.currency_code()) {
                println!("{}", message);
            }
            queue.detach(&mut tracker.budget);

            if !changed? {
                println!("Daily limit is already {}", tracker.format(limit));
            }
        }

        SettingsCommands::Currency { code } => {
            if tracker.set_currency_code(&code)? {
                println!("Currency set to {}", tracker.settings.currency_code());
            } else {
                println!("Currency is already {}", tracker.settings.currency_code());
            }
        }

        SettingsCommands::Haptics { state } => {
            let enabled: bool = state.into();
            tracker.set_haptics_enabled(enabled)?;
            println!("Haptics {}", if enabled { "on" } else { "off" });
        }

        SettingsCommands::Threshold { fraction } => {
            tracker.set_warning_threshold(fraction)?;
            println!(
                "Warning threshold set to {:.0}%",
                tracker.settings.warning_threshold() * 100.0
            );
        }

        SettingsCommands::Reset => {
            let changed = tracker.reset_settings()?;
            println!("Restored defaults ({} setting(s) changed)", changed);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn tracker(store: &MemoryStore) -> Tracker<'_> {
        Tracker::open(store, None, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).unwrap()
    }

    #[test]
    fn test_limit_command_rescales() {
        let store = MemoryStore::new();
        let mut tracker = tracker(&store);

        handle_settings_command(&mut tracker, SettingsCommands::Limit { amount: "250".into() })
            .unwrap();
        assert_eq!(tracker.settings.daily_limit(), Money::from_cents(25000));
        assert_eq!(tracker.budget.state().remaining_budget(), Money::from_cents(25000));
    }

    #[test]
    fn test_limit_command_rejects_bad_input() {
        let store = MemoryStore::new();
        let mut tracker = tracker(&store);

        let err = handle_settings_command(&mut tracker, SettingsCommands::Limit { amount: "lots".into() })
            .unwrap_err();
        assert!(err.is_validation());

        let err = handle_settings_command(&mut tracker, SettingsCommands::Limit { amount: "0".into() })
            .unwrap_err();
        assert!(err.is_validation());

        let err = handle_settings_command(
            &mut tracker,
            SettingsCommands::Limit {
                amount: "150.999".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(tracker.settings.daily_limit(), Money::from_cents(10000));
    }

    #[test]
    fn test_switch_conversion() {
        assert!(bool::from(Switch::On));
        assert!(!bool::from(Switch::Off));
    }
}
