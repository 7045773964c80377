use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use daily_budget::cli::{
    handle_history, handle_reset, handle_settings_command, handle_spend, handle_status,
    run_keypad, SettingsCommands,
};
use daily_budget::config::paths::{DailyBudgetPaths, DATA_DIR_ENV};
use daily_budget::display::format_settings;
use daily_budget::ledger::ExpenseLedger;
use daily_budget::services::{Clock, FixedClock, SystemClock, Tracker};
use daily_budget::storage::open_store;

#[derive(Parser)]
#[command(
    name = "dailybudget",
    version,
    about = "Spend from a daily allowance that refills every morning",
    long_about = "dailybudget keeps one number: what you can still spend today. \
                  Enter expenses on a keypad, watch the budget drain, and get the \
                  full daily limit back on the next calendar day."
)]
struct Cli {
    /// Data directory (defaults to the platform data directory)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, hide = true, value_parser = parse_date)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's remaining budget
    Status,

    /// Spend an amount from today's budget
    Spend {
        /// Amount to spend (e.g., "17.86")
        amount: String,
        /// Label for the expense
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Restore the full daily limit now
    Reset,

    /// List recorded expenses
    History {
        /// Day to list (YYYY-MM-DD, defaults to today)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// List every recorded expense
        #[arg(short, long, conflicts_with = "date")]
        all: bool,
    },

    /// Settings management commands
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Interactive keypad entry
    #[command(alias = "pad")]
    Keypad,

    /// Show current configuration and paths
    Config,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("'{}' is not a date (expected YYYY-MM-DD)", s))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let today = clock.today();

    // Initialize paths and storage
    let paths = DailyBudgetPaths::resolve(cli.data_dir.as_deref())?;
    let store = open_store(&paths)
        .with_context(|| format!("opening store in {}", paths.base_dir().display()))?;
    let ledger = ExpenseLedger::new(paths.ledger_file());

    let mut tracker = Tracker::open(&store, Some(&ledger), today)?;

    match cli.command {
        Some(Commands::Status) | None => {
            handle_status(&tracker)?;
        }
        Some(Commands::Spend { amount, tag }) => {
            handle_spend(&mut tracker, &amount, tag.as_deref())?;
        }
        Some(Commands::Reset) => {
            handle_reset(&mut tracker, today)?;
        }
        Some(Commands::History { date, all }) => {
            handle_history(&tracker, &ledger, date.unwrap_or(today), all)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&mut tracker, cmd)?;
        }
        Some(Commands::Keypad) => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_keypad(&mut tracker, clock.as_ref(), stdin.lock(), &mut stdout)?;
        }
        Some(Commands::Config) => {
            println!("dailybudget Configuration");
            println!("=========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Store file:     {}", paths.store_file().display());
            println!("Expense ledger: {}", paths.ledger_file().display());
            println!();
            println!("Settings:");
            print!("{}", format_settings(tracker.settings.settings()));
        }
    }

    Ok(())
}
