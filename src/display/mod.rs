//! Display formatting for terminal output

pub mod budget;
pub mod history;

pub use budget::{format_event, format_keypad_line, format_meter, format_settings, format_status};
pub use history::format_history;
