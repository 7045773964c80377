//! Service layer for daily-budget
//!
//! The service layer puts persistence and notifications around the pure
//! budget state machine and the user settings.

pub mod budget;
pub mod clock;
pub mod events;
pub mod settings;
pub mod tracker;

pub use budget::BudgetManager;
pub use clock::{Clock, FixedClock, SystemClock};
pub use events::{BudgetEvent, EventBus, SettingsEvent, SubscriptionId};
pub use settings::SettingsManager;
pub use tracker::Tracker;
