//! Change notifications
//!
//! Managers emit events to subscribed callbacks after each state change, so
//! a presentation layer can react without the core knowing about it.

use chrono::NaiveDate;

use crate::models::{Money, Tag};

/// Something changed in the budget state
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetEvent {
    /// The keypad entry changed
    InputChanged { buffer: String },
    /// The tag for the next expense changed
    TagChanged { tag: Tag },
    /// An expense was spent from today's budget
    ExpenseConfirmed {
        amount: Money,
        tag: Tag,
        remaining: Money,
    },
    /// The full limit became available again
    BudgetReset { date: NaiveDate, remaining: Money },
    /// The limit changed and the remaining budget was scaled with it
    BudgetRescaled {
        old_limit: Money,
        new_limit: Money,
        remaining: Money,
    },
}

/// Something changed in the settings
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    DailyLimitChanged { old: Money, new: Money },
    CurrencyChanged { code: String },
    HapticsChanged { enabled: bool },
    WarningThresholdChanged { threshold: f64 },
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<E> = Box<dyn FnMut(&E)>;

/// Callback registry for one event type
pub struct EventBus<E> {
    listeners: Vec<(SubscriptionId, Listener<E>)>,
    next_id: u64,
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a callback; it runs for every event emitted after this call
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Deliver an event to every listener, in subscription order
    pub fn emit(&mut self, event: &E) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}
