//! Settings manager
//!
//! Owns the user settings, validates changes, writes each change through to
//! the store, and notifies subscribers. Setters return the emitted event so
//! a caller can forward it (a daily limit change must reach the budget).

use tracing::info;

use crate::config::settings::{
    normalize_currency_code, validate_daily_limit, validate_warning_threshold, Settings,
};
use crate::error::BudgetResult;
use crate::models::Money;
use crate::storage::keys;
use crate::storage::{KeyValueStore, StoredValue};

use super::events::{EventBus, SettingsEvent, SubscriptionId};

/// Owner of the user settings
pub struct SettingsManager<'a> {
    store: &'a dyn KeyValueStore,
    settings: Settings,
    events: EventBus<SettingsEvent>,
}

impl<'a> SettingsManager<'a> {
    /// Load settings from the store
    pub fn load(store: &'a dyn KeyValueStore) -> BudgetResult<Self> {
        Ok(Self {
            store,
            settings: Settings::load(store)?,
            events: EventBus::new(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn daily_limit(&self) -> Money {
        self.settings.daily_limit
    }

    pub fn currency_code(&self) -> &str {
        &self.settings.currency_code
    }

    pub fn haptics_enabled(&self) -> bool {
        self.settings.haptics_enabled
    }

    pub fn warning_threshold(&self) -> f64 {
        self.settings.warning_threshold
    }

    /// Register a callback for settings changes
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&SettingsEvent) + 'static,
    {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Change the daily limit
    ///
    /// Rejects non-positive limits. Returns `None` when the limit is unchanged.
    pub fn set_daily_limit(&mut self, limit: Money) -> BudgetResult<Option<SettingsEvent>> {
        let limit = validate_daily_limit(limit)?;
        let old = self.settings.daily_limit;
        if old == limit {
            return Ok(None);
        }

        self.store
            .set(keys::DAILY_BUDGET_LIMIT, StoredValue::Number(limit.as_f64()))?;
        self.settings.daily_limit = limit;
        info!(%old, new = %limit, "daily limit changed");

        Ok(Some(self.emit(SettingsEvent::DailyLimitChanged { old, new: limit })))
    }

    /// Change the display currency (three-letter code, any case)
    pub fn set_currency_code(&mut self, code: &str) -> BudgetResult<Option<SettingsEvent>> {
        let code = normalize_currency_code(code)?;
        if code == self.settings.currency_code {
            return Ok(None);
        }

        self.store
            .set(keys::CURRENCY_CODE, StoredValue::Text(code.clone()))?;
        self.settings.currency_code = code.clone();
        info!(code = %code, "currency changed");

        Ok(Some(self.emit(SettingsEvent::CurrencyChanged { code })))
    }

    pub fn set_haptics_enabled(&mut self, enabled: bool) -> BudgetResult<Option<SettingsEvent>> {
        if enabled == self.settings.haptics_enabled {
            return Ok(None);
        }

        self.store
            .set(keys::HAPTICS_ENABLED, StoredValue::Flag(enabled))?;
        self.settings.haptics_enabled = enabled;
        info!(enabled, "haptics setting changed");

        Ok(Some(self.emit(SettingsEvent::HapticsChanged { enabled })))
    }

    /// Change the critical-band threshold (0.0 to 0.5)
    pub fn set_warning_threshold(&mut self, threshold: f64) -> BudgetResult<Option<SettingsEvent>> {
        let threshold = validate_warning_threshold(threshold)?;
        if threshold == self.settings.warning_threshold {
            return Ok(None);
        }

        self.store
            .set(keys::WARNING_THRESHOLD, StoredValue::Number(threshold))?;
        self.settings.warning_threshold = threshold;
        info!(threshold, "warning threshold changed");

        Ok(Some(self.emit(SettingsEvent::WarningThresholdChanged { threshold })))
    }

    /// Restore every setting to its default
    ///
    /// Returns one event per setting that actually changed.
    pub fn reset_to_defaults(&mut self) -> BudgetResult<Vec<SettingsEvent>> {
        let defaults = Settings::default();
        let changes = [
            self.set_daily_limit(defaults.daily_limit)?,
            self.set_currency_code(&defaults.currency_code)?,
            self.set_haptics_enabled(defaults.haptics_enabled)?,
            self.set_warning_threshold(defaults.warning_threshold)?,
        ];

        Ok(changes.into_iter().flatten().collect())
    }

    fn emit(&mut self, event: SettingsEvent) -> SettingsEvent {
        self.events.emit(&event);
        event
    }
}
