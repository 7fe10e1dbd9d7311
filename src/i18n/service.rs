// SPDX-License-Identifier: MPL-2.0
//! The active-language service.
//!
//! One `LanguageService` is created at startup and owned by the application
//! root; components borrow it to translate, and only the language switcher
//! borrows it mutably to call [`LanguageService::change`].
//!
//! # Change notification
//!
//! Listeners registered with [`LanguageService::subscribe`] are called
//! synchronously, exactly once per accepted `change`, before `change`
//! returns. Re-selecting the active language is accepted and notifies too.
//! Rejected changes (malformed or unsupported codes) notify nobody. The
//! order in which listeners run is unspecified.

use super::catalog::{self, LanguageDescriptor, LocaleCatalog};
use super::code::LanguageCode;
use super::locale::{self, LocaleProvider};
use super::resolver;
use super::store::PreferenceStore;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;

/// Callback invoked with the active language after each accepted change.
pub type Listener = Box<dyn FnMut(&LanguageCode)>;

/// Handle returned by [`LanguageService::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct LanguageService {
    catalog: LocaleCatalog,
    current: LanguageCode,
    store: Box<dyn PreferenceStore>,
    listeners: HashMap<SubscriptionId, Listener>,
    next_subscription: u64,
}

impl fmt::Debug for LanguageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageService")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl LanguageService {
    /// Creates the service with the language picked from device preferences.
    pub fn new(
        catalog: LocaleCatalog,
        store: Box<dyn PreferenceStore>,
        provider: &dyn LocaleProvider,
    ) -> Self {
        Self::with_requested(catalog, store, provider, &[])
    }

    /// Creates the service, trying the `requested` codes (CLI flag, persisted
    /// preference) before device preferences.
    pub fn with_requested(
        catalog: LocaleCatalog,
        store: Box<dyn PreferenceStore>,
        provider: &dyn LocaleProvider,
        requested: &[Option<&str>],
    ) -> Self {
        let preferences = provider.preferred_locales();
        let current = locale::resolve_startup_language(requested, &preferences, &catalog);
        tracing::info!(language = %current, "active language initialized");

        Self {
            catalog,
            current,
            store,
            listeners: HashMap::new(),
            next_subscription: 0,
        }
    }

    /// The active language.
    #[must_use]
    pub fn current(&self) -> &LanguageCode {
        &self.current
    }

    /// Selectable languages, in display order.
    #[must_use]
    pub fn languages(&self) -> Vec<&'static LanguageDescriptor> {
        self.catalog.languages()
    }

    /// Native name of `code`, or of the default language when `code` has no
    /// descriptor.
    #[must_use]
    pub fn native_name(&self, code: &LanguageCode) -> &'static str {
        catalog::descriptor(code.as_str())
            .or_else(|| catalog::descriptor(self.catalog.default_language().as_str()))
            .map_or("English", |d| d.native_name)
    }

    /// Translates `key` in the active language.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.tr_with(key, &[])
    }

    /// Translates `key` in the active language, filling `{{name}}` placeholders.
    #[must_use]
    pub fn tr_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let resolved = resolver::resolve(&self.catalog, key, &self.current, params);
        if resolved == key && resolver::lookup(&self.catalog, key, &self.current).is_none() {
            tracing::debug!(key, language = %self.current, "missing translation");
        }
        resolved
    }

    /// Registers a change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&LanguageCode) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.insert(id, Box::new(listener));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Switches the active language, logging instead of returning failures.
    pub fn change(&mut self, code: &str) {
        if let Err(err) = self.try_change(code) {
            tracing::warn!(requested = code, error = %err, "language change rejected");
        }
    }

    /// Switches the active language.
    ///
    /// On success the choice is persisted (a persistence failure is logged
    /// and does not undo the switch) and every listener is notified.
    pub fn try_change(&mut self, code: &str) -> Result<()> {
        let code = LanguageCode::parse(code)?;
        if !self.catalog.is_supported(&code) {
            return Err(Error::UnsupportedLanguage(code.to_string()));
        }

        if code != self.current {
            tracing::info!(from = %self.current, to = %code, "language changed");
            self.current = code;
        }

        if let Err(err) = self.store.save_language(&self.current) {
            tracing::warn!(language = %self.current, error = %err, "failed to persist language");
        }

        for listener in self.listeners.values_mut() {
            listener(&self.current);
        }
        Ok(())
    }
}
