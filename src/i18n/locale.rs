// SPDX-License-Identifier: MPL-2.0
//! Startup language selection from device locales and explicit requests.

use super::catalog::LocaleCatalog;
use super::code::LanguageCode;

/// Source of the device's ordered locale preferences.
pub trait LocaleProvider {
    /// Locale tags, most preferred first (`"es-MX"`, `"en-US"`, ...).
    fn preferred_locales(&self) -> Vec<String>;
}

/// Reads the operating system's preferred locales.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocales;

impl LocaleProvider for SystemLocales {
    fn preferred_locales(&self) -> Vec<String> {
        sys_locale::get_locales().collect()
    }
}

/// A fixed preference list.
#[derive(Debug, Clone, Default)]
pub struct FixedLocales(pub Vec<String>);

impl FixedLocales {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }
}

impl LocaleProvider for FixedLocales {
    fn preferred_locales(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Picks the first device preference whose language the catalog supports,
/// or the catalog's default language.
#[must_use]
pub fn initialize(preferences: &[String], catalog: &LocaleCatalog) -> LanguageCode {
    preferences
        .iter()
        .filter_map(|tag| LanguageCode::primary(tag).ok())
        .find(|code| catalog.is_supported(code))
        .unwrap_or_else(|| catalog.default_language().clone())
}

/// Resolves the startup language.
///
/// Explicit `requested` codes (CLI flag, then persisted preference) are tried
/// in order, each narrowed to its language subtag when the full tag is not
/// supported (`en-US` → `en`); unusable ones are logged and skipped.
/// Device preferences and the default language follow.
#[must_use]
pub fn resolve_startup_language(
    requested: &[Option<&str>],
    preferences: &[String],
    catalog: &LocaleCatalog,
) -> LanguageCode {
    for tag in requested.iter().flatten() {
        match LanguageCode::parse(tag) {
            Ok(code) if catalog.is_supported(&code) => return code,
            Ok(code) => match LanguageCode::primary(tag) {
                Ok(primary) if catalog.is_supported(&primary) => return primary,
                _ => tracing::warn!("requested language '{code}' is not supported"),
            },
            Err(err) => tracing::warn!(tag = *tag, error = %err, "ignoring requested language"),
        }
    }
    initialize(preferences, catalog)
}
