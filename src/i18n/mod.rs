// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! # Features
//!
//! - Per-language TOML tables with dot-delimited keys, embedded at build time
//! - Startup language from CLI, persisted preference, or device locales
//! - Runtime language switching with synchronous change notification
//! - Fallback to the default language, then to the raw key

pub mod catalog;
pub mod code;
pub mod locale;
pub mod resolver;
pub mod service;
pub mod store;

pub use catalog::{LanguageDescriptor, LocaleCatalog, LANGUAGES};
pub use code::LanguageCode;
pub use locale::{FixedLocales, LocaleProvider, SystemLocales};
pub use service::{LanguageService, SubscriptionId};
pub use store::{ConfigStore, MemoryStore, PreferenceStore};
