// SPDX-License-Identifier: MPL-2.0
//! `iced_lingua` is a language-preference subsystem built with the Iced GUI
//! framework.
//!
//! It bundles per-language string tables, tracks the active language with
//! synchronous change notification, persists the user's choice, and provides
//! a bottom-sheet language switcher with animated transitions.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
