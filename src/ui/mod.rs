// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`settings`] - Settings screen hosting the language switcher
//! - [`language_switcher`] - Language button and animated bottom sheet
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod language_switcher;
pub mod settings;
pub mod styles;
