// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::settings;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Settings(settings::Message),
    /// Animation frame while the language sheet is moving.
    Tick(Instant),
    /// Escape was pressed.
    EscapePressed,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional language override (e.g. `es`; `en-US` narrows to `en`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_LINGUA_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory of `<code>.toml` translation tables layered over the
    /// embedded ones.
    pub i18n_dir: Option<String>,
}
