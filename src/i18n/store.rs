// SPDX-License-Identifier: MPL-2.0
//! Persistence of the chosen language across restarts.

use super::code::LanguageCode;
use crate::config;
use crate::error::Result;
use std::path::PathBuf;

/// Where the active language is written after each successful change.
pub trait PreferenceStore {
    fn save_language(&mut self, code: &LanguageCode) -> Result<()>;
}

/// Writes `[general] language` into `settings.toml`.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    base_dir: Option<PathBuf>,
}

impl ConfigStore {
    /// Store backed by the resolved application config directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store backed by `settings.toml` inside `base_dir`.
    #[must_use]
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir: Some(base_dir),
        }
    }
}

impl PreferenceStore for ConfigStore {
    fn save_language(&mut self, code: &LanguageCode) -> Result<()> {
        // Reload so sections written by other code paths survive.
        let (mut settings, _warning) = config::load_with_override(self.base_dir.clone());
        if settings.general.language.as_deref() == Some(code.as_str()) {
            return Ok(());
        }
        settings.general.language = Some(code.to_string());
        config::save_with_override(&settings, self.base_dir.clone())
    }
}

/// Keeps the last saved language in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    language: Option<LanguageCode>,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last language saved, if any.
    #[must_use]
    pub fn language(&self) -> Option<&LanguageCode> {
        self.language.as_ref()
    }

    /// Number of successful saves.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl PreferenceStore for MemoryStore {
    fn save_language(&mut self, code: &LanguageCode) -> Result<()> {
        self.language = Some(code.clone());
        self.saves += 1;
        Ok(())
    }
}
