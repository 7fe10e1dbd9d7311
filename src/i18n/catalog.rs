// SPDX-License-Identifier: MPL-2.0
//! Locale catalog: per-language tables of dot-delimited keys.
//!
//! Tables are TOML documents named `<code>.toml`. Nested tables flatten
//! into dot-delimited keys, so
//!
//! ```toml
//! [settings]
//! language = "Language"
//! ```
//!
//! defines `settings.language`. The built-in tables are embedded from
//! `assets/i18n/`; a directory passed at startup can add or replace keys.
//!
//! # Failure Modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Table file for an undescribed code | Skipped with a warning |
//! | Unparsable table | Skipped with a warning |
//! | Array value | Key skipped with a warning |
//! | Number / boolean / datetime value | Stored as its TOML text |

use super::code::LanguageCode;
use crate::config::DEFAULT_LANGUAGE;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const TABLE_EXTENSION: &str = ".toml";

/// A selectable language as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    pub code: &'static str,
    /// English name of the language.
    pub name: &'static str,
    /// Name of the language in the language itself.
    pub native_name: &'static str,
}

/// All languages the application ships, in display order.
pub const LANGUAGES: &[LanguageDescriptor] = &[
    LanguageDescriptor {
        code: "en",
        name: "English",
        native_name: "English",
    },
    LanguageDescriptor {
        code: "es",
        name: "Spanish",
        native_name: "Español",
    },
];

/// Looks up the descriptor for `code`.
pub fn descriptor(code: &str) -> Option<&'static LanguageDescriptor> {
    LANGUAGES.iter().find(|d| d.code == code)
}

/// Flat key → template mapping for one language.
pub type Table = HashMap<String, String>;

/// Immutable set of translation tables plus the default language.
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    tables: HashMap<LanguageCode, Table>,
    default_language: LanguageCode,
}

impl Default for LocaleCatalog {
    fn default() -> Self {
        Self::embedded()
    }
}

impl LocaleCatalog {
    /// Creates an empty catalog whose fallback language is `default_language`.
    #[must_use]
    pub fn new(default_language: LanguageCode) -> Self {
        Self {
            tables: HashMap::new(),
            default_language,
        }
    }

    /// Builds the catalog from the tables embedded in the binary.
    #[must_use]
    pub fn embedded() -> Self {
        let mut catalog = Self::new(LanguageCode::from_static(DEFAULT_LANGUAGE));

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            catalog.merge_file(filename, &String::from_utf8_lossy(content.data.as_ref()));
        }

        catalog
    }

    /// Builds the embedded catalog, then overlays every table found in
    /// `dir`. Keys from the directory replace embedded ones.
    #[must_use]
    pub fn load(dir: Option<&Path>) -> Self {
        let mut catalog = Self::embedded();
        if let Some(dir) = dir {
            catalog.merge_dir(dir);
        }
        catalog
    }

    fn merge_dir(&mut self, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "cannot read translation directory");
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !filename.ends_with(TABLE_EXTENSION) {
                continue;
            }
            match fs::read_to_string(&path) {
                Ok(content) => self.merge_file(filename, &content),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "cannot read translation table");
                }
            }
        }
    }

    fn merge_file(&mut self, filename: &str, content: &str) {
        let Some(stem) = filename.strip_suffix(TABLE_EXTENSION) else {
            return;
        };
        let code = match LanguageCode::parse(stem) {
            Ok(code) => code,
            Err(err) => {
                tracing::warn!(file = filename, error = %err, "translation table has no valid language code");
                return;
            }
        };
        if descriptor(code.as_str()).is_none() {
            tracing::warn!(file = filename, "no descriptor for language '{code}', table skipped");
            return;
        }
        if let Err(err) = self.insert_toml(code, content) {
            tracing::warn!(file = filename, error = %err, "failed to parse translation table");
        }
    }

    /// Parses a TOML document and merges its flattened keys into `code`'s table.
    pub fn insert_toml(&mut self, code: LanguageCode, content: &str) -> Result<()> {
        let document: toml::Table = toml::from_str(content)?;
        let table = self.tables.entry(code).or_default();
        flatten_into("", &document, table);
        Ok(())
    }

    /// Merges already flat `key → template` pairs into `code`'s table.
    pub fn insert_table(&mut self, code: LanguageCode, entries: Table) {
        self.tables.entry(code).or_default().extend(entries);
    }

    /// Returns the raw template for `key` in `code`, without fallback.
    #[must_use]
    pub fn get(&self, code: &LanguageCode, key: &str) -> Option<&str> {
        self.tables
            .get(code)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Language whose table defines the canonical key set.
    #[must_use]
    pub fn default_language(&self) -> &LanguageCode {
        &self.default_language
    }

    /// Whether `code` has a table.
    #[must_use]
    pub fn is_supported(&self, code: &LanguageCode) -> bool {
        self.tables.contains_key(code)
    }

    /// Descriptors of every language with a table, in display order.
    #[must_use]
    pub fn languages(&self) -> Vec<&'static LanguageDescriptor> {
        LANGUAGES
            .iter()
            .filter(|d| self.tables.contains_key(&LanguageCode::from_static(d.code)))
            .collect()
    }

    /// Keys of the default table, which every other table may override.
    pub fn canonical_keys(&self) -> impl Iterator<Item = &str> {
        self.tables
            .get(&self.default_language)
            .into_iter()
            .flat_map(|table| table.keys().map(String::as_str))
    }

    /// Canonical keys that `code` does not translate, sorted.
    #[must_use]
    pub fn missing_keys(&self, code: &LanguageCode) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .canonical_keys()
            .filter(|key| self.get(code, key).is_none())
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Checks that every descriptor has a table and the default table exists.
    pub fn validate(&self) -> Result<()> {
        let absent: Vec<&str> = LANGUAGES
            .iter()
            .map(|d| d.code)
            .filter(|code| !self.tables.contains_key(&LanguageCode::from_static(code)))
            .collect();

        if !absent.is_empty() {
            return Err(Error::Config(format!(
                "missing translation tables for: {}",
                absent.join(", ")
            )));
        }
        if !self.tables.contains_key(&self.default_language) {
            return Err(Error::Config(format!(
                "default language '{}' has no table",
                self.default_language
            )));
        }
        Ok(())
    }
}

fn flatten_into(prefix: &str, source: &toml::Table, out: &mut Table) {
    for (name, value) in source {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::String(template) => {
                out.insert(key, template.clone());
            }
            toml::Value::Table(nested) => flatten_into(&key, nested, out),
            toml::Value::Array(_) => {
                tracing::warn!(key = %key, "array values are not translatable, skipped");
            }
            other => {
                out.insert(key, other.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn code(tag: &str) -> LanguageCode {
        LanguageCode::parse(tag).expect("valid tag")
    }

    #[test]
    fn descriptor_codes_are_unique() {
        for (i, a) in LANGUAGES.iter().enumerate() {
            for b in &LANGUAGES[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }

    #[test]
    fn embedded_catalog_covers_every_descriptor() {
        let catalog = LocaleCatalog::embedded();
        catalog.validate().expect("embedded tables are complete");
        assert_eq!(catalog.languages().len(), LANGUAGES.len());
    }

    #[test]
    fn embedded_spanish_translates_every_canonical_key() {
        let catalog = LocaleCatalog::embedded();
        assert!(catalog.missing_keys(&code("es")).is_empty());
    }

    #[test]
    fn nested_tables_flatten_into_dot_keys() {
        let mut catalog = LocaleCatalog::new(code("en"));
        catalog
            .insert_toml(
                code("en"),
                "[settings]\nlanguage = \"Language\"\n[settings.advanced]\nreset = \"Reset\"\n",
            )
            .unwrap();

        assert_eq!(catalog.get(&code("en"), "settings.language"), Some("Language"));
        assert_eq!(catalog.get(&code("en"), "settings.advanced.reset"), Some("Reset"));
        assert_eq!(catalog.get(&code("en"), "settings"), None);
    }

    #[test]
    fn scalar_leaves_are_stringified_and_arrays_skipped() {
        let mut catalog = LocaleCatalog::new(code("en"));
        catalog
            .insert_toml(code("en"), "limit = 3\nenabled = true\nlist = [\"a\"]\n")
            .unwrap();

        assert_eq!(catalog.get(&code("en"), "limit"), Some("3"));
        assert_eq!(catalog.get(&code("en"), "enabled"), Some("true"));
        assert_eq!(catalog.get(&code("en"), "list"), None);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let mut catalog = LocaleCatalog::new(code("en"));
        let result = catalog.insert_toml(code("en"), "[broken");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn validate_reports_missing_tables() {
        let mut catalog = LocaleCatalog::new(code("en"));
        catalog.insert_table(code("en"), Table::from([("a".into(), "A".into())]));

        match catalog.validate() {
            Err(Error::Config(message)) => assert!(message.contains("es")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_keys_lists_untranslated_canonical_keys() {
        let mut catalog = LocaleCatalog::new(code("en"));
        catalog.insert_table(
            code("en"),
            Table::from([("b".into(), "B".into()), ("a".into(), "A".into())]),
        );
        catalog.insert_table(code("es"), Table::from([("a".into(), "Á".into())]));

        assert_eq!(catalog.missing_keys(&code("es")), vec!["b"]);
    }

    #[test]
    fn directory_overlay_replaces_embedded_keys() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("es.toml"), "[common]\nclose = \"Salir\"\n").unwrap();
        fs::write(dir.path().join("readme.txt"), "ignored").unwrap();

        let catalog = LocaleCatalog::load(Some(dir.path()));

        assert_eq!(catalog.get(&code("es"), "common.close"), Some("Salir"));
        // Keys absent from the overlay keep their embedded value.
        assert!(catalog.get(&code("es"), "settings.language").is_some());
    }

    #[test]
    fn directory_overlay_skips_undescribed_languages() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("fr.toml"), "[common]\nclose = \"Fermer\"\n").unwrap();

        let catalog = LocaleCatalog::load(Some(dir.path()));

        assert!(!catalog.is_supported(&code("fr")));
    }

    #[test]
    fn unreadable_directory_keeps_embedded_tables() {
        let dir = tempdir().expect("failed to create temp dir");
        let catalog = LocaleCatalog::load(Some(&dir.path().join("absent")));
        catalog.validate().expect("embedded tables remain");
    }
}
