// SPDX-License-Identifier: MPL-2.0
//! Key resolution with language fallback and `{{name}}` interpolation.
//!
//! # Invariants
//!
//! 1. **Never fails**: a key missing everywhere resolves to itself, which
//!    makes missing translations visible without breaking the UI.
//! 2. **Pure**: output depends only on the arguments.
//! 3. **Single pass**: substituted values are not scanned for placeholders.

use super::catalog::LocaleCatalog;
use super::code::LanguageCode;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Resolves `key` for `active`, falling back to the default language and
/// finally to the key itself.
#[must_use]
pub fn resolve(
    catalog: &LocaleCatalog,
    key: &str,
    active: &LanguageCode,
    params: &[(&str, &str)],
) -> String {
    match lookup(catalog, key, active) {
        Some(template) => interpolate(template, params),
        None => key.to_string(),
    }
}

/// Returns the template that `resolve` would use, if any.
#[must_use]
pub fn lookup<'a>(catalog: &'a LocaleCatalog, key: &str, active: &LanguageCode) -> Option<&'a str> {
    catalog
        .get(active, key)
        .or_else(|| catalog.get(catalog.default_language(), key))
}

/// Replaces `{{name}}` placeholders with matching `params`.
///
/// Placeholders without a value stay literal, whitespace inside the braces is
/// ignored, and values are inserted as-is (no escaping).
#[must_use]
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() || !template.contains(OPEN) {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            // Unterminated placeholder: copy the remainder untouched.
            out.push_str(&rest[start..]);
            return out;
        };

        let name = after_open[..end].trim();
        match params.iter().find(|(param, _)| *param == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]),
        }
        rest = &after_open[end + CLOSE.len()..];
    }

    out.push_str(rest);
    out
}
