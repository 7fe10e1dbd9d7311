// SPDX-License-Identifier: MPL-2.0
//! Validated language codes.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A well-formed BCP 47 language tag in canonical casing (`en`, `es`, `pt-BR`).
///
/// Construction goes through `unic-langid`, so malformed input never makes
/// it into a catalog lookup or the active-language state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Parses a full language tag, keeping region and script subtags.
    pub fn parse(tag: &str) -> Result<Self> {
        let langid = parse_identifier(tag)?;
        Ok(Self(langid.to_string()))
    }

    /// Parses a tag and keeps only its primary language subtag.
    ///
    /// Device locales such as `es-MX` or `fr_CA.UTF-8` reduce to `es` and `fr`.
    pub fn primary(tag: &str) -> Result<Self> {
        let langid = parse_identifier(tag)?;
        Ok(Self(langid.language.as_str().to_string()))
    }

    /// Wraps a compile-time code from the descriptor table.
    pub(crate) fn from_static(code: &'static str) -> Self {
        Self(code.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn parse_identifier(tag: &str) -> Result<LanguageIdentifier> {
    // POSIX locales carry an encoding and modifier (`en_US.UTF-8@euro`).
    let tag = tag.split(['.', '@']).next().unwrap_or_default().trim();
    if tag.is_empty() {
        return Err(Error::Locale("empty language tag".to_string()));
    }
    let langid: LanguageIdentifier = tag.replace('_', "-").parse()?;
    if langid.language.is_empty() {
        return Err(Error::Locale(format!("no language subtag in '{tag}'")));
    }
    Ok(langid)
}

impl FromStr for LanguageCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonicalizes_case() {
        let code = LanguageCode::parse("EN").expect("valid tag");
        assert_eq!(code, "en");
    }

    #[test]
    fn parse_keeps_region() {
        let code = LanguageCode::parse("pt_br").expect("valid tag");
        assert_eq!(code.as_str(), "pt-BR");
    }

    #[test]
    fn primary_drops_region_and_encoding() {
        assert_eq!(LanguageCode::primary("es-MX").unwrap(), "es");
        assert_eq!(LanguageCode::primary("fr_CA.UTF-8").unwrap(), "fr");
        assert_eq!(LanguageCode::primary("de_DE@euro").unwrap(), "de");
    }

    #[test]
    fn malformed_tags_are_rejected() {
        assert!(matches!(LanguageCode::parse(""), Err(Error::Locale(_))));
        assert!(matches!(LanguageCode::parse("   "), Err(Error::Locale(_))));
        assert!(matches!(LanguageCode::parse("not a tag"), Err(Error::Locale(_))));
        assert!(matches!(LanguageCode::parse("x"), Err(Error::Locale(_))));
    }

    #[test]
    fn posix_c_locale_is_rejected() {
        assert!(LanguageCode::primary("C").is_err());
        assert!(LanguageCode::primary("C.UTF-8").is_err());
    }

    #[test]
    fn from_str_matches_parse() {
        let code: LanguageCode = "es".parse().expect("valid tag");
        assert_eq!(code, LanguageCode::parse("es").unwrap());
    }
}
