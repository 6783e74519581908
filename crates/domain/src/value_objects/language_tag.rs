//! Language tag value object
//!
//! A short code identifying a language, shared by the translation,
//! synthesis and recognition backends (e.g. "en", "hi", "zh-CN").

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Maximum length of a language tag
const MAX_TAG_LEN: usize = 16;

/// A validated language tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Tag used when a request does not name a language
    pub const DEFAULT: &'static str = "en";

    /// Parse a language tag from form input
    ///
    /// Surrounding whitespace is ignored and an empty value falls back to
    /// [`LanguageTag::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLanguageTag` if the tag is too long or
    /// contains anything besides ASCII letters, digits, `-` and `_`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let tag = raw.trim();
        if tag.is_empty() {
            return Ok(Self::default());
        }

        let valid_chars = tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if tag.len() > MAX_TAG_LEN || !valid_chars {
            return Err(DomainError::InvalidLanguageTag(raw.to_string()));
        }

        Ok(Self(tag.to_string()))
    }

    /// Parse an optional form field, defaulting when it is absent
    pub fn parse_or_default(raw: Option<&str>) -> Result<Self, DomainError> {
        raw.map_or_else(|| Ok(Self::default()), Self::parse)
    }

    /// Get the tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison with a tag reported by a backend
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
