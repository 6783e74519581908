//! Validated text for speech synthesis

use std::fmt;

use crate::errors::DomainError;

/// Text accepted by the text-to-speech pipeline
///
/// Always trimmed, never empty, and at most [`SpeechText::MAX_CHARS`]
/// characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechText(String);

impl SpeechText {
    /// Maximum number of characters accepted for synthesis
    pub const MAX_CHARS: usize = 5000;

    /// Validate raw form input
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyInput` for blank text and
    /// `DomainError::InputTooLarge` when the trimmed text is longer than
    /// [`SpeechText::MAX_CHARS`] characters.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(DomainError::EmptyInput);
        }

        let length = text.chars().count();
        if length > Self::MAX_CHARS {
            return Err(DomainError::InputTooLarge {
                length,
                max: Self::MAX_CHARS,
            });
        }

        Ok(Self(text.to_string()))
    }

    /// Get the text as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpeechText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
