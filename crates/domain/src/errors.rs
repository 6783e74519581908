//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
///
/// All of these are caused by client input and are detected before any
/// external engine is called.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Text input is empty or whitespace-only
    #[error("Text input cannot be empty.")]
    EmptyInput,

    /// Text input exceeds the character limit
    #[error("Text input exceeds the character limit of {max} characters (got {length}).")]
    InputTooLarge {
        /// Number of characters supplied
        length: usize,
        /// Maximum number of characters accepted
        max: usize,
    },

    /// No audio file was uploaded, or the upload was empty
    #[error("No audio file uploaded.")]
    NoAudioProvided,

    /// Uploaded file is not a supported audio format
    #[error("Invalid file type. Please upload a .wav or .mp3 file.")]
    UnsupportedFormat(String),

    /// Language tag contains characters a backend would not understand
    #[error("Invalid language tag: {0}")]
    InvalidLanguageTag(String),
}

impl DomainError {
    /// Snake-case identifier of the error kind, stable across releases
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InputTooLarge { .. } => "input_too_large",
            Self::NoAudioProvided => "no_audio_provided",
            Self::UnsupportedFormat(_) => "unsupported_format",
            Self::InvalidLanguageTag(_) => "invalid_language_tag",
        }
    }
}
