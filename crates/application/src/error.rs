//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (invalid client input)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Uploaded audio could not be transcoded to WAV
    #[error("Audio conversion failed: {0}")]
    AudioConversionFailed(String),

    /// Audio could not be decoded into a sample buffer
    #[error("Could not read the audio file: {0}")]
    AudioDecodeFailed(String),

    /// The recognizer returned no usable transcript
    #[error("Could not understand the audio.")]
    UnintelligibleAudio,

    /// The recognizer could not be reached or failed
    #[error("Speech recognition API error: {0}")]
    RecognitionServiceError(String),

    /// The synthesizer failed to produce audio
    #[error("Speech synthesis failed: {0}")]
    SynthesisFailed(String),

    /// A single translation backend call failed
    #[error("Translation error: {0}")]
    Translation(String),

    /// All translation attempts failed; only ever logged
    #[error("Translation degraded after {attempts} attempts: {cause}")]
    TranslationDegraded {
        /// Number of attempts made
        attempts: u32,
        /// Error of the last attempt
        cause: String,
    },

    /// Temporary audio storage failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    ///
    /// Only single translation calls are retried; every other failure is
    /// reported immediately.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Translation(_))
    }

    /// Check if this error was caused by the client
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::UnintelligibleAudio)
    }

    /// Snake-case identifier of the error kind
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Domain(err) => err.kind(),
            Self::AudioConversionFailed(_) => "audio_conversion_failed",
            Self::AudioDecodeFailed(_) => "audio_decode_failed",
            Self::UnintelligibleAudio => "unintelligible_audio",
            Self::RecognitionServiceError(_) => "recognition_service_error",
            Self::SynthesisFailed(_) => "synthesis_failed",
            Self::Translation(_) => "translation_error",
            Self::TranslationDegraded { .. } => "translation_degraded",
            Self::Storage(_) => "storage_error",
            Self::Configuration(_) => "configuration_error",
        }
    }
}
