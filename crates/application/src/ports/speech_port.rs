//! Speech ports - Interfaces for speech synthesis and speech recognition

use async_trait::async_trait;
use domain::{AudioBuffer, LanguageTag};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for text-to-speech synthesis
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechSynthesisPort: Send + Sync {
    /// Synthesize `text` spoken in `language`, returning MP3 bytes
    ///
    /// Failures are reported as `ApplicationError::SynthesisFailed`.
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageTag,
    ) -> Result<Vec<u8>, ApplicationError>;
}

/// Port for speech recognition
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechRecognitionPort: Send + Sync {
    /// Transcribe a full mono recording using `language` as the recognition language
    ///
    /// Returns `ApplicationError::UnintelligibleAudio` when no speech was
    /// recognized and `ApplicationError::RecognitionServiceError` when the
    /// recognizer could not be used.
    async fn recognize(
        &self,
        audio: AudioBuffer,
        language: &LanguageTag,
    ) -> Result<String, ApplicationError>;
}
