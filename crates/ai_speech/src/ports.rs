//! Port definitions for translation and speech processing
//!
//! Defines the traits (ports) that engine clients implement.

use async_trait::async_trait;
use domain::AudioBuffer;

use crate::error::SpeechError;
use crate::types::{SynthesizedAudio, TranslatedText};

/// Port for machine translation engines
#[async_trait]
pub trait Translator: Send + Sync {
    /// Detect the language of `text`
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if the engine fails or answers with an
    /// unexpected payload.
    async fn detect(&self, text: &str) -> Result<String, SpeechError>;

    /// Translate `text` from `source` into `target`
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if the engine fails or answers with an
    /// unexpected payload.
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<TranslatedText, SpeechError>;
}

/// Port for Text-to-Speech (TTS) implementations
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to MP3 speech in `language`
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::UnsupportedLanguage` before any request for an
    /// unknown language, or another `SpeechError` if synthesis fails.
    async fn synthesize(&self, text: &str, language: &str)
    -> Result<SynthesizedAudio, SpeechError>;

    /// Check if a language is supported for synthesis
    fn supports_language(&self, language: &str) -> bool;
}

/// Port for Speech-to-Text (STT) implementations
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe a complete mono recording
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Unintelligible` when no speech was recognized,
    /// or another `SpeechError` if the recognizer could not be used.
    async fn transcribe(&self, audio: &AudioBuffer, language: &str)
    -> Result<String, SpeechError>;
}
