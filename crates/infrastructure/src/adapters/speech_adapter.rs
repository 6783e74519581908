//! Speech adapters - Implement the synthesis and recognition ports using ai_speech

use std::sync::Arc;

use ai_speech::{
    GoogleSpeechRecognizer, GoogleTtsClient, SpeechConfig, SpeechError, SpeechToText,
    SynthesizedAudio, TextToSpeech,
};
use application::error::ApplicationError;
use application::ports::{SpeechRecognitionPort, SpeechSynthesisPort};
use async_trait::async_trait;
use domain::{AudioBuffer, LanguageTag};
use tracing::{debug, instrument};

/// Adapter for text-to-speech engines
pub struct SynthesisAdapter {
    synthesizer: Arc<dyn TextToSpeech>,
}

impl std::fmt::Debug for SynthesisAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynthesisAdapter")
            .field("synthesizer", &"dyn TextToSpeech")
            .finish()
    }
}

impl SynthesisAdapter {
    /// Create an adapter over any `TextToSpeech` engine
    #[must_use]
    pub fn new(synthesizer: Arc<dyn TextToSpeech>) -> Self {
        Self { synthesizer }
    }

    /// Create an adapter backed by Google Translate TTS
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn google(config: &SpeechConfig) -> Result<Self, ApplicationError> {
        let client = GoogleTtsClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }
}

#[async_trait]
impl SpeechSynthesisPort for SynthesisAdapter {
    #[instrument(skip_all, fields(text_len = text.len(), language = %language))]
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageTag,
    ) -> Result<Vec<u8>, ApplicationError> {
        let audio: SynthesizedAudio = self
            .synthesizer
            .synthesize(text, language.as_str())
            .await
            .map_err(|e| ApplicationError::SynthesisFailed(e.to_string()))?;

        debug!(
            audio_size = audio.data().len(),
            chunks = audio.chunks(),
            "Synthesis complete"
        );
        Ok(audio.into_data())
    }
}

/// Adapter for speech recognition engines
pub struct RecognitionAdapter {
    recognizer: Arc<dyn SpeechToText>,
}

impl std::fmt::Debug for RecognitionAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecognitionAdapter")
            .field("recognizer", &"dyn SpeechToText")
            .finish()
    }
}

impl RecognitionAdapter {
    /// Create an adapter over any `SpeechToText` engine
    #[must_use]
    pub fn new(recognizer: Arc<dyn SpeechToText>) -> Self {
        Self { recognizer }
    }

    /// Create an adapter backed by the Google Speech API
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn google(config: &SpeechConfig) -> Result<Self, ApplicationError> {
        let client = GoogleSpeechRecognizer::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Map recognizer errors onto the two recognition outcomes
    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::Unintelligible => ApplicationError::UnintelligibleAudio,
            other => ApplicationError::RecognitionServiceError(other.to_string()),
        }
    }
}

#[async_trait]
impl SpeechRecognitionPort for RecognitionAdapter {
    #[instrument(skip_all, fields(duration_ms = audio.duration_ms(), language = %language))]
    async fn recognize(
        &self,
        audio: AudioBuffer,
        language: &LanguageTag,
    ) -> Result<String, ApplicationError> {
        let transcript = self
            .recognizer
            .transcribe(&audio, language.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(transcript_len = transcript.len(), "Recognition complete");
        Ok(transcript)
    }
}
