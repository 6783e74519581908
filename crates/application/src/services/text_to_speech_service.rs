//! Text-to-speech service - Translate text and speak it in the target language
//!
//! Workflow:
//! 1. Validate the submitted text
//! 2. Translate it into the target language (never fails)
//! 3. Synthesize the translated text
//! 4. Persist the audio as a temporary artifact and read it back
//! 5. Remove the artifact and return the audio bytes

use std::{fmt, sync::Arc};

use domain::{ArtifactName, LanguageTag, SpeechText, TranslationResult};
use tracing::{debug, info, instrument};

use super::{TranslationService, artifacts::release_artifacts};
use crate::{
    error::ApplicationError,
    ports::{ArtifactStorePort, SpeechSynthesisPort},
};

/// Synthesized speech ready to be sent to the client
#[derive(Debug, Clone)]
pub struct SynthesizedSpeech {
    /// MP3 audio bytes
    pub audio: Vec<u8>,
    /// File name offered to the client
    pub download_name: &'static str,
    /// MIME type of `audio`
    pub content_type: &'static str,
    /// Translation that was spoken
    pub translation: TranslationResult,
}

/// Service for the text-to-speech pipeline
pub struct TextToSpeechService {
    translation: Arc<TranslationService>,
    synthesizer: Arc<dyn SpeechSynthesisPort>,
    store: Arc<dyn ArtifactStorePort>,
}

impl fmt::Debug for TextToSpeechService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextToSpeechService")
            .field("translation", &self.translation)
            .finish_non_exhaustive()
    }
}

impl TextToSpeechService {
    /// Create a new text-to-speech service
    pub fn new(
        translation: Arc<TranslationService>,
        synthesizer: Arc<dyn SpeechSynthesisPort>,
        store: Arc<dyn ArtifactStorePort>,
    ) -> Self {
        Self {
            translation,
            synthesizer,
            store,
        }
    }

    /// Translate `raw_text` into `target` and synthesize it
    ///
    /// # Errors
    ///
    /// Returns a domain error for empty or oversized text before any
    /// external call, `SynthesisFailed` when the synthesizer fails and
    /// `Storage` when the audio artifact cannot be written or read.
    #[instrument(skip_all, fields(text_len = raw_text.len(), target = %target))]
    pub async fn synthesize(
        &self,
        raw_text: &str,
        target: &LanguageTag,
    ) -> Result<SynthesizedSpeech, ApplicationError> {
        let text = SpeechText::parse(raw_text)?;

        let translation = self.translation.translate(text.as_str(), target).await;
        debug!(
            detected = translation.detected_language_or_unknown(),
            "Synthesizing translated text"
        );

        let audio = self
            .synthesizer
            .synthesize(&translation.translated_text, target)
            .await
            .map_err(as_synthesis_error)?;

        let name = ArtifactName::for_synthesis();
        let path = self.store.persist(&name, &audio).await?;
        let read_back = self.store.read(&path).await;
        release_artifacts(self.store.as_ref(), &[path]).await;
        let audio = read_back?;

        info!(audio_bytes = audio.len(), "Speech synthesized");

        Ok(SynthesizedSpeech {
            audio,
            download_name: ArtifactName::SYNTHESIS_OUTPUT,
            content_type: "audio/mpeg",
            translation,
        })
    }
}

fn as_synthesis_error(err: ApplicationError) -> ApplicationError {
    match err {
        ApplicationError::SynthesisFailed(_) => err,
        other => ApplicationError::SynthesisFailed(other.to_string()),
    }
}
