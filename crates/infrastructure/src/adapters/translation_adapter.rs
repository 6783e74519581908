//! Translation adapter - Implements TranslationPort using ai_speech

use std::sync::Arc;

use ai_speech::{GoogleTranslateClient, SpeechConfig, SpeechError, Translator};
use application::error::ApplicationError;
use application::ports::{Translation, TranslationPort};
use async_trait::async_trait;
use domain::LanguageTag;
use tracing::{debug, instrument};

/// Adapter for a machine-translation engine
pub struct TranslationAdapter {
    translator: Arc<dyn Translator>,
}

impl std::fmt::Debug for TranslationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationAdapter")
            .field("translator", &"dyn Translator")
            .finish()
    }
}

impl TranslationAdapter {
    /// Create an adapter over any `Translator`
    #[must_use]
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    /// Create an adapter backed by the Google Translate web client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn google(config: &SpeechConfig) -> Result<Self, ApplicationError> {
        let client = GoogleTranslateClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }

    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            other => ApplicationError::Translation(other.to_string()),
        }
    }
}

#[async_trait]
impl TranslationPort for TranslationAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn detect(&self, text: &str) -> Result<String, ApplicationError> {
        self.translator.detect(text).await.map_err(Self::map_error)
    }

    #[instrument(skip_all, fields(text_len = text.len(), source = %source, target = %target))]
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &LanguageTag,
    ) -> Result<Translation, ApplicationError> {
        let translated = self
            .translator
            .translate(text, source, target.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(
            translated_len = translated.text.len(),
            has_pronunciation = translated.pronunciation.is_some(),
            "Translation complete"
        );

        let translation = Translation::new(translated.text);
        Ok(match translated.pronunciation {
            Some(pronunciation) => translation.with_pronunciation(pronunciation),
            None => translation,
        })
    }
}
