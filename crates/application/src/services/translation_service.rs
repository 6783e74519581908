//! Translation service - Language detection and translation with retries
//!
//! Wraps a [`TranslationPort`] so that callers always get a usable result:
//! a backend that keeps failing degrades to the untranslated input instead
//! of failing the request.

use std::{fmt, sync::Arc};

use domain::{LanguageTag, TranslationResult};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::TranslationPort,
    retry::{RetryConfig, with_retry},
};

/// Service for translating text into a target language
pub struct TranslationService {
    port: Arc<dyn TranslationPort>,
    retry: RetryConfig,
}

impl fmt::Debug for TranslationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationService")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl TranslationService {
    /// Create a translation service with the default retry budget
    pub fn new(port: Arc<dyn TranslationPort>) -> Self {
        Self::with_retry(port, RetryConfig::default())
    }

    /// Create a translation service with a custom retry budget
    pub fn with_retry(port: Arc<dyn TranslationPort>, retry: RetryConfig) -> Self {
        Self { port, retry }
    }

    /// Get the retry configuration
    #[must_use]
    pub const fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Translate `text` into `target`
    ///
    /// Never fails. Blank text is returned unchanged without a backend call.
    /// Text already in the target language is returned unchanged with the
    /// detected language. When every attempt fails the original text is
    /// returned with no detected language.
    #[instrument(skip_all, fields(text_len = text.len(), target = %target))]
    pub async fn translate(&self, text: &str, target: &LanguageTag) -> TranslationResult {
        if text.trim().is_empty() {
            debug!("Blank text, skipping translation");
            return TranslationResult::passthrough(text);
        }

        let outcome = with_retry(&self.retry, || self.attempt(text, target)).await;
        let attempts = outcome.attempts;

        match outcome.into_result() {
            Ok(result) => result,
            Err(err) => {
                let degraded = ApplicationError::TranslationDegraded {
                    attempts,
                    cause: err.to_string(),
                };
                warn!(error = %degraded, "Returning untranslated text");
                TranslationResult::degraded(text)
            },
        }
    }

    /// One detect-then-translate attempt
    async fn attempt(
        &self,
        text: &str,
        target: &LanguageTag,
    ) -> Result<TranslationResult, ApplicationError> {
        let detected = self.port.detect(text).await.map_err(as_translation_error)?;

        if target.matches(&detected) {
            debug!(detected = %detected, "Text already in target language");
            return Ok(TranslationResult::untranslated(text, detected));
        }

        let translation = self
            .port
            .translate(text, &detected, target)
            .await
            .map_err(as_translation_error)?;

        debug!(
            detected = %detected,
            has_pronunciation = translation.pronunciation.is_some(),
            "Translation complete"
        );

        Ok(TranslationResult::translated(
            translation.text,
            detected,
            translation.pronunciation,
        ))
    }
}

/// Any backend failure fails the attempt and is retried
fn as_translation_error(err: ApplicationError) -> ApplicationError {
    match err {
        ApplicationError::Translation(_) => err,
        other => ApplicationError::Translation(other.to_string()),
    }
}
