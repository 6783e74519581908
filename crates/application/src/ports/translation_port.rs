//! Translation port - Interface for language detection and machine translation

use async_trait::async_trait;
use domain::LanguageTag;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Text returned by a translation backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Translated text
    pub text: String,
    /// Latin-script pronunciation of the translated text, if the backend has one
    pub pronunciation: Option<String>,
}

impl Translation {
    /// Create a translation without pronunciation
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pronunciation: None,
        }
    }

    /// Attach a pronunciation
    #[must_use]
    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = Some(pronunciation.into());
        self
    }
}

/// Port for a machine-translation backend
///
/// Implementations make exactly one backend call per method and never retry;
/// retries belong to the translation service.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranslationPort: Send + Sync {
    /// Detect the language of `text`, returning its language code
    async fn detect(&self, text: &str) -> Result<String, ApplicationError>;

    /// Translate `text` from `source` into `target`
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &LanguageTag,
    ) -> Result<Translation, ApplicationError>;
}
