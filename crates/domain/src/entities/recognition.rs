//! Outcome of the speech-to-text pipeline

use serde::{Deserialize, Serialize};

use super::TranslationResult;
use crate::value_objects::LanguageTag;

/// Recognized speech together with its translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionResult {
    /// Transcript produced by the recognizer
    pub original_text: String,
    /// Transcript translated into the target language
    pub translated_text: String,
    /// Transliteration of the translated text, if any
    pub romanized_text: Option<String>,
    /// Language detected by the translation backend
    pub detected_language: Option<String>,
    /// Language requested by the client
    pub target_language: LanguageTag,
}

impl RecognitionResult {
    /// Combine a transcript with its translation
    pub fn new(
        original_text: impl Into<String>,
        translation: TranslationResult,
        target_language: LanguageTag,
    ) -> Self {
        Self {
            original_text: original_text.into(),
            translated_text: translation.translated_text,
            romanized_text: translation.romanized_text,
            detected_language: translation.detected_language,
            target_language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_transcript_and_translation() {
        let translation =
            TranslationResult::translated("नमस्ते", "en", Some("namaste".to_string()));
        let target = LanguageTag::parse("hi").unwrap();
        let result = RecognitionResult::new("hello", translation, target.clone());

        assert_eq!(result.original_text, "hello");
        assert_eq!(result.translated_text, "नमस्ते");
        assert_eq!(result.romanized_text.as_deref(), Some("namaste"));
        assert_eq!(result.detected_language.as_deref(), Some("en"));
        assert_eq!(result.target_language, target);
    }

    #[test]
    fn degraded_translation_keeps_transcript() {
        let result = RecognitionResult::new(
            "hello",
            TranslationResult::degraded("hello"),
            LanguageTag::default(),
        );
        assert_eq!(result.translated_text, "hello");
        assert!(result.detected_language.is_none());
    }
}
