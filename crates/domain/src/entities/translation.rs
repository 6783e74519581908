//! Outcome of translating a piece of text

use serde::{Deserialize, Serialize};

/// Result of the translation step of either pipeline
///
/// `detected_language` is `None` when no detection happened (blank input)
/// or when translation was degraded after exhausting retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Translated text, or the original text when nothing was translated
    pub translated_text: String,
    /// Source language reported by the translation backend
    pub detected_language: Option<String>,
    /// Transliteration of the translated text into Latin script
    pub romanized_text: Option<String>,
}

impl TranslationResult {
    /// Create a result for an actual translation
    pub fn translated(
        translated_text: impl Into<String>,
        detected_language: impl Into<String>,
        romanized_text: Option<String>,
    ) -> Self {
        Self {
            translated_text: translated_text.into(),
            detected_language: Some(detected_language.into()),
            romanized_text: romanized_text.filter(|r| !r.trim().is_empty()),
        }
    }

    /// Blank input is returned unchanged without calling any backend
    pub fn passthrough(text: impl Into<String>) -> Self {
        Self {
            translated_text: text.into(),
            detected_language: None,
            romanized_text: None,
        }
    }

    /// Text already in the target language
    pub fn untranslated(text: impl Into<String>, detected_language: impl Into<String>) -> Self {
        Self {
            translated_text: text.into(),
            detected_language: Some(detected_language.into()),
            romanized_text: None,
        }
    }

    /// Fallback after every translation attempt failed
    pub fn degraded(text: impl Into<String>) -> Self {
        Self::passthrough(text)
    }

    /// Detected language, or `"unknown"` when none was reported
    pub fn detected_language_or_unknown(&self) -> &str {
        self.detected_language.as_deref().unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translated_keeps_all_fields() {
        let result = TranslationResult::translated("नमस्ते", "en", Some("namaste".to_string()));
        assert_eq!(result.translated_text, "नमस्ते");
        assert_eq!(result.detected_language.as_deref(), Some("en"));
        assert_eq!(result.romanized_text.as_deref(), Some("namaste"));
    }

    #[test]
    fn translated_drops_blank_romanization() {
        let result = TranslationResult::translated("hola", "en", Some("  ".to_string()));
        assert!(result.romanized_text.is_none());
    }

    #[test]
    fn passthrough_has_no_language() {
        let result = TranslationResult::passthrough("   ");
        assert_eq!(result.translated_text, "   ");
        assert!(result.detected_language.is_none());
        assert!(result.romanized_text.is_none());
    }

    #[test]
    fn untranslated_keeps_detection_without_romanization() {
        let result = TranslationResult::untranslated("hello", "en");
        assert_eq!(result.translated_text, "hello");
        assert_eq!(result.detected_language.as_deref(), Some("en"));
        assert!(result.romanized_text.is_none());
    }

    #[test]
    fn degraded_reports_unknown_language() {
        let result = TranslationResult::degraded("hello");
        assert_eq!(result.translated_text, "hello");
        assert_eq!(result.detected_language_or_unknown(), "unknown");
    }
}
