//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Translation wrapper over the Google adapter, including retry exhaustion
//! - Text-to-speech pipeline over the Google TTS adapter and a real artifact store

use std::sync::Arc;

use ai_speech::SpeechConfig;
use application::{RetryConfig, TextToSpeechService, TranslationService};
use domain::LanguageTag;
use infrastructure::{LocalArtifactStore, SynthesisAdapter, TranslationAdapter};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn speech_config(base_url: &str) -> SpeechConfig {
    SpeechConfig {
        timeout_ms: 5000,
        ..SpeechConfig::with_base_url(base_url)
    }
}

fn translation_service(base_url: &str, max_attempts: u32) -> Arc<TranslationService> {
    let adapter = TranslationAdapter::google(&speech_config(base_url)).unwrap();
    Arc::new(TranslationService::with_retry(
        Arc::new(adapter),
        RetryConfig::new(max_attempts, 10),
    ))
}

async fn mount_detect(server: &MockServer, language: &str) {
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("sl", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            [["ignored", "ignored", null, null, 10]],
            null,
            language
        ])))
        .mount(server)
        .await;
}

// ============================================================================
// Translation Wrapper Tests
// ============================================================================

mod translation_tests {
    use super::*;

    #[tokio::test]
    async fn translates_with_romanization() {
        let server = MockServer::start().await;
        mount_detect(&server, "en").await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .and(query_param("sl", "en"))
            .and(query_param("tl", "hi"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                [["नमस्ते", "Hello", null, null, 10], [null, null, "namaste", null]],
                null,
                "en"
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let service = translation_service(&server.uri(), 3);
        let result = service
            .translate("Hello", &LanguageTag::parse("hi").unwrap())
            .await;

        assert_eq!(result.translated_text, "नमस्ते");
        assert_eq!(result.romanized_text.as_deref(), Some("namaste"));
        assert_eq!(result.detected_language.as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn same_language_skips_translation() {
        let server = MockServer::start().await;
        mount_detect(&server, "en").await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .and(query_param("dt", "rm"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let service = translation_service(&server.uri(), 3);
        let result = service.translate("Hello", &LanguageTag::default()).await;

        assert_eq!(result.translated_text, "Hello");
        assert!(result.romanized_text.is_none());
        assert_eq!(result.detected_language.as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn exhausted_retries_degrade_to_original_text() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(500))
            .expect(2)
            .mount(&server)
            .await;

        let service = translation_service(&server.uri(), 2);
        let result = service
            .translate("Hola", &LanguageTag::parse("en").unwrap())
            .await;

        assert_eq!(result.translated_text, "Hola");
        assert!(result.detected_language.is_none());
        assert!(result.romanized_text.is_none());
    }
}

// ============================================================================
// Text-to-Speech Pipeline Tests
// ============================================================================

mod synthesis_tests {
    use super::*;

    #[tokio::test]
    async fn synthesized_output_is_returned_and_removed() {
        let server = MockServer::start().await;
        mount_detect(&server, "es").await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .and(query_param("dt", "rm"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/translate_tts"))
            .and(query_param("tl", "es"))
            .and(query_param("q", "Hola mundo"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xFB, 0x90, 0x00]))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let store = LocalArtifactStore::open(dir.path()).await.unwrap();
        let synthesizer = SynthesisAdapter::google(&speech_config(&server.uri())).unwrap();

        let service = TextToSpeechService::new(
            translation_service(&server.uri(), 3),
            Arc::new(synthesizer),
            Arc::new(store),
        );

        let speech = service
            .synthesize("  Hola mundo  ", &LanguageTag::parse("es").unwrap())
            .await
            .unwrap();

        assert_eq!(speech.audio, vec![0xFF, 0xFB, 0x90, 0x00]);
        assert_eq!(speech.download_name, "output.mp3");
        assert_eq!(speech.content_type, "audio/mpeg");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
