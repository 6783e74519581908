//! Engine client implementations
//!
//! Contains concrete implementations of the `Translator`, `TextToSpeech` and
//! `SpeechToText` traits.

pub mod google_stt;
pub mod google_translate;
pub mod google_tts;

use reqwest::Client;

pub use google_stt::GoogleSpeechRecognizer;
pub use google_translate::GoogleTranslateClient;
pub use google_tts::GoogleTtsClient;

use crate::config::SpeechConfig;
use crate::error::SpeechError;

/// Build an HTTP client with the configured timeouts
pub(crate) fn http_client(config: &SpeechConfig) -> Result<Client, SpeechError> {
    config.validate().map_err(SpeechError::Configuration)?;

    Client::builder()
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| SpeechError::Configuration(format!("Failed to create HTTP client: {e}")))
}

/// Join a base URL and an absolute path without doubling slashes
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        assert_eq!(
            endpoint("https://example.com/", "/translate_tts"),
            "https://example.com/translate_tts"
        );
        assert_eq!(
            endpoint("http://127.0.0.1:8080", "/speech-api/v2/recognize"),
            "http://127.0.0.1:8080/speech-api/v2/recognize"
        );
    }

    #[test]
    fn http_client_rejects_invalid_config() {
        let config = SpeechConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            http_client(&config),
            Err(SpeechError::Configuration(_))
        ));
    }
}
