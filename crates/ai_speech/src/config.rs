//! Configuration for translation and speech engines

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the translation, synthesis and recognition clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Base URL of the Google Translate web endpoint
    #[serde(default = "default_translate_base_url")]
    pub translate_base_url: String,

    /// Base URL of the Google Translate TTS endpoint
    #[serde(default = "default_tts_base_url")]
    pub tts_base_url: String,

    /// Base URL of the Google Speech API
    #[serde(default = "default_stt_base_url")]
    pub stt_base_url: String,

    /// Optional API key for the speech recognizer
    #[serde(default)]
    pub stt_api_key: Option<String>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Connect timeout in milliseconds
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// FFmpeg binary used for audio conversion
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: String,

    /// Maximum number of characters per TTS request
    #[serde(default = "default_max_tts_chunk_chars")]
    pub max_tts_chunk_chars: usize,

    /// User agent sent to the web endpoints
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_translate_base_url() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_tts_base_url() -> String {
    "https://translate.google.com".to_string()
}

fn default_stt_base_url() -> String {
    "http://www.google.com".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_connect_timeout_ms() -> u64 {
    10000
}

fn default_ffmpeg_path() -> String {
    "ffmpeg".to_string()
}

const fn default_max_tts_chunk_chars() -> usize {
    100
}

fn default_user_agent() -> String {
    concat!("linguavox/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            translate_base_url: default_translate_base_url(),
            tts_base_url: default_tts_base_url(),
            stt_base_url: default_stt_base_url(),
            stt_api_key: None,
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            ffmpeg_path: default_ffmpeg_path(),
            max_tts_chunk_chars: default_max_tts_chunk_chars(),
            user_agent: default_user_agent(),
        }
    }
}

impl SpeechConfig {
    /// Point every engine at a single base URL (mock servers in tests)
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            translate_base_url: base_url.clone(),
            tts_base_url: base_url.clone(),
            stt_base_url: base_url,
            ..Default::default()
        }
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Connect timeout as a `Duration`
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if self.connect_timeout_ms == 0 {
            return Err("Connect timeout must be greater than 0".to_string());
        }

        if self.max_tts_chunk_chars == 0 {
            return Err("TTS chunk size must be greater than 0".to_string());
        }

        if self.ffmpeg_path.trim().is_empty() {
            return Err("FFmpeg path cannot be empty".to_string());
        }

        for (name, url) in [
            ("translate_base_url", &self.translate_base_url),
            ("tts_base_url", &self.tts_base_url),
            ("stt_base_url", &self.stt_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(format!("{name} must be an http(s) URL, got '{url}'"));
            }
        }

        Ok(())
    }
}
