//! Speech processing errors

use thiserror::Error;

/// Errors that can occur while talking to translation and speech engines
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Failed to connect to the engine
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the engine failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Invalid audio format or corrupted data
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    /// The recognizer heard no recognizable speech
    #[error("No speech could be recognized")]
    Unintelligible,

    /// Synthesis failed
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Invalid response from the engine
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout while waiting for the engine
    #[error("Speech processing timeout after {0}ms")]
    Timeout(u64),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Language not supported by the engine
    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Audio processing/conversion failed
    #[error("Audio processing failed: {0}")]
    AudioProcessing(String),
}

impl SpeechError {
    /// Classify a reqwest error, reporting timeouts with the configured limit
    pub fn from_reqwest(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

impl From<hound::Error> for SpeechError {
    fn from(err: hound::Error) -> Self {
        Self::InvalidAudio(err.to_string())
    }
}
