//! Google Speech API v2 recognizer
//!
//! Implements `SpeechToText` on top of the `speech-api/v2/recognize`
//! endpoint used by Chromium. The recording is posted as raw big-endian
//! 16-bit PCM (`audio/l16`) and the answer is newline-delimited JSON, one
//! object per recognition pass:
//!
//! ```text
//! {"result":[]}
//! {"result":[{"alternative":[{"transcript":"hello world","confidence":0.92}],"final":true}],"result_index":0}
//! ```

use async_trait::async_trait;
use domain::AudioBuffer;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{endpoint, http_client};
use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::SpeechToText;

const RECOGNIZE_PATH: &str = "/speech-api/v2/recognize";

/// Google Speech API recognizer implementing `SpeechToText`
#[derive(Clone)]
pub struct GoogleSpeechRecognizer {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout_ms: u64,
}

impl std::fmt::Debug for GoogleSpeechRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleSpeechRecognizer")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}

impl GoogleSpeechRecognizer {
    /// Create a new recognizer
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: &SpeechConfig) -> Result<Self, SpeechError> {
        Ok(Self {
            client: http_client(config)?,
            base_url: config.stt_base_url.clone(),
            api_key: config.stt_api_key.clone().filter(|k| !k.trim().is_empty()),
            timeout_ms: config.timeout_ms,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RecognitionPass {
    #[serde(default)]
    result: Vec<RecognitionEntry>,
}

#[derive(Debug, Deserialize)]
struct RecognitionEntry {
    #[serde(default)]
    alternative: Vec<Alternative>,
}

#[derive(Debug, Deserialize)]
struct Alternative {
    #[serde(default)]
    transcript: String,
}

#[async_trait]
impl SpeechToText for GoogleSpeechRecognizer {
    #[instrument(skip_all, fields(
        duration_ms = audio.duration_ms(),
        sample_rate = audio.sample_rate(),
        language = %language
    ))]
    async fn transcribe(&self, audio: &AudioBuffer, language: &str) -> Result<String, SpeechError> {
        if audio.is_empty() {
            return Err(SpeechError::Unintelligible);
        }

        let mut query = vec![("client", "chromium"), ("lang", language), ("pFilter", "0")];
        if let Some(key) = self.api_key.as_deref() {
            query.push(("key", key));
        }

        let response = self
            .client
            .post(endpoint(&self.base_url, RECOGNIZE_PATH))
            .query(&query)
            .header(
                reqwest::header::CONTENT_TYPE,
                format!("audio/l16; rate={}", audio.sample_rate()),
            )
            .body(audio.to_l16_bytes())
            .send()
            .await
            .map_err(|e| SpeechError::from_reqwest(&e, self.timeout_ms))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SpeechError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::RequestFailed(format!(
                "recognition connection failed: HTTP {status}: {body}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SpeechError::from_reqwest(&e, self.timeout_ms))?;

        let transcript = parse_transcript(&body)?;
        debug!(transcript_len = transcript.len(), "Speech recognized");
        Ok(transcript)
    }
}

/// First non-empty transcript of the first result of any pass
fn parse_transcript(body: &str) -> Result<String, SpeechError> {
    let mut parsed_any = false;

    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let pass: RecognitionPass = serde_json::from_str(line).map_err(|e| {
            SpeechError::InvalidResponse(format!("Failed to parse recognition result: {e}"))
        })?;
        parsed_any = true;

        let transcript = pass
            .result
            .first()
            .and_then(|entry| entry.alternative.first())
            .map(|alt| alt.transcript.trim())
            .filter(|t| !t.is_empty());

        if let Some(transcript) = transcript {
            return Ok(transcript.to_string());
        }
    }

    if !parsed_any {
        debug!("Recognizer returned an empty body");
    }
    Err(SpeechError::Unintelligible)
}
