//! Google Translate web client
//!
//! Implements `Translator` on top of the keyless `translate_a/single`
//! endpoint used by the Google Translate web widgets.
//!
//! The endpoint answers with a positional JSON array:
//!
//! ```text
//! [
//!   [["Hola", "Hello", null, null, 10], [null, null, "Óla", "həˈləʊ"]],
//!   null,
//!   "en",
//!   ...
//! ]
//! ```
//!
//! Element 0 holds the translated segments followed by an optional
//! romanization row, element 2 holds the detected source language.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument};

use super::{endpoint, http_client};
use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::Translator;
use crate::types::TranslatedText;

const TRANSLATE_PATH: &str = "/translate_a/single";

/// Google Translate client implementing `Translator`
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    client: Client,
    base_url: String,
    timeout_ms: u64,
}

impl GoogleTranslateClient {
    /// Create a new Google Translate client
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: &SpeechConfig) -> Result<Self, SpeechError> {
        Ok(Self {
            client: http_client(config)?,
            base_url: config.translate_base_url.clone(),
            timeout_ms: config.timeout_ms,
        })
    }

    /// Issue one request and parse the JSON payload
    async fn request(&self, params: &[(&str, &str)]) -> Result<Value, SpeechError> {
        let response = self
            .client
            .get(endpoint(&self.base_url, TRANSLATE_PATH))
            .query(params)
            .send()
            .await
            .map_err(|e| SpeechError::from_reqwest(&e, self.timeout_ms))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SpeechError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::RequestFailed(format!("HTTP {status}: {body}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SpeechError::from_reqwest(&e, self.timeout_ms))?;

        serde_json::from_str(&body)
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse response: {e}")))
    }
}

#[async_trait]
impl Translator for GoogleTranslateClient {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn detect(&self, text: &str) -> Result<String, SpeechError> {
        let payload = self
            .request(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", "en"),
                ("dt", "t"),
                ("q", text),
            ])
            .await?;

        let language = parse_source_language(&payload).ok_or_else(|| {
            SpeechError::InvalidResponse("Response has no detected language".to_string())
        })?;

        debug!(language = %language, "Language detected");
        Ok(language)
    }

    #[instrument(skip_all, fields(text_len = text.len(), source = %source, target = %target))]
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<TranslatedText, SpeechError> {
        let payload = self
            .request(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("dt", "rm"),
                ("q", text),
            ])
            .await?;

        let mut translated = parse_translation(&payload)?;
        if translated.source_language.is_none() {
            translated.source_language = Some(source.to_string());
        }

        debug!(
            translated_len = translated.text.len(),
            has_pronunciation = translated.pronunciation.is_some(),
            "Translation received"
        );
        Ok(translated)
    }
}

/// Detected source language (element 2)
fn parse_source_language(payload: &Value) -> Option<String> {
    payload
        .get(2)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Concatenated translated segments plus the target-side romanization
fn parse_translation(payload: &Value) -> Result<TranslatedText, SpeechError> {
    let rows = payload.get(0).and_then(Value::as_array).ok_or_else(|| {
        SpeechError::InvalidResponse("Response has no translation segments".to_string())
    })?;

    let mut text = String::new();
    let mut pronunciation = None;

    for row in rows {
        match row.get(0).and_then(Value::as_str) {
            Some(segment) => text.push_str(segment),
            None => {
                if let Some(romanized) = row.get(2).and_then(Value::as_str) {
                    pronunciation = Some(romanized.to_string());
                }
            },
        }
    }

    let mut translated = TranslatedText::new(text);
    translated.pronunciation = pronunciation.filter(|p| !p.trim().is_empty());
    translated.source_language = parse_source_language(payload);
    Ok(translated)
}
