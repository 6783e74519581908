//! Google Translate TTS client
//!
//! Implements `TextToSpeech` on top of the keyless `translate_tts` endpoint.
//! The endpoint only accepts short inputs, so text is split into chunks on
//! sentence and word boundaries and the MP3 frames of every chunk are
//! concatenated into one stream.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use super::{endpoint, http_client};
use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::SynthesizedAudio;

const TTS_PATH: &str = "/translate_tts";

/// Characters after which a chunk may end
const PUNCTUATION: &[char] = &[
    '.', '!', '?', ';', ':', ',', '\n', '。', '！', '？', '；', '：', '，', '、', '।', '؟', '،',
];

/// Language codes accepted by the Google Translate TTS endpoint
const SUPPORTED_LANGUAGES: &[&str] = &[
    "af", "am", "ar", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en", "es", "et",
    "eu", "fi", "fr", "fr-CA", "gl", "gu", "ha", "hi", "hr", "hu", "id", "is", "it", "iw", "ja",
    "jw", "km", "kn", "ko", "la", "lt", "lv", "ml", "mr", "ms", "my", "ne", "nl", "no", "pa",
    "pl", "pt", "pt-PT", "ro", "ru", "si", "sk", "sq", "sr", "su", "sv", "sw", "ta", "te", "th",
    "tl", "tr", "uk", "ur", "vi", "yue", "zh", "zh-CN", "zh-TW", "zh-cn", "zh-tw",
];

/// Google Translate TTS client implementing `TextToSpeech`
#[derive(Debug, Clone)]
pub struct GoogleTtsClient {
    client: Client,
    base_url: String,
    timeout_ms: u64,
    max_chunk_chars: usize,
}

impl GoogleTtsClient {
    /// Create a new TTS client
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: &SpeechConfig) -> Result<Self, SpeechError> {
        Ok(Self {
            client: http_client(config)?,
            base_url: config.tts_base_url.clone(),
            timeout_ms: config.timeout_ms,
            max_chunk_chars: config.max_tts_chunk_chars,
        })
    }

    /// Synthesize one chunk
    async fn synthesize_chunk(
        &self,
        text: &str,
        language: &str,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, SpeechError> {
        let idx = index.to_string();
        let total_str = total.to_string();
        let textlen = text.chars().count().to_string();

        let response = self
            .client
            .get(endpoint(&self.base_url, TTS_PATH))
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", text),
                ("idx", idx.as_str()),
                ("total", total_str.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SpeechError::from_reqwest(&e, self.timeout_ms))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SpeechError::RateLimited);
        }
        if !status.is_success() {
            return Err(SpeechError::SynthesisFailed(format!(
                "HTTP {status} for chunk {} of {total}",
                index + 1
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechError::from_reqwest(&e, self.timeout_ms))?;

        if audio.is_empty() {
            return Err(SpeechError::SynthesisFailed(format!(
                "Empty audio for chunk {} of {total}",
                index + 1
            )));
        }

        Ok(audio.to_vec())
    }
}

#[async_trait]
impl TextToSpeech for GoogleTtsClient {
    #[instrument(skip_all, fields(text_len = text.len(), language = %language))]
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
    ) -> Result<SynthesizedAudio, SpeechError> {
        if !self.supports_language(language) {
            return Err(SpeechError::UnsupportedLanguage(language.to_string()));
        }

        let chunks = chunk_text(text, self.max_chunk_chars);
        if chunks.is_empty() {
            return Err(SpeechError::SynthesisFailed("No text to speak".to_string()));
        }

        debug!(chunks = chunks.len(), "Synthesizing speech");

        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let part = self
                .synthesize_chunk(chunk, language, index, chunks.len())
                .await?;
            audio.extend_from_slice(&part);
        }

        Ok(SynthesizedAudio::new(audio, chunks.len()))
    }

    fn supports_language(&self, language: &str) -> bool {
        SUPPORTED_LANGUAGES
            .iter()
            .any(|code| code.eq_ignore_ascii_case(language))
    }
}

/// Split text into chunks of at most `max_chars` characters
///
/// Chunks end after punctuation where possible, then on whitespace. A
/// single word longer than `max_chars` is split mid-word. Blank chunks are
/// dropped.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();

    for sentence in split_after_punctuation(text) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }

        let can_merge = chunks.last().is_some_and(|last: &String| {
            last.chars().count() + 1 + sentence.chars().count() <= max_chars
        });
        if can_merge {
            if let Some(last) = chunks.last_mut() {
                last.push(' ');
                last.push_str(sentence);
            }
            continue;
        }

        if sentence.chars().count() <= max_chars {
            chunks.push(sentence.to_string());
        } else {
            chunks.extend(split_on_whitespace(sentence, max_chars));
        }
    }

    chunks
}

/// Split keeping each punctuation mark with the text before it
fn split_after_punctuation(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if PUNCTUATION.contains(&c) {
            let end = i + c.len_utf8();
            pieces.push(&text[start..end]);
            start = end;
        }
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }

    pieces
}

/// Greedy word wrap, splitting words that are too long on their own
fn split_on_whitespace(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }

        if current_len > 0 {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if word_len <= max_chars {
            current.push_str(word);
            current_len = word_len;
        } else {
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
        }
    }

    if current_len > 0 {
        chunks.push(current);
    }

    chunks
}
