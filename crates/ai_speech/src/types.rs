//! Types for translation and speech processing
//!
//! Contains the data structures returned by the engine clients.

use serde::{Deserialize, Serialize};

/// Translation returned by a translation engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedText {
    /// The translated text
    pub text: String,
    /// Source language reported by the engine
    pub source_language: Option<String>,
    /// Latin-script pronunciation of the translated text
    pub pronunciation: Option<String>,
}

impl TranslatedText {
    /// Create a translation with only the text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_language: None,
            pronunciation: None,
        }
    }

    /// Set the detected source language
    #[must_use]
    pub fn with_source_language(mut self, language: impl Into<String>) -> Self {
        self.source_language = Some(language.into());
        self
    }

    /// Set the pronunciation
    #[must_use]
    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = Some(pronunciation.into());
        self
    }
}

/// Synthesized audio
#[derive(Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    data: Vec<u8>,
    chunks: usize,
}

impl SynthesizedAudio {
    /// Create synthesized audio from MP3 bytes and the number of requests it took
    #[must_use]
    pub const fn new(data: Vec<u8>, chunks: usize) -> Self {
        Self { data, chunks }
    }

    /// MP3 bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the MP3 bytes
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Number of synthesis requests concatenated into this audio
    #[must_use]
    pub const fn chunks(&self) -> usize {
        self.chunks
    }
}

impl std::fmt::Debug for SynthesizedAudio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynthesizedAudio")
            .field("size", &self.data.len())
            .field("chunks", &self.chunks)
            .finish()
    }
}
