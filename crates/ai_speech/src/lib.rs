//! AI Speech - translation, synthesis and recognition engine clients
//!
//! Provides traits and implementations for the external engines:
//! - `Translator` - Detect languages and translate text
//! - `TextToSpeech` - Synthesize MP3 speech from text (TTS)
//! - `SpeechToText` - Transcribe mono recordings to text (STT)
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains the Google web engine clients (adapters)
//! - `converter` and `wav` normalize uploaded recordings for recognition
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{GoogleTranslateClient, SpeechConfig, Translator};
//!
//! let translator = GoogleTranslateClient::new(&SpeechConfig::default())?;
//!
//! let source = translator.detect("Bonjour").await?;
//! let translated = translator.translate("Bonjour", &source, "en").await?;
//! println!("{}", translated.text);
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;
pub mod wav;

pub use config::SpeechConfig;
pub use converter::AudioConverter;
pub use error::SpeechError;
pub use ports::{SpeechToText, TextToSpeech, Translator};
pub use providers::{GoogleSpeechRecognizer, GoogleTranslateClient, GoogleTtsClient};
pub use types::{SynthesizedAudio, TranslatedText};
