//! Application services - Use case implementations

mod artifacts;
mod speech_to_text_service;
mod text_to_speech_service;
mod translation_service;

pub use speech_to_text_service::{AudioUpload, SpeechToTextService};
pub use text_to_speech_service::{SynthesizedSpeech, TextToSpeechService};
pub use translation_service::TranslationService;
