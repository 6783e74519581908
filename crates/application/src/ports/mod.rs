//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod artifact_store;
mod audio_port;
mod speech_port;
mod translation_port;

#[cfg(test)]
pub use artifact_store::MockArtifactStorePort;
pub use artifact_store::ArtifactStorePort;
#[cfg(test)]
pub use audio_port::MockAudioTranscoderPort;
pub use audio_port::AudioTranscoderPort;
#[cfg(test)]
pub use speech_port::{MockSpeechRecognitionPort, MockSpeechSynthesisPort};
pub use speech_port::{SpeechRecognitionPort, SpeechSynthesisPort};
#[cfg(test)]
pub use translation_port::MockTranslationPort;
pub use translation_port::{Translation, TranslationPort};
