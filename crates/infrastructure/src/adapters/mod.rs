//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod local_artifact_store;
mod speech_adapter;
mod transcoder_adapter;
mod translation_adapter;

pub use local_artifact_store::LocalArtifactStore;
pub use speech_adapter::{RecognitionAdapter, SynthesisAdapter};
pub use transcoder_adapter::TranscoderAdapter;
pub use translation_adapter::TranslationAdapter;
