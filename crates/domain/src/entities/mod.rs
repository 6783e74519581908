//! Domain entities - request-scoped results of the speech pipelines

mod audio;
mod recognition;
mod translation;

pub use audio::{AudioBuffer, AudioFormat};
pub use recognition::RecognitionResult;
pub use translation::TranslationResult;
