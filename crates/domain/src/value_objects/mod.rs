//! Value Objects - Immutable, identity-less domain primitives

mod artifact_name;
mod language_tag;
mod speech_text;
mod upload_name;

pub use artifact_name::ArtifactName;
pub use language_tag::LanguageTag;
pub use speech_text::SpeechText;
pub use upload_name::UploadName;
