//! Domain layer for LinguaVox
//!
//! Contains the value objects, entities and errors shared by the
//! text-to-speech and speech-to-text pipelines. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
