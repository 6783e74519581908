//! Application layer - Use cases and orchestration
//!
//! Contains the translation wrapper, the text-to-speech and speech-to-text
//! pipelines, and the ports they use to reach external engines. Adapters in
//! the infrastructure layer implement these ports.

pub mod error;
pub mod ports;
pub mod retry;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use retry::RetryConfig;
pub use services::*;
