//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the engine adapters, the local artifact store, configuration
//! loading and landing page templates.

pub mod adapters;
pub mod config;
pub mod templates;

pub use adapters::*;
pub use config::{AppConfig, ServerConfig, StorageConfig};
pub use templates::{IndexPage, TemplateEngine, TemplateError};
