//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `storage`: Temporary artifact directory
//!
//! Translation retry settings come from `application::RetryConfig` and the
//! engine settings from `ai_speech::SpeechConfig`.

mod server;
mod storage;

use std::path::Path;

use ai_speech::SpeechConfig;
use application::RetryConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use server::ServerConfig;
pub use storage::StorageConfig;

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "LINGUAVOX";

/// Separator between prefix and nested keys in environment variables
pub const ENV_SEPARATOR: &str = "__";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Artifact storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Retry budget of the translation wrapper
    #[serde(default)]
    pub translation: RetryConfig,

    /// Translation, synthesis and recognition engines
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the result is invalid.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Load configuration from an optional file and the environment
    ///
    /// `path` may omit the extension; the file format is inferred from it.
    /// Environment variables override file values, e.g.
    /// `LINGUAVOX__SERVER__PORT=8080`.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the result is invalid.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::from(path).required(false))
            // Override with environment variables (e.g., LINGUAVOX__SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate().map_err(config::ConfigError::Message)?;

        debug!(
            bind = %config.server.bind_address(),
            upload_dir = %config.storage.upload_dir.display(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.translation.max_attempts == 0 {
            return Err("translation.max_attempts must be greater than 0".to_string());
        }

        if self.server.max_body_size_audio_bytes == 0 {
            return Err("server.max_body_size_audio_bytes must be greater than 0".to_string());
        }

        if self.storage.upload_dir.as_os_str().is_empty() {
            return Err("storage.upload_dir cannot be empty".to_string());
        }

        if !matches!(self.server.log_format.to_ascii_lowercase().as_str(), "text" | "json") {
            return Err(format!(
                "server.log_format must be 'text' or 'json', got '{}'",
                self.server.log_format
            ));
        }

        self.speech.validate().map_err(|e| format!("speech: {e}"))
    }
}
