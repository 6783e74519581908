//! Audio port - Interface for audio normalization and decoding

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use domain::AudioBuffer;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for transcoding and decoding audio files
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AudioTranscoderPort: Send + Sync {
    /// Convert an audio file to mono 16-bit PCM WAV
    ///
    /// The output is written next to the input with the same base name and a
    /// `.wav` extension; its path is returned. Failures are reported as
    /// `ApplicationError::AudioConversionFailed`.
    async fn convert_to_wav(&self, input: &Path) -> Result<PathBuf, ApplicationError>;

    /// Load a WAV file as a single mono buffer
    ///
    /// Failures are reported as `ApplicationError::AudioDecodeFailed`.
    async fn load_mono(&self, path: &Path) -> Result<AudioBuffer, ApplicationError>;
}
