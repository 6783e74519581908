//! Audio format converter for speech processing
//!
//! Normalizes uploaded recordings to mono 16-bit PCM WAV, the only input
//! the WAV loader and the recognizer accept.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, instrument};

use crate::config::SpeechConfig;
use crate::error::SpeechError;

/// Audio converter backed by FFmpeg
///
/// FFmpeg must be installed; its path comes from configuration.
#[derive(Debug, Clone, Default)]
pub struct AudioConverter {
    /// FFmpeg binary path (defaults to "ffmpeg" in PATH)
    ffmpeg_path: Option<String>,
}

impl AudioConverter {
    /// Create a new audio converter using `ffmpeg` from PATH
    #[must_use]
    pub const fn new() -> Self {
        Self { ffmpeg_path: None }
    }

    /// Create a new audio converter with a custom FFmpeg path
    #[must_use]
    pub fn with_ffmpeg_path(path: impl Into<String>) -> Self {
        Self {
            ffmpeg_path: Some(path.into()),
        }
    }

    /// Create a converter for the configured FFmpeg binary
    #[must_use]
    pub fn from_config(config: &SpeechConfig) -> Self {
        Self::with_ffmpeg_path(config.ffmpeg_path.clone())
    }

    /// Get the FFmpeg binary path
    fn ffmpeg_path(&self) -> &str {
        self.ffmpeg_path.as_deref().unwrap_or("ffmpeg")
    }

    /// Check if FFmpeg is available on the system
    #[instrument(skip(self))]
    pub async fn is_available(&self) -> bool {
        Command::new(self.ffmpeg_path())
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .is_ok_and(|status| status.success())
    }

    /// Path of the WAV file produced for `input`: same base name, `.wav` extension
    #[must_use]
    pub fn wav_output_path(input: &Path) -> PathBuf {
        input.with_extension("wav")
    }

    /// Convert an audio file to mono 16-bit PCM WAV next to the input
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::AudioProcessing` if FFmpeg cannot be started,
    /// exits with an error, or produces no output file.
    #[instrument(skip(self), fields(input = %input.display()))]
    pub async fn convert_to_wav(&self, input: &Path) -> Result<PathBuf, SpeechError> {
        let output = Self::wav_output_path(input);
        if output == input {
            return Err(SpeechError::AudioProcessing(format!(
                "Input is already a WAV path: {}",
                input.display()
            )));
        }

        let result = Command::new(self.ffmpeg_path())
            .arg("-y") // Overwrite output
            .arg("-loglevel")
            .arg("error")
            .arg("-i")
            .arg(input)
            .args(["-codec:a", "pcm_s16le", "-ac", "1"])
            .arg(&output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| SpeechError::AudioProcessing(format!("Failed to spawn FFmpeg: {e}")))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(SpeechError::AudioProcessing(format!(
                "FFmpeg conversion failed: {}",
                stderr.trim()
            )));
        }

        let produced = tokio::fs::metadata(&output)
            .await
            .is_ok_and(|meta| meta.len() > 0);
        if !produced {
            return Err(SpeechError::AudioProcessing(
                "FFmpeg produced empty output".to_string(),
            ));
        }

        debug!(output = %output.display(), "Conversion successful");
        Ok(output)
    }
}
