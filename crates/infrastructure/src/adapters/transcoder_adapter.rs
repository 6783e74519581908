//! Transcoder adapter - Implements AudioTranscoderPort using FFmpeg and hound

use std::path::{Path, PathBuf};

use ai_speech::{AudioConverter, SpeechConfig, wav};
use application::error::ApplicationError;
use application::ports::AudioTranscoderPort;
use async_trait::async_trait;
use domain::AudioBuffer;
use tracing::{debug, instrument};

/// Adapter for audio normalization and WAV decoding
#[derive(Debug, Clone)]
pub struct TranscoderAdapter {
    converter: AudioConverter,
}

impl TranscoderAdapter {
    /// Create an adapter with the given converter
    #[must_use]
    pub const fn new(converter: AudioConverter) -> Self {
        Self { converter }
    }

    /// Create an adapter using the configured FFmpeg binary
    #[must_use]
    pub fn from_config(config: &SpeechConfig) -> Self {
        Self::new(AudioConverter::from_config(config))
    }

    /// Check whether FFmpeg can be started
    pub async fn is_available(&self) -> bool {
        self.converter.is_available().await
    }
}

#[async_trait]
impl AudioTranscoderPort for TranscoderAdapter {
    #[instrument(skip(self), fields(input = %input.display()))]
    async fn convert_to_wav(&self, input: &Path) -> Result<PathBuf, ApplicationError> {
        self.converter
            .convert_to_wav(input)
            .await
            .map_err(|e| ApplicationError::AudioConversionFailed(e.to_string()))
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    async fn load_mono(&self, path: &Path) -> Result<AudioBuffer, ApplicationError> {
        let path = path.to_path_buf();
        let buffer = tokio::task::spawn_blocking(move || wav::load_mono(&path))
            .await
            .map_err(|e| ApplicationError::AudioDecodeFailed(format!("Decoder task failed: {e}")))?
            .map_err(|e| ApplicationError::AudioDecodeFailed(e.to_string()))?;

        debug!(
            samples = buffer.samples().len(),
            sample_rate = buffer.sample_rate(),
            "Audio loaded"
        );
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_tone(path: &Path) {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for sample in [100i16, 200, 300, 400] {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[tokio::test]
    async fn load_mono_decodes_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        write_tone(&path);

        let adapter = TranscoderAdapter::new(AudioConverter::new());
        let buffer = adapter.load_mono(&path).await.unwrap();

        assert_eq!(buffer.samples(), &[150, 350]);
        assert_eq!(buffer.sample_rate(), 8000);
    }

    #[tokio::test]
    async fn load_mono_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.wav");
        std::fs::write(&path, b"not audio").unwrap();

        let adapter = TranscoderAdapter::new(AudioConverter::new());
        let err = adapter.load_mono(&path).await.unwrap_err();
        assert!(matches!(err, ApplicationError::AudioDecodeFailed(_)));
    }

    #[tokio::test]
    async fn conversion_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("clip.mp3");
        std::fs::write(&input, [0xFF, 0xFB, 0x90, 0x00]).unwrap();

        let adapter = TranscoderAdapter::new(AudioConverter::with_ffmpeg_path("/nonexistent/ffmpeg"));
        let err = adapter.convert_to_wav(&input).await.unwrap_err();
        assert!(matches!(err, ApplicationError::AudioConversionFailed(_)));
    }

    #[tokio::test]
    async fn missing_ffmpeg_is_not_available() {
        let config = SpeechConfig {
            ffmpeg_path: "/nonexistent/ffmpeg".to_string(),
            ..Default::default()
        };
        assert!(!TranscoderAdapter::from_config(&config).is_available().await);
    }
}
