//! Audio formats and decoded audio buffers

use std::fmt;

use serde::{Deserialize, Serialize};

/// Audio container formats accepted for upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// WAV (PCM), decodable by the recognizer as-is
    Wav,
    /// MP3, normalized to WAV before recognition
    Mp3,
}

impl AudioFormat {
    /// Get the MIME type for this format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
        }
    }

    /// Get the canonical file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
        }
    }

    /// Parse from a file extension (without the leading dot)
    ///
    /// Matching ignores ASCII case, so `WAV` and `Mp3` are accepted.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("wav") {
            Some(Self::Wav)
        } else if ext.eq_ignore_ascii_case("mp3") {
            Some(Self::Mp3)
        } else {
            None
        }
    }

    /// Whether audio in this format must be converted before recognition
    #[must_use]
    pub const fn needs_normalization(&self) -> bool {
        matches!(self, Self::Mp3)
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A fully decoded, mono recording ready for a speech recognizer
#[derive(Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl AudioBuffer {
    /// Create a buffer from mono 16-bit samples
    #[must_use]
    pub const fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Mono samples
    #[must_use]
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Sample rate in Hz
    #[must_use]
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Check if the buffer holds no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration of the recording in milliseconds
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        (self.samples.len() as u64 * 1000) / u64::from(self.sample_rate)
    }

    /// Samples as big-endian 16-bit PCM (the `audio/l16` wire format)
    #[must_use]
    pub fn to_l16_bytes(&self) -> Vec<u8> {
        self.samples.iter().flat_map(|s| s.to_be_bytes()).collect()
    }
}

impl fmt::Debug for AudioBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioBuffer")
            .field("samples", &self.samples.len())
            .field("sample_rate", &self.sample_rate)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod audio_format {
        use super::*;

        #[test]
        fn extensions_are_correct() {
            assert_eq!(AudioFormat::Wav.extension(), "wav");
            assert_eq!(AudioFormat::Mp3.extension(), "mp3");
        }

        #[test]
        fn mime_types_are_correct() {
            assert_eq!(AudioFormat::Wav.mime_type(), "audio/wav");
            assert_eq!(AudioFormat::Mp3.mime_type(), "audio/mpeg");
        }

        #[test]
        fn from_extension_ignores_case() {
            assert_eq!(AudioFormat::from_extension("wav"), Some(AudioFormat::Wav));
            assert_eq!(AudioFormat::from_extension("WAV"), Some(AudioFormat::Wav));
            assert_eq!(AudioFormat::from_extension("Mp3"), Some(AudioFormat::Mp3));
        }

        #[test]
        fn from_extension_rejects_others() {
            assert_eq!(AudioFormat::from_extension("txt"), None);
            assert_eq!(AudioFormat::from_extension("ogg"), None);
            assert_eq!(AudioFormat::from_extension(""), None);
        }

        #[test]
        fn only_mp3_needs_normalization() {
            assert!(AudioFormat::Mp3.needs_normalization());
            assert!(!AudioFormat::Wav.needs_normalization());
        }
    }

    mod audio_buffer {
        use super::*;

        #[test]
        fn duration_from_samples() {
            let buffer = AudioBuffer::new(vec![0; 16_000], 16_000);
            assert_eq!(buffer.duration_ms(), 1000);
        }

        #[test]
        fn zero_rate_has_zero_duration() {
            let buffer = AudioBuffer::new(vec![1, 2, 3], 0);
            assert_eq!(buffer.duration_ms(), 0);
        }

        #[test]
        fn l16_bytes_are_big_endian() {
            let buffer = AudioBuffer::new(vec![0x0102, -1], 8000);
            assert_eq!(buffer.to_l16_bytes(), vec![0x01, 0x02, 0xFF, 0xFF]);
        }

        #[test]
        fn debug_hides_samples() {
            let buffer = AudioBuffer::new(vec![0; 4], 8000);
            let debug = format!("{buffer:?}");
            assert!(debug.contains("samples: 4"));
        }
    }
}
