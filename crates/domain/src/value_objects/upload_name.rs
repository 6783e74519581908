//! Sanitized names for uploaded audio files
//!
//! Client-supplied filenames are hostile input: they may contain path
//! separators, traversal sequences or characters the filesystem rejects.
//! `UploadName` keeps only a safe stem plus the canonical audio extension.

use std::fmt;

use crate::entities::AudioFormat;
use crate::errors::DomainError;

/// Stem used when nothing of the original filename survives sanitizing
const FALLBACK_STEM: &str = "upload";

/// A validated, filesystem-safe upload filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadName {
    file_name: String,
    format: AudioFormat,
}

impl UploadName {
    /// Validate and sanitize a client filename
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NoAudioProvided` for a blank filename and
    /// `DomainError::UnsupportedFormat` when the extension is not `.wav`
    /// or `.mp3`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::NoAudioProvided);
        }

        let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
        let (stem, format) = base
            .rsplit_once('.')
            .and_then(|(stem, ext)| AudioFormat::from_extension(ext).map(|f| (stem, f)))
            .ok_or_else(|| DomainError::UnsupportedFormat(raw.to_string()))?;

        let mut stem = sanitize_stem(stem);
        if stem.is_empty() {
            stem = FALLBACK_STEM.to_string();
        }

        Ok(Self {
            file_name: format!("{stem}.{}", format.extension()),
            format,
        })
    }

    /// The sanitized filename, including the canonical extension
    pub fn as_str(&self) -> &str {
        &self.file_name
    }

    /// Audio format derived from the extension
    pub const fn format(&self) -> AudioFormat {
        self.format
    }
}

impl fmt::Display for UploadName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name)
    }
}

/// Keep ASCII alphanumerics, `.`, `-` and `_`; whitespace becomes `_`
fn sanitize_stem(stem: &str) -> String {
    let joined = stem.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_wav_and_mp3() {
        let wav = UploadName::parse("speech.wav").unwrap();
        assert_eq!(wav.as_str(), "speech.wav");
        assert_eq!(wav.format(), AudioFormat::Wav);

        let mp3 = UploadName::parse("speech.mp3").unwrap();
        assert_eq!(mp3.format(), AudioFormat::Mp3);
    }

    #[test]
    fn uppercase_extension_is_normalized() {
        let name = UploadName::parse("Recording.WAV").unwrap();
        assert_eq!(name.as_str(), "Recording.wav");
        assert_eq!(name.format(), AudioFormat::Wav);
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(matches!(
            UploadName::parse("notes.txt"),
            Err(DomainError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            UploadName::parse("noextension"),
            Err(DomainError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            UploadName::parse("audio.wav.exe"),
            Err(DomainError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn blank_name_means_no_audio() {
        assert_eq!(UploadName::parse(""), Err(DomainError::NoAudioProvided));
        assert_eq!(UploadName::parse("  "), Err(DomainError::NoAudioProvided));
    }

    #[test]
    fn strips_path_components() {
        let name = UploadName::parse("../../etc/passwd.wav").unwrap();
        assert_eq!(name.as_str(), "passwd.wav");

        let name = UploadName::parse("C:\\Users\\me\\clip.mp3").unwrap();
        assert_eq!(name.as_str(), "clip.mp3");
    }

    #[test]
    fn replaces_whitespace_and_drops_unsafe_characters() {
        let name = UploadName::parse("my voice (1).mp3").unwrap();
        assert_eq!(name.as_str(), "my_voice_1.mp3");
    }

    #[test]
    fn falls_back_when_stem_is_empty() {
        let name = UploadName::parse("録音.mp3").unwrap();
        assert_eq!(name.as_str(), "upload.mp3");

        let name = UploadName::parse(".wav").unwrap();
        assert_eq!(name.as_str(), "upload.wav");
    }

    #[test]
    fn never_contains_separators() {
        let name = UploadName::parse("a/b\\c/..\\d.wav").unwrap();
        assert!(!name.as_str().contains('/'));
        assert!(!name.as_str().contains('\\'));
    }
}
