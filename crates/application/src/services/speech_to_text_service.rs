//! Speech-to-text service - Recognize an uploaded recording and translate it
//!
//! Workflow:
//! 1. Validate the upload (present, non-empty, `.wav` or `.mp3`)
//! 2. Persist it under a unique name
//! 3. Convert MP3 to WAV
//! 4. Load the recording as a mono buffer and recognize it
//! 5. Translate the transcript
//!
//! Every file created along the way is removed before the result is
//! returned, whether the request succeeded or not.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use domain::{
    ArtifactName, AudioFormat, DomainError, LanguageTag, RecognitionResult, UploadName,
};
use tracing::{debug, info, instrument};

use super::{TranslationService, artifacts::release_artifacts};
use crate::{
    error::ApplicationError,
    ports::{ArtifactStorePort, AudioTranscoderPort, SpeechRecognitionPort},
};

/// An audio file received from a client
#[derive(Clone, Default)]
pub struct AudioUpload {
    /// Filename supplied by the client, if any
    pub filename: Option<String>,
    /// File contents
    pub data: Vec<u8>,
}

impl AudioUpload {
    /// Create an upload from a filename and its bytes
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            filename: Some(filename.into()),
            data,
        }
    }

    /// Validate the upload and sanitize its filename
    ///
    /// # Errors
    ///
    /// Returns `NoAudioProvided` for a missing or blank filename or an empty
    /// file, and `UnsupportedFormat` for anything but `.wav` and `.mp3`.
    pub fn validate(&self) -> Result<UploadName, DomainError> {
        let filename = self
            .filename
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or(DomainError::NoAudioProvided)?;

        if self.data.is_empty() {
            return Err(DomainError::NoAudioProvided);
        }

        UploadName::parse(filename)
    }
}

impl fmt::Debug for AudioUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioUpload")
            .field("filename", &self.filename)
            .field("size", &self.data.len())
            .finish()
    }
}

/// Service for the speech-to-text pipeline
pub struct SpeechToTextService {
    translation: Arc<TranslationService>,
    recognizer: Arc<dyn SpeechRecognitionPort>,
    transcoder: Arc<dyn AudioTranscoderPort>,
    store: Arc<dyn ArtifactStorePort>,
}

impl fmt::Debug for SpeechToTextService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechToTextService")
            .field("translation", &self.translation)
            .finish_non_exhaustive()
    }
}

impl SpeechToTextService {
    /// Create a new speech-to-text service
    pub fn new(
        translation: Arc<TranslationService>,
        recognizer: Arc<dyn SpeechRecognitionPort>,
        transcoder: Arc<dyn AudioTranscoderPort>,
        store: Arc<dyn ArtifactStorePort>,
    ) -> Self {
        Self {
            translation,
            recognizer,
            transcoder,
            store,
        }
    }

    /// Recognize speech in `upload` and translate it into `target`
    ///
    /// # Errors
    ///
    /// Returns a domain error for a missing or unsupported upload,
    /// `AudioConversionFailed`/`AudioDecodeFailed` when the recording cannot
    /// be prepared, and `UnintelligibleAudio`/`RecognitionServiceError` from
    /// the recognizer. Recognition is never retried.
    #[instrument(skip_all, fields(
        filename = ?upload.filename,
        size = upload.data.len(),
        target = %target
    ))]
    pub async fn transcribe(
        &self,
        upload: AudioUpload,
        target: &LanguageTag,
    ) -> Result<RecognitionResult, ApplicationError> {
        let name = upload.validate()?;
        let artifact = ArtifactName::for_upload(&name);

        let stored = self.store.persist(&artifact, &upload.data).await?;
        debug!(path = %stored.display(), format = %name.format(), "Upload stored");

        let mut scratch = vec![stored.clone()];
        let outcome = self
            .process(&stored, name.format(), target, &mut scratch)
            .await;
        release_artifacts(self.store.as_ref(), &scratch).await;

        if let Ok(result) = &outcome {
            info!(
                transcript_len = result.original_text.len(),
                detected = ?result.detected_language,
                "Speech recognized"
            );
        }
        outcome
    }

    /// Normalize, decode, recognize and translate a stored upload
    ///
    /// Paths of derived files are pushed to `scratch` before they are created.
    async fn process(
        &self,
        stored: &Path,
        format: AudioFormat,
        target: &LanguageTag,
        scratch: &mut Vec<PathBuf>,
    ) -> Result<RecognitionResult, ApplicationError> {
        let wav_path = if format.needs_normalization() {
            scratch.push(stored.with_extension(AudioFormat::Wav.extension()));
            let converted = self
                .transcoder
                .convert_to_wav(stored)
                .await
                .map_err(as_conversion_error)?;
            if !scratch.contains(&converted) {
                scratch.push(converted.clone());
            }
            debug!(path = %converted.display(), "Converted upload to WAV");
            converted
        } else {
            stored.to_path_buf()
        };

        let audio = self
            .transcoder
            .load_mono(&wav_path)
            .await
            .map_err(as_decode_error)?;
        debug!(
            duration_ms = audio.duration_ms(),
            sample_rate = audio.sample_rate(),
            "Recognizing speech"
        );

        let transcript = self
            .recognizer
            .recognize(audio, target)
            .await
            .map_err(as_recognition_error)?;

        let translation = self.translation.translate(&transcript, target).await;

        Ok(RecognitionResult::new(transcript, translation, target.clone()))
    }
}

fn as_conversion_error(err: ApplicationError) -> ApplicationError {
    match err {
        ApplicationError::AudioConversionFailed(_) => err,
        other => ApplicationError::AudioConversionFailed(other.to_string()),
    }
}

fn as_decode_error(err: ApplicationError) -> ApplicationError {
    match err {
        ApplicationError::AudioDecodeFailed(_) => err,
        other => ApplicationError::AudioDecodeFailed(other.to_string()),
    }
}

fn as_recognition_error(err: ApplicationError) -> ApplicationError {
    match err {
        ApplicationError::UnintelligibleAudio | ApplicationError::RecognitionServiceError(_) => {
            err
        },
        other => ApplicationError::RecognitionServiceError(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{
        MockArtifactStorePort, MockAudioTranscoderPort, MockSpeechRecognitionPort,
        MockTranslationPort, Translation,
    };
    use crate::retry::RetryConfig;
    use domain::AudioBuffer;
    use std::sync::Mutex;

    const UPLOAD_DIR: &str = "/tmp/uploads";

    /// Store mock that records every persisted and removed path
    struct Recorded {
        persisted: Arc<Mutex<Vec<PathBuf>>>,
        removed: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl Recorded {
        fn assert_all_removed(&self, extra: &[&str]) {
            let persisted = self.persisted.lock().unwrap().clone();
            let removed = self.removed.lock().unwrap().clone();
            for path in &persisted {
                assert!(removed.contains(path), "{} not removed", path.display());
            }
            for suffix in extra {
                assert!(
                    removed.iter().any(|p| p.to_string_lossy().ends_with(suffix)),
                    "no removal ending in {suffix}"
                );
            }
        }
    }

    fn recording_store() -> (MockArtifactStorePort, Recorded) {
        let persisted = Arc::new(Mutex::new(Vec::new()));
        let removed = Arc::new(Mutex::new(Vec::new()));
        let mut store = MockArtifactStorePort::new();

        let p = Arc::clone(&persisted);
        store.expect_persist().returning(move |name, _| {
            let path = PathBuf::from(UPLOAD_DIR).join(name.as_str());
            p.lock().unwrap().push(path.clone());
            Ok(path)
        });
        let r = Arc::clone(&removed);
        store.expect_remove().returning(move |path| {
            r.lock().unwrap().push(path.to_path_buf());
            Ok(())
        });

        (store, Recorded { persisted, removed })
    }

    fn translation() -> Arc<TranslationService> {
        let mut port = MockTranslationPort::new();
        port.expect_detect().returning(|_| Ok("en".to_string()));
        port.expect_translate()
            .returning(|_, _, _| Ok(Translation::new("नमस्ते").with_pronunciation("namaste")));
        Arc::new(TranslationService::with_retry(
            Arc::new(port),
            RetryConfig::new(3, 1000),
        ))
    }

    fn decoding_transcoder() -> MockAudioTranscoderPort {
        let mut transcoder = MockAudioTranscoderPort::new();
        transcoder
            .expect_convert_to_wav()
            .returning(|input| Ok(input.with_extension("wav")));
        transcoder
            .expect_load_mono()
            .returning(|_| Ok(AudioBuffer::new(vec![0; 1600], 16_000)));
        transcoder
    }

    fn recognizer(text: &'static str) -> MockSpeechRecognitionPort {
        let mut recognizer = MockSpeechRecognitionPort::new();
        recognizer
            .expect_recognize()
            .times(1)
            .returning(move |_, _| Ok(text.to_string()));
        recognizer
    }

    fn hindi() -> LanguageTag {
        LanguageTag::parse("hi").unwrap()
    }

    mod upload_validation {
        use super::*;

        #[test]
        fn missing_filename() {
            let upload = AudioUpload {
                filename: None,
                data: vec![1, 2, 3],
            };
            assert_eq!(upload.validate(), Err(DomainError::NoAudioProvided));
        }

        #[test]
        fn blank_filename() {
            let upload = AudioUpload::new("", vec![1, 2, 3]);
            assert_eq!(upload.validate(), Err(DomainError::NoAudioProvided));
        }

        #[test]
        fn empty_file() {
            let upload = AudioUpload::new("clip.wav", vec![]);
            assert_eq!(upload.validate(), Err(DomainError::NoAudioProvided));
        }

        #[test]
        fn unsupported_extension() {
            let upload = AudioUpload::new("notes.txt", vec![1]);
            assert!(matches!(
                upload.validate(),
                Err(DomainError::UnsupportedFormat(_))
            ));
        }

        #[test]
        fn debug_hides_contents() {
            let upload = AudioUpload::new("clip.wav", vec![7; 32]);
            let debug = format!("{upload:?}");
            assert!(debug.contains("size: 32"));
        }
    }

    #[tokio::test]
    async fn wav_upload_is_recognized_and_translated() {
        let (store, recorded) = recording_store();
        let mut transcoder = MockAudioTranscoderPort::new();
        transcoder.expect_convert_to_wav().never();
        transcoder
            .expect_load_mono()
            .withf(|path: &Path| path.to_string_lossy().ends_with("_clip.wav"))
            .returning(|_| Ok(AudioBuffer::new(vec![0; 160], 16_000)));

        let service = SpeechToTextService::new(
            translation(),
            Arc::new(recognizer("hello")),
            Arc::new(transcoder),
            Arc::new(store),
        );

        let result = service
            .transcribe(AudioUpload::new("clip.wav", vec![1, 2, 3]), &hindi())
            .await
            .unwrap();

        assert_eq!(result.original_text, "hello");
        assert_eq!(result.translated_text, "नमस्ते");
        assert_eq!(result.romanized_text.as_deref(), Some("namaste"));
        assert_eq!(result.detected_language.as_deref(), Some("en"));
        assert_eq!(result.target_language.as_str(), "hi");
        recorded.assert_all_removed(&[]);
    }

    #[tokio::test]
    async fn mp3_upload_is_converted_and_both_files_removed() {
        let (store, recorded) = recording_store();
        let mut transcoder = MockAudioTranscoderPort::new();
        transcoder
            .expect_convert_to_wav()
            .withf(|path: &Path| path.to_string_lossy().ends_with("_voice.mp3"))
            .times(1)
            .returning(|input| Ok(input.with_extension("wav")));
        transcoder
            .expect_load_mono()
            .withf(|path: &Path| path.to_string_lossy().ends_with("_voice.wav"))
            .returning(|_| Ok(AudioBuffer::new(vec![0; 160], 16_000)));

        let service = SpeechToTextService::new(
            translation(),
            Arc::new(recognizer("hello")),
            Arc::new(transcoder),
            Arc::new(store),
        );

        service
            .transcribe(AudioUpload::new("voice.MP3", vec![1, 2, 3]), &hindi())
            .await
            .unwrap();

        recorded.assert_all_removed(&["_voice.mp3", "_voice.wav"]);
        assert_eq!(recorded.removed.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unsupported_upload_is_never_persisted() {
        let mut store = MockArtifactStorePort::new();
        store.expect_persist().never();
        store.expect_remove().never();

        let service = SpeechToTextService::new(
            translation(),
            Arc::new(MockSpeechRecognitionPort::new()),
            Arc::new(MockAudioTranscoderPort::new()),
            Arc::new(store),
        );

        let err = service
            .transcribe(AudioUpload::new("notes.txt", vec![1, 2, 3]), &hindi())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::UnsupportedFormat(_))
        ));
    }

    #[tokio::test]
    async fn unintelligible_audio_is_classified_and_cleaned_up() {
        let (store, recorded) = recording_store();
        let mut recognizer = MockSpeechRecognitionPort::new();
        recognizer
            .expect_recognize()
            .times(1)
            .returning(|_, _| Err(ApplicationError::UnintelligibleAudio));

        let service = SpeechToTextService::new(
            translation(),
            Arc::new(recognizer),
            Arc::new(decoding_transcoder()),
            Arc::new(store),
        );

        let err = service
            .transcribe(AudioUpload::new("clip.mp3", vec![1]), &hindi())
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::UnintelligibleAudio));
        recorded.assert_all_removed(&["_clip.mp3", "_clip.wav"]);
    }

    #[tokio::test]
    async fn recognizer_failure_is_a_service_error() {
        let (store, recorded) = recording_store();
        let mut recognizer = MockSpeechRecognitionPort::new();
        recognizer
            .expect_recognize()
            .times(1)
            .returning(|_, _| Err(ApplicationError::Configuration("no key".to_string())));

        let service = SpeechToTextService::new(
            translation(),
            Arc::new(recognizer),
            Arc::new(decoding_transcoder()),
            Arc::new(store),
        );

        let err = service
            .transcribe(AudioUpload::new("clip.wav", vec![1]), &hindi())
            .await
            .unwrap_err();

        match err {
            ApplicationError::RecognitionServiceError(cause) => assert!(cause.contains("no key")),
            other => panic!("unexpected error: {other:?}"),
        }
        recorded.assert_all_removed(&["_clip.wav"]);
    }

    #[tokio::test]
    async fn conversion_failure_removes_upload_and_partial_output() {
        let (store, recorded) = recording_store();
        let mut transcoder = MockAudioTranscoderPort::new();
        transcoder
            .expect_convert_to_wav()
            .returning(|_| Err(ApplicationError::AudioConversionFailed("corrupt".to_string())));
        transcoder.expect_load_mono().never();
        let mut recognizer = MockSpeechRecognitionPort::new();
        recognizer.expect_recognize().never();

        let service = SpeechToTextService::new(
            translation(),
            Arc::new(recognizer),
            Arc::new(transcoder),
            Arc::new(store),
        );

        let err = service
            .transcribe(AudioUpload::new("clip.mp3", vec![1]), &hindi())
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::AudioConversionFailed(_)));
        recorded.assert_all_removed(&["_clip.mp3", "_clip.wav"]);
    }

    #[tokio::test]
    async fn decode_failure_is_classified() {
        let (store, recorded) = recording_store();
        let mut transcoder = MockAudioTranscoderPort::new();
        transcoder
            .expect_load_mono()
            .returning(|_| Err(ApplicationError::Storage("truncated header".to_string())));

        let service = SpeechToTextService::new(
            translation(),
            Arc::new(MockSpeechRecognitionPort::new()),
            Arc::new(transcoder),
            Arc::new(store),
        );

        let err = service
            .transcribe(AudioUpload::new("clip.wav", vec![1]), &hindi())
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::AudioDecodeFailed(_)));
        recorded.assert_all_removed(&[]);
    }

    #[tokio::test]
    async fn removal_failure_does_not_change_outcome() {
        let mut store = MockArtifactStorePort::new();
        store
            .expect_persist()
            .returning(|name, _| Ok(PathBuf::from(UPLOAD_DIR).join(name.as_str())));
        store
            .expect_remove()
            .returning(|_| Err(ApplicationError::Storage("permission denied".to_string())));

        let service = SpeechToTextService::new(
            translation(),
            Arc::new(recognizer("hello")),
            Arc::new(decoding_transcoder()),
            Arc::new(store),
        );

        let result = service
            .transcribe(AudioUpload::new("clip.wav", vec![1]), &hindi())
            .await;
        assert!(result.is_ok());
    }
}
