//! Application state shared across handlers

use std::sync::Arc;

use application::{
    ApplicationError, SpeechToTextService, TextToSpeechService, TranslationService,
    ports::{ArtifactStorePort, TranslationPort},
};
use infrastructure::{
    AppConfig, LocalArtifactStore, RecognitionAdapter, SynthesisAdapter, TemplateEngine,
    TranscoderAdapter, TranslationAdapter,
};
use tracing::{info, warn};

/// Shared application state
///
/// Services hold no per-request data, so one instance serves every request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Text-to-speech pipeline
    pub text_to_speech: Arc<TextToSpeechService>,
    /// Speech-to-text pipeline
    pub speech_to_text: Arc<SpeechToTextService>,
    /// Landing page renderer
    pub templates: Arc<TemplateEngine>,
    /// Loaded configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Assemble state from already constructed services
    pub fn new(
        text_to_speech: TextToSpeechService,
        speech_to_text: SpeechToTextService,
        templates: TemplateEngine,
        config: AppConfig,
    ) -> Self {
        Self {
            text_to_speech: Arc::new(text_to_speech),
            speech_to_text: Arc::new(speech_to_text),
            templates: Arc::new(templates),
            config: Arc::new(config),
        }
    }

    /// Wire the Google engine adapters, ffmpeg and the upload directory
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if an engine client cannot be built or the
    /// landing page does not compile, and `Storage` if the upload directory
    /// cannot be created.
    pub async fn from_config(config: AppConfig) -> Result<Self, ApplicationError> {
        let translator: Arc<dyn TranslationPort> =
            Arc::new(TranslationAdapter::google(&config.speech)?);
        let translation = Arc::new(TranslationService::with_retry(
            translator,
            config.translation.clone(),
        ));

        let store: Arc<dyn ArtifactStorePort> =
            Arc::new(LocalArtifactStore::open(config.storage.upload_dir.clone()).await?);
        info!(dir = %config.storage.upload_dir.display(), "Upload directory ready");

        let transcoder = TranscoderAdapter::from_config(&config.speech);
        if !transcoder.is_available().await {
            warn!(
                ffmpeg = %config.speech.ffmpeg_path,
                "ffmpeg not found, MP3 uploads will fail"
            );
        }

        let text_to_speech = TextToSpeechService::new(
            Arc::clone(&translation),
            Arc::new(SynthesisAdapter::google(&config.speech)?),
            Arc::clone(&store),
        );
        let speech_to_text = SpeechToTextService::new(
            translation,
            Arc::new(RecognitionAdapter::google(&config.speech)?),
            Arc::new(transcoder),
            store,
        );

        let templates = TemplateEngine::new()
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self::new(text_to_speech, speech_to_text, templates, config))
    }
}
