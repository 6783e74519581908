//! Text-to-voice and voice-to-text handlers

use std::collections::HashMap;

use application::AudioUpload;
use axum::{
    Form, Json,
    extract::{FromRequest, Multipart, Request, State, multipart::MultipartRejection},
    http::header,
    response::IntoResponse,
};
use domain::{DomainError, LanguageTag, RecognitionResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{error::ApiError, middleware::RequestId, state::AppState};

/// Multipart field carrying the uploaded recording
pub const AUDIO_FIELD: &str = "audio";

/// Form field carrying the target language
pub const LANGUAGE_FIELD: &str = "language";

/// Form field carrying the text to speak
pub const TEXT_FIELD: &str = "text";

/// Text fields of a urlencoded or multipart form
///
/// Requests with any other content type yield no fields.
#[derive(Debug, Default)]
pub struct FormFields(pub HashMap<String, String>);

impl FormFields {
    /// Get a field value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl<S: Send + Sync> FromRequest<S> for FormFields {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::InvalidBody {
                    status: rejection.status(),
                    message: rejection.body_text(),
                })?;

            let mut fields = HashMap::new();
            while let Some(field) = multipart.next_field().await? {
                // File parts are not text fields
                if field.file_name().is_some() {
                    continue;
                }
                if let Some(name) = field.name().map(ToString::to_string) {
                    fields.insert(name, field.text().await?);
                }
            }
            Ok(Self(fields))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::InvalidBody {
                    status: rejection.status(),
                    message: rejection.body_text(),
                })?;
            Ok(Self(fields))
        } else {
            Ok(Self::default())
        }
    }
}

/// Translate the submitted text and return it as spoken MP3
#[instrument(skip_all, fields(request_id = %request_id))]
pub async fn text_to_voice(
    State(state): State<AppState>,
    request_id: RequestId,
    fields: FormFields,
) -> Result<impl IntoResponse, ApiError> {
    let target = LanguageTag::parse_or_default(fields.get(LANGUAGE_FIELD))?;
    let text = fields.get(TEXT_FIELD).unwrap_or_default();

    let speech = state.text_to_speech.synthesize(text, &target).await?;
    debug!(bytes = speech.audio.len(), "Returning synthesized speech");

    Ok((
        [
            (header::CONTENT_TYPE, speech.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", speech.download_name),
            ),
        ],
        speech.audio,
    ))
}

/// Successful voice-to-text response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceToTextResponse {
    /// Always `"success"`
    pub status: String,
    pub original_text: String,
    pub translated_text: String,
    pub romanized_text: Option<String>,
    /// Detected source language, `"unknown"` when detection failed
    pub detected_language: String,
    pub target_language: String,
}

impl From<RecognitionResult> for VoiceToTextResponse {
    fn from(result: RecognitionResult) -> Self {
        Self {
            status: "success".to_string(),
            detected_language: result
                .detected_language
                .unwrap_or_else(|| "unknown".to_string()),
            target_language: result.target_language.to_string(),
            original_text: result.original_text,
            translated_text: result.translated_text,
            romanized_text: result.romanized_text,
        }
    }
}

/// Transcribe an uploaded recording and translate the transcript
#[instrument(skip_all, fields(request_id = %request_id))]
pub async fn voice_to_text(
    State(state): State<AppState>,
    request_id: RequestId,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<VoiceToTextResponse>, ApiError> {
    // Anything but a multipart body cannot carry a file
    let Ok(mut multipart) = multipart else {
        return Err(DomainError::NoAudioProvided.into());
    };

    let mut upload = AudioUpload::default();
    let mut language = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some(AUDIO_FIELD) => {
                upload.filename = field.file_name().map(ToString::to_string);
                upload.data = field.bytes().await?.to_vec();
            },
            Some(LANGUAGE_FIELD) => language = Some(field.text().await?),
            _ => {},
        }
    }

    let target = LanguageTag::parse_or_default(language.as_deref())?;
    let result = state.speech_to_text.transcribe(upload, &target).await?;

    Ok(Json(result.into()))
}
