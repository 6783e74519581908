//! API error handling
//!
//! Every failure on the API routes is answered with a JSON body
//! `{"error": ..., "code": ..., "details"?: ...}`. Client mistakes map to
//! 400, everything else to 500.

use application::ApplicationError;
use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use infrastructure::TemplateError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure reported by an application service
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Form or multipart body could not be read
    #[error("Invalid request body: {message}")]
    InvalidBody {
        /// Status chosen by the body extractor (400 or 413)
        status: StatusCode,
        /// Extractor message
        message: String,
    },

    /// Landing page could not be rendered
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Application(err.into())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::InvalidBody {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Application(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Application(_) | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidBody { status, .. } => *status,
        }
    }

    /// Snake-case error code for the response body
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Application(err) => err.kind(),
            Self::InvalidBody { status, .. } if *status == StatusCode::PAYLOAD_TOO_LARGE => {
                "payload_too_large"
            },
            Self::InvalidBody { .. } => "invalid_body",
            Self::Template(_) => "template_error",
        }
    }

    /// Underlying cause of a server-side failure
    fn details(&self) -> Option<String> {
        match self {
            Self::Application(
                ApplicationError::AudioConversionFailed(cause)
                | ApplicationError::AudioDecodeFailed(cause)
                | ApplicationError::RecognitionServiceError(cause)
                | ApplicationError::SynthesisFailed(cause)
                | ApplicationError::Translation(cause)
                | ApplicationError::Storage(cause)
                | ApplicationError::Configuration(cause),
            ) => Some(cause.clone()),
            Self::Application(ApplicationError::TranslationDegraded { cause, .. }) => {
                Some(cause.clone())
            },
            Self::Template(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(code = self.code(), error = %self, "Request failed");
        } else {
            warn!(code = self.code(), error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error: match &self {
                Self::InvalidBody { message, .. } => message.clone(),
                other => other.to_string(),
            },
            code: self.code().to_string(),
            details: self.details(),
        };

        (status, Json(body)).into_response()
    }
}
