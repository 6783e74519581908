//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let audio_limit = state.config.server.max_body_size_audio_bytes;

    Router::new()
        .route("/", get(handlers::index::index))
        .route("/health", get(handlers::health::health_check))
        .route("/text-to-voice", post(handlers::speech::text_to_voice))
        .route(
            "/voice-to-text",
            post(handlers::speech::voice_to_text).layer(DefaultBodyLimit::max(audio_limit)),
        )
        .layer(RequestIdLayer::new())
        .with_state(state)
}
