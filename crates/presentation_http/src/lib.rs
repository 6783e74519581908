//! LinguaVox HTTP presentation layer
//!
//! Serves the landing page and the `/text-to-voice` and `/voice-to-text`
//! endpoints on top of the application services.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use middleware::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
pub use routes::create_router;
pub use state::AppState;
