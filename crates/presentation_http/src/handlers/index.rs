//! Landing page handler

use axum::{extract::State, response::Html};
use infrastructure::IndexPage;

use crate::{error::ApiError, state::AppState};

/// Render the landing page with both forms
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let html = state.templates.render_index(&IndexPage::default())?;
    Ok(Html(html))
}
