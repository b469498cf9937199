//! Home page handler.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;
use crate::templates::render_home;
use crate::timestamp;

/// Renders the home page with the configured application name and current time.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    tracing::info!("Home page accessed");

    let html = render_home(&state.tera, &state.config.service.name, &timestamp::now())?;
    Ok(Html(html))
}
