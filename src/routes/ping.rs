//! Ping endpoint.

use axum::Json;
use tracing::instrument;

use super::MessageResponse;

/// Always responds with `{"message": "pong"}`.
#[instrument(name = "ping::ping")]
pub async fn ping() -> Json<MessageResponse> {
    tracing::info!("Ping endpoint accessed");
    Json(MessageResponse::new("pong"))
}
