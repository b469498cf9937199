//! Health check endpoint for container orchestration.
//!
//! Used by Kubernetes liveness and readiness probes. It touches no external
//! resource and cannot fail, so a response only proves that the process is
//! serving HTTP.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::config::{HEALTHY_STATUS, SERVICE_VERSION};
use crate::state::AppState;
use crate::timestamp;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub version: String,
}

impl HealthStatus {
    /// Snapshot taken now; never cached.
    pub fn current(service: &str) -> Self {
        Self {
            status: HEALTHY_STATUS.to_string(),
            timestamp: timestamp::now(),
            service: service.to_string(),
            version: SERVICE_VERSION.to_string(),
        }
    }
}

/// Health check handler.
#[instrument(name = "health::health", skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    tracing::info!("Health check endpoint accessed");
    Json(HealthStatus::current(&state.config.service.name))
}
