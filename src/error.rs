//! Handler error type and its JSON error envelope.
//!
//! Every failure is converted at the handler boundary into `{"error": <message>}`
//! with a status code chosen by variant. Server-side failures never leak their
//! details to the client; they are logged instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::payload::PayloadError;

/// Message returned for every 5xx response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing '{0}' field in JSON payload")]
    MissingField(&'static str),

    #[error("Field '{0}' is unusable: {1}")]
    UnusableField(&'static str, &'static str),

    #[error("Request body is not valid JSON: {0}")]
    MalformedBody(String),

    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl From<PayloadError> for AppError {
    fn from(err: PayloadError) -> Self {
        match err {
            PayloadError::Malformed(reason) => AppError::MalformedBody(reason),
            PayloadError::MissingField(field) => AppError::MissingField(field),
            PayloadError::Unusable { field, reason } => AppError::UnusableField(field, reason),
        }
    }
}

/// JSON error body: `{"error": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MalformedBody(_) | AppError::UnusableField(..) | AppError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
            self.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
