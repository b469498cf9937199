//! Personalised greeting endpoint.
//!
//! The body is decoded and validated as two separate steps. A body that cannot be
//! decoded at all (no body, wrong content type, invalid JSON) yields a 500, while a
//! decoded body without a usable `name` yields a 400. Existing clients depend on
//! that split, so a missing body is deliberately not reported as a client error.

use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value;
use tracing::instrument;

use super::MessageResponse;
use crate::error::AppError;
use crate::payload::{self, display_value, required_field, PayloadError};
use crate::timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelloRequest {
    pub name: String,
}

impl TryFrom<&Value> for HelloRequest {
    type Error = PayloadError;

    fn try_from(body: &Value) -> Result<Self, Self::Error> {
        let name = required_field(body, "name")?;
        Ok(Self {
            name: display_value(name),
        })
    }
}

pub fn greeting(name: &str, current_time: &str) -> String {
    format!("Hello {}, current time is {}", name, current_time)
}

#[instrument(name = "hello::hello", skip(body))]
pub async fn hello(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::info!("Hello endpoint accessed");

    let body = payload::decode(body)?;
    let request = HelloRequest::try_from(&body)?;

    let message = greeting(&request.name, &timestamp::now());
    tracing::info!(name = %request.name, "Hello response sent");

    Ok(Json(MessageResponse::new(message)))
}
