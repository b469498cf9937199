//! Parity check endpoint, registered only when `enable_iseven` is set.
//!
//! Parity is signalled by status code: 200 for even, 400 for odd. The body
//! repeats the number and the verdict. Any body the check cannot run on,
//! including one without `number`, is a server error.

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tracing::instrument;

use crate::error::AppError;
use crate::payload::{self, PayloadError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsEvenRequest {
    pub number: Number,
}

impl TryFrom<&Value> for IsEvenRequest {
    type Error = PayloadError;

    fn try_from(body: &Value) -> Result<Self, Self::Error> {
        let value = body
            .as_object()
            .and_then(|map| map.get("number"))
            .ok_or(PayloadError::Unusable {
                field: "number",
                reason: "missing",
            })?;

        match value {
            Value::Number(number) => Ok(Self {
                number: number.clone(),
            }),
            _ => Err(PayloadError::Unusable {
                field: "number",
                reason: "not a number",
            }),
        }
    }
}

/// Integers are checked exactly. Fractions and integers beyond 64 bits are
/// checked on their `f64` value.
pub fn is_even(number: &Number) -> bool {
    if let Some(n) = number.as_u64() {
        n % 2 == 0
    } else if let Some(n) = number.as_i64() {
        n % 2 == 0
    } else {
        number.as_f64().is_some_and(|f| f % 2.0 == 0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsEvenResponse {
    pub number: Number,
    pub even: bool,
}

#[instrument(name = "iseven::iseven", skip(body))]
pub async fn iseven(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<IsEvenResponse>), AppError> {
    tracing::info!("Iseven endpoint accessed");

    let body = payload::decode(body)?;
    let IsEvenRequest { number } = IsEvenRequest::try_from(&body)?;

    let even = is_even(&number);
    let status = if even {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    tracing::info!(%number, even, "Iseven response sent");

    Ok((status, Json(IsEvenResponse { number, even })))
}
