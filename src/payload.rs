//! JSON request body parsing.
//!
//! Body handling is split into two explicit steps so each failure maps to its own
//! status code: decoding the raw body (`Malformed`, a server error for client
//! compatibility) and validating the decoded value (`MissingField`, a client
//! error). A field that is present in some form but cannot be used at all is
//! `Unusable`, which is also a server error.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    /// No body, wrong content type, or invalid JSON
    #[error("malformed JSON body: {0}")]
    Malformed(String),

    /// Body decoded but the field is absent, null, or the body is not an object
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    /// Field cannot be read or has a type the handler cannot work with
    #[error("field '{field}' is unusable: {reason}")]
    Unusable {
        field: &'static str,
        reason: &'static str,
    },
}

/// Decode step: unwrap the result of axum's `Json` extractor.
pub fn decode(body: Result<Json<Value>, JsonRejection>) -> Result<Value, PayloadError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| PayloadError::Malformed(rejection.body_text()))
}

/// Validation step: look up a required field in a decoded body.
///
/// Empty objects, non-object bodies and explicit `null` values all count as missing.
pub fn required_field<'a>(body: &'a Value, field: &'static str) -> Result<&'a Value, PayloadError> {
    match body.as_object().and_then(|map| map.get(field)) {
        Some(Value::Null) | None => Err(PayloadError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

/// Render a JSON value as greeting text.
///
/// Strings are used verbatim and booleans are capitalised (`True`/`False`) as
/// existing clients expect. Everything else is rendered as JSON text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_field_present() {
        let body = json!({"name": "Ada"});
        assert_eq!(required_field(&body, "name").unwrap(), &json!("Ada"));
    }

    #[test]
    fn test_required_field_missing() {
        for body in [json!({}), json!({"invalid": "data"}), json!({"name": null})] {
            assert_eq!(
                required_field(&body, "name"),
                Err(PayloadError::MissingField("name"))
            );
        }
    }

    #[test]
    fn test_required_field_non_object() {
        // Non-object bodies never carry a `name` key, even when they mention it
        for body in [json!(null), json!([]), json!(["name"]), json!("my name"), json!(0)] {
            assert_eq!(
                required_field(&body, "name"),
                Err(PayloadError::MissingField("name"))
            );
        }
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("Ada")), "Ada");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(1.5)), "1.5");
        assert_eq!(display_value(&json!(true)), "True");
        assert_eq!(display_value(&json!(false)), "False");
    }

    #[test]
    fn test_decode_ok() {
        let value = decode(Ok(Json(json!({"name": "Ada"})))).unwrap();
        assert_eq!(value["name"], "Ada");
    }
}
