use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::borrow::Cow;
use validator::ValidationError;

pub fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

pub fn into_response(error: ValidationError) -> (StatusCode, Json<Value>) {
    let message = error
        .message
        .unwrap_or_else(|| Cow::from(error.code.into_owned()));

    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

/// Mirrors what a JSON client treats as "not provided".
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Accepts integral numbers greater than zero, including `5.0`.
pub fn positive_integer(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };

    if let Some(n) = n.as_u64() {
        return (n > 0).then_some(n);
    }

    n.as_f64()
        .filter(|f| *f > 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
        .map(|f| f as u64)
}

pub fn required_text(
    value: Option<&Value>,
    code: &'static str,
    message: &'static str,
) -> Result<String, ValidationError> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Ok(text.clone()),
        _ => Err(error(code, message)),
    }
}

/// Returns the payload id when it is set and differs from the route id.
pub fn mismatched_id(payload_id: Option<&Value>, route_id: &str) -> Option<String> {
    match payload_id {
        None => None,
        Some(id) if is_falsy(id) => None,
        Some(Value::String(id)) if id == route_id => None,
        Some(Value::String(id)) => Some(id.clone()),
        Some(id) => Some(id.to_string()),
    }
}

pub struct InvalidJson(JsonRejection);

impl From<JsonRejection> for InvalidJson {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection)
    }
}

impl IntoResponse for InvalidJson {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request body: {}", self.0.body_text());
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.0.body_text() })),
        )
            .into_response()
    }
}
