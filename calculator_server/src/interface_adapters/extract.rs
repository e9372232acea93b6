use crate::domain::{CalculationRequest, Number};
use crate::interface_adapters::errors::ApiError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
    http::StatusCode,
};
use serde_json::{Map, Value};
use tracing::debug;

// Extractor for `{"a": <number>, "b": <number>}` bodies.
//
// The body is parsed as JSON regardless of the `Content-Type` header, and
// field problems are reported together as a single validation error.
#[derive(Debug)]
pub struct CalculationPayload(pub CalculationRequest);

impl<S> FromRequest<S> for CalculationPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(map_bytes_rejection)?;

        let value: Value = serde_json::from_slice(&body)
            .map_err(|err| ApiError::Validation(format!("Malformed JSON body: {err}")))?;

        parse_calculation_request(&value).map(CalculationPayload)
    }
}

fn map_bytes_rejection(rejection: BytesRejection) -> ApiError {
    debug!(reason = %rejection.body_text(), "failed to buffer request body");

    match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge,
        status => ApiError::UnreadableBody(status),
    }
}

pub fn parse_calculation_request(value: &Value) -> Result<CalculationRequest, ApiError> {
    let Some(fields) = value.as_object() else {
        return Err(ApiError::Validation(
            "Request body must be a JSON object".to_string(),
        ));
    };

    match (number_field(fields, "a"), number_field(fields, "b")) {
        (Ok(a), Ok(b)) => Ok(CalculationRequest { a, b }),
        (a, b) => {
            let problems: Vec<String> = [a.err(), b.err()].into_iter().flatten().collect();
            Err(ApiError::Validation(problems.join("; ")))
        }
    }
}

fn number_field(fields: &Map<String, Value>, name: &str) -> Result<Number, String> {
    match fields.get(name) {
        None => Err(format!("Field '{name}' is required")),
        Some(Value::Null) => Err(format!("Field '{name}' must not be null")),
        Some(value) => {
            coerce_number(value).ok_or_else(|| format!("Field '{name}' must be a valid number"))
        }
    }
}

// Accepts JSON numbers and numeric strings. Booleans, containers and
// non-finite values are rejected.
pub fn coerce_number(value: &Value) -> Option<Number> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .map(Number::Int)
            .or_else(|| number.as_f64().filter(|v| v.is_finite()).map(Number::Float)),
        Value::String(text) => parse_numeric_str(text.trim()),
        _ => None,
    }
}

fn parse_numeric_str(text: &str) -> Option<Number> {
    if let Ok(value) = text.parse::<i64>() {
        return Some(Number::Int(value));
    }

    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Number::Float)
}
