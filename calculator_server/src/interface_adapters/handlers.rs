use crate::domain::{CalculationRequest, Operation};
use crate::interface_adapters::errors::ApiError;
use crate::interface_adapters::extract::CalculationPayload;
use crate::interface_adapters::protocol::{CalculationResponse, HealthResponse};
use crate::use_cases::CalculateUseCase;
use axum::{Json, response::IntoResponse, response::Response};
use std::any::Any;

// Handler for `POST /post/add`.
#[tracing::instrument(name = "add", skip_all, fields(a = %payload.0.a, b = %payload.0.b))]
pub async fn add(payload: CalculationPayload) -> Result<Json<CalculationResponse>, ApiError> {
    calculate(Operation::Add, payload.0)
}

// Handler for `POST /post/subtract`.
#[tracing::instrument(name = "subtract", skip_all, fields(a = %payload.0.a, b = %payload.0.b))]
pub async fn subtract(payload: CalculationPayload) -> Result<Json<CalculationResponse>, ApiError> {
    calculate(Operation::Subtract, payload.0)
}

// Handler for `POST /post/multiply`.
#[tracing::instrument(name = "multiply", skip_all, fields(a = %payload.0.a, b = %payload.0.b))]
pub async fn multiply(payload: CalculationPayload) -> Result<Json<CalculationResponse>, ApiError> {
    calculate(Operation::Multiply, payload.0)
}

// Handler for `POST /post/divide`.
#[tracing::instrument(name = "divide", skip_all, fields(a = %payload.0.a, b = %payload.0.b))]
pub async fn divide(payload: CalculationPayload) -> Result<Json<CalculationResponse>, ApiError> {
    calculate(Operation::Divide, payload.0)
}

fn calculate(
    operation: Operation,
    request: CalculationRequest,
) -> Result<Json<CalculationResponse>, ApiError> {
    let use_case = CalculateUseCase { operation };
    let result = use_case.execute(&request)?;

    Ok(Json(CalculationResponse { result }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

// Converts a caught handler panic into the sanitized 500 envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let reason = if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(reason).into_response()
}
