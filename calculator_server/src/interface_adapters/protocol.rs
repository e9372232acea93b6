use crate::domain::Number;
use serde::Serialize;

// Response payload for a successful calculation.
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub result: Number,
}

// Response payload for the health probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

// Error envelope shared by every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
