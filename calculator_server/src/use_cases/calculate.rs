use crate::domain::{CalculationError, CalculationRequest, Number, Operation};
use tracing::debug;

// Calculation use case bound to a single operation.
pub struct CalculateUseCase {
    pub operation: Operation,
}

impl CalculateUseCase {
    pub fn execute(&self, request: &CalculationRequest) -> Result<Number, CalculationError> {
        let operation = self.operation.name();
        let outcome = self.operation.apply(request.a, request.b);

        match &outcome {
            Ok(result) => debug!(operation, a = %request.a, b = %request.b, %result, "calculation completed"),
            Err(err) => debug!(operation, a = %request.a, b = %request.b, error = %err, "calculation rejected"),
        }

        outcome
    }
}
