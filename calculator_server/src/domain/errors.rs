use thiserror::Error;

// Domain-level errors raised while computing a result.
// The display text is returned to callers verbatim.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    #[error("Division by zero is not allowed")]
    DivisionByZero,
    #[error("Result is out of the representable range")]
    NonFiniteResult,
}
