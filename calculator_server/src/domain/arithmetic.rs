use crate::domain::entities::{Number, Operation};
use crate::domain::errors::CalculationError;

impl Operation {
    // Apply the operation to two operands.
    pub fn apply(self, a: Number, b: Number) -> Result<Number, CalculationError> {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply(a, b),
            Operation::Divide => divide(a, b),
        }
    }
}

pub fn add(a: Number, b: Number) -> Result<Number, CalculationError> {
    combine(a, b, i64::checked_add, |x, y| x + y)
}

pub fn subtract(a: Number, b: Number) -> Result<Number, CalculationError> {
    combine(a, b, i64::checked_sub, |x, y| x - y)
}

pub fn multiply(a: Number, b: Number) -> Result<Number, CalculationError> {
    combine(a, b, i64::checked_mul, |x, y| x * y)
}

// Always produces a float; the zero check runs before any division.
pub fn divide(a: Number, b: Number) -> Result<Number, CalculationError> {
    if b.is_zero() {
        return Err(CalculationError::DivisionByZero);
    }

    finite(a.as_f64() / b.as_f64())
}

// Integer arithmetic when both operands are integers and the result fits,
// floating point otherwise.
fn combine(
    a: Number,
    b: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Number, CalculationError> {
    if let (Number::Int(x), Number::Int(y)) = (a, b) {
        if let Some(value) = int_op(x, y) {
            return Ok(Number::Int(value));
        }
    }

    finite(float_op(a.as_f64(), b.as_f64()))
}

fn finite(value: f64) -> Result<Number, CalculationError> {
    if value.is_finite() {
        Ok(Number::Float(value))
    } else {
        Err(CalculationError::NonFiniteResult)
    }
}
