pub mod arithmetic;
pub mod entities;
pub mod errors;

pub use entities::{CalculationRequest, Number, Operation};
pub use errors::CalculationError;
