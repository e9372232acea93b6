pub mod calculate;

pub use calculate::CalculateUseCase;
