pub mod amortization;
pub mod currency;
pub mod error;
pub mod types;

#[cfg(feature = "partners")]
pub mod partners;

#[cfg(feature = "presets")]
pub mod presets;

#[cfg(feature = "receipt")]
pub mod receipt;

pub use error::LoanEstimateError;
pub use types::*;

/// Standard result type for all loan-estimate operations
pub type LoanEstimateResult<T> = Result<T, LoanEstimateError>;
