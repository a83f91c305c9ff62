//! Error algebra for the validation core.
//!
//! - [`FieldValidationError`] / [`ValidationErrors`]: malformed input
//! - [`OperationNotAllowedError`]: illegal business state
//! - [`DataRelatedError`]: persistence outcomes (shape only)
//! - [`DomainError`]: the sum of all of the above plus [`Defect`]

mod domain;
mod validation;

pub use domain::{DataRelatedError, Defect, DomainError, DomainResult, OperationNotAllowedError};
pub use validation::{FieldValidationError, ValidationErrors};
