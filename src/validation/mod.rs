//! The validation result type and its combinators.

mod result;

pub use result::{REQUIRED_MESSAGE, ValidationResult};
