//! # card-management
//!
//! Validation core for a card-management system.
//!
//! ## Overview
//!
//! Raw, untrusted command models come in; strongly typed domain values or a
//! structured list of field errors come out. The crate provides:
//!
//! - **Error algebra**: validation, operation-not-allowed, data-related and
//!   defect errors, unified under [`errors::DomainError`]
//! - **Validation result**: [`validation::ValidationResult`] with fail-fast
//!   (`bind`) and error-accumulating (`apply`, `map2`, `map3`) composition
//! - **Type classes**: Functor, Applicative, Monad and Semigroup instances
//!   for the validation result
//! - **Domain primitives**: card number, expiry month and year, money,
//!   daily limit, letter strings, postal code, country
//! - **Command assemblers**: raw command models to validated commands
//!
//! The core performs no I/O. Configuration is read only when
//! [`config::ValidationConfig::from_env`] is called.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` for domain values, `Deserialize` for command models
//!   and validation errors
//!
//! ## Example
//!
//! ```rust
//! use card_management::prelude::*;
//!
//! let model = CreateAddressCommandModel {
//!     country: "Atlantis".to_string(),
//!     city: "K1ev".to_string(),
//!     postal_code: "01001".to_string(),
//!     address_line1: "Khreshchatyk 1".to_string(),
//!     address_line2: String::new(),
//! };
//!
//! // Fail-fast stops at the country; accumulating also reports the city.
//! assert_eq!(validate_address_fail_fast(&model).errors().map(ValidationErrors::len), Some(1));
//! assert_eq!(validate_address_accumulating(&model).errors().map(ValidationErrors::len), Some(2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the commands, domain types, errors and the validation result.
///
/// # Usage
///
/// ```rust
/// use card_management::prelude::*;
/// ```
pub mod prelude {
    pub use crate::commands::*;
    pub use crate::config::{ValidationConfig, YearWindow};
    pub use crate::domain::*;
    pub use crate::errors::*;
    pub use crate::typeclass::*;
    pub use crate::validation::*;
}

pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod typeclass;
pub mod validation;
