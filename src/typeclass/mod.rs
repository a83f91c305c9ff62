//! Type class traits the validation core is built on.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`]: mapping over a success payload
//! - [`Applicative`]: combining independent validations, accumulating errors
//! - [`Monad`]: sequencing dependent validations, stopping at the first error
//! - [`Semigroup`]: associative combination of error collections
//!
//! [`ValidationResult`](crate::validation::ValidationResult) implements
//! `Functor`, `Applicative` and `Monad`; [`ValidationErrors`](crate::errors::ValidationErrors)
//! implements `Semigroup`.

mod applicative;
mod functor;
mod higher;
mod monad;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use semigroup::Semigroup;
