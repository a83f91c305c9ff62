//! Monad type class: sequencing dependent computations.
//!
//! `flat_map` is the fail-fast ("railway") composition: the continuation only
//! runs when the previous step succeeded, so at most the first failure surfaces
//! through a chain.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequential composition.
///
/// # Examples
///
/// ```rust
/// use card_management::typeclass::Monad;
/// use card_management::validation::ValidationResult;
///
/// let digits: ValidationResult<&str> = ValidationResult::valid("12");
/// let parsed = digits.flat_map(|raw| match raw.parse::<u16>() {
///     Ok(month) => ValidationResult::valid(month),
///     Err(_) => ValidationResult::field_error("month", "Must be a number"),
/// });
/// assert_eq!(parsed, ValidationResult::valid(12));
/// ```
pub trait Monad: Applicative {
    /// Applies a function returning a new monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` matching `Result::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationResult;
    use rstest::rstest;

    #[rstest]
    fn then_replaces_on_success() {
        let first: ValidationResult<i32> = ValidationResult::valid(1);
        assert_eq!(first.then(ValidationResult::valid("next")), ValidationResult::valid("next"));
    }

    #[rstest]
    fn then_keeps_the_first_failure() {
        let first: ValidationResult<i32> = ValidationResult::field_error("first", "bad");
        let second: ValidationResult<i32> = ValidationResult::field_error("second", "bad");

        assert_eq!(first.then(second), ValidationResult::field_error("first", "bad"));
    }

    #[rstest]
    fn left_identity_holds_for_a_failing_continuation() {
        let continuation = |value: i32| -> ValidationResult<i32> {
            if value > 0 {
                ValidationResult::valid(value)
            } else {
                ValidationResult::field_error("value", "Must be positive")
            }
        };

        assert_eq!(ValidationResult::valid(-1).and_then(continuation), continuation(-1));
    }
}
