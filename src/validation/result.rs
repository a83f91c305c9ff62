//! `ValidationResult`: success or a non-empty list of field errors.
//!
//! Two composition disciplines are available on the same type:
//!
//! - **fail-fast**: [`ValidationResult::bind`] (also [`Monad::flat_map`]) runs
//!   the continuation only on success, so the first failure wins.
//! - **accumulating**: [`ValidationResult::apply`], [`ValidationResult::map2`]
//!   and [`ValidationResult::map3`] (also the [`Applicative`] methods) evaluate
//!   every argument and concatenate failures left to right.
//!
//! # Examples
//!
//! ```rust
//! use card_management::validation::ValidationResult;
//!
//! let month: ValidationResult<u16> =
//!     ValidationResult::field_error("expirationMonth", "Must be 1..=12");
//! let year: ValidationResult<u16> =
//!     ValidationResult::field_error("expirationYear", "Out of range");
//!
//! // Fail-fast: only the first error surfaces.
//! let fail_fast = month.clone().bind(|m| year.clone().map(move |y| (m, y)));
//! assert_eq!(fail_fast.errors().map(|errors| errors.len()), Some(1));
//!
//! // Accumulating: both errors surface, in argument order.
//! let accumulated = month.map2(year, |m, y| (m, y));
//! assert_eq!(accumulated.errors().map(|errors| errors.len()), Some(2));
//! ```

use crate::errors::{DomainError, DomainResult, FieldValidationError, ValidationErrors};
use crate::typeclass::{Applicative, Functor, Monad, Semigroup, TypeConstructor};

/// Message used when a required optional field is absent.
pub const REQUIRED_MESSAGE: &str = "Value is required";

/// The outcome of validating raw input into a value of `A`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValidationResult<A> {
    /// Validation succeeded.
    Valid(A),
    /// Validation failed with one or more field errors.
    Invalid(ValidationErrors),
}

impl<A> ValidationResult<A> {
    /// Creates a successful result.
    #[must_use]
    pub const fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates a failed result from an error collection.
    #[must_use]
    pub const fn invalid(errors: ValidationErrors) -> Self {
        Self::Invalid(errors)
    }

    /// Creates a failed result for a single field.
    #[must_use]
    pub fn field_error(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid(ValidationErrors::single(FieldValidationError::new(
            field_path, message,
        )))
    }

    /// Turns a possibly-absent field into a result.
    ///
    /// `None` fails on `field_path` with [`REQUIRED_MESSAGE`].
    #[must_use]
    pub fn required(field_path: &str, value: Option<A>) -> Self {
        value.map_or_else(
            || Self::field_error(field_path, REQUIRED_MESSAGE),
            Self::Valid,
        )
    }

    /// Returns true if this is a successful result.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns true if this is a failed result.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the errors of a failed result.
    #[must_use]
    pub const fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Returns the value of a successful result, discarding errors.
    #[must_use]
    pub fn to_option(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Transforms the success payload; failures pass through unchanged.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> ValidationResult<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => ValidationResult::Valid(function(value)),
            Self::Invalid(errors) => ValidationResult::Invalid(errors),
        }
    }

    /// Fail-fast composition.
    ///
    /// On success returns `function(value)`; on failure returns the failure
    /// without evaluating `function`.
    #[must_use]
    pub fn bind<B, F>(self, function: F) -> ValidationResult<B>
    where
        F: FnOnce(A) -> ValidationResult<B>,
    {
        match self {
            Self::Valid(value) => function(value),
            Self::Invalid(errors) => ValidationResult::Invalid(errors),
        }
    }

    /// Accumulating combination of two independent results.
    ///
    /// Two failures are concatenated, `self`'s errors first.
    #[must_use]
    pub fn map2<B, C, F>(self, other: ValidationResult<B>, function: F) -> ValidationResult<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Valid(a), ValidationResult::Valid(b)) => ValidationResult::Valid(function(a, b)),
            (Self::Invalid(left), ValidationResult::Invalid(right)) => {
                ValidationResult::Invalid(left.combine(right))
            }
            (Self::Invalid(errors), ValidationResult::Valid(_))
            | (Self::Valid(_), ValidationResult::Invalid(errors)) => {
                ValidationResult::Invalid(errors)
            }
        }
    }

    /// Accumulating combination of three independent results.
    #[must_use]
    pub fn map3<B, C, D, F>(
        self,
        second: ValidationResult<B>,
        third: ValidationResult<C>,
        function: F,
    ) -> ValidationResult<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.map2(second, |a, b| (a, b))
            .map2(third, |(a, b), c| function(a, b, c))
    }

    /// Accumulating application of a validated function to a validated argument.
    ///
    /// | `self`       | `argument`   | result            |
    /// |--------------|--------------|-------------------|
    /// | `Valid(f)`   | `Valid(a)`   | `Valid(f(a))`     |
    /// | `Valid(f)`   | `Invalid(e)` | `Invalid(e)`      |
    /// | `Invalid(e)` | `Valid(a)`   | `Invalid(e)`      |
    /// | `Invalid(l)` | `Invalid(r)` | `Invalid(l ++ r)` |
    #[must_use]
    pub fn apply<B, Output>(self, argument: ValidationResult<B>) -> ValidationResult<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(argument, |function, value| function(value))
    }

    /// Prefixes every error path with `prefix` (e.g. `address`).
    #[must_use]
    pub fn nested_under(self, prefix: &str) -> Self {
        match self {
            Self::Valid(value) => Self::Valid(value),
            Self::Invalid(errors) => Self::Invalid(errors.nested_under(prefix)),
        }
    }

    /// Converts to a `Result` over the raw error collection.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationErrors` of a failed result.
    pub fn into_result(self) -> Result<A, ValidationErrors> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Lifts into the crate-wide error type.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] for a failed result.
    pub fn into_domain_result(self) -> DomainResult<A> {
        self.into_result().map_err(DomainError::from)
    }
}

impl<A> From<Result<A, ValidationErrors>> for ValidationResult<A> {
    fn from(result: Result<A, ValidationErrors>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(errors) => Self::Invalid(errors),
        }
    }
}

impl<A> From<ValidationResult<A>> for Result<A, ValidationErrors> {
    fn from(result: ValidationResult<A>) -> Self {
        result.into_result()
    }
}

// =============================================================================
// Type class instances
// =============================================================================

impl<A> TypeConstructor for ValidationResult<A> {
    type Inner = A;
    type WithType<B> = ValidationResult<B>;
}

impl<A> Functor for ValidationResult<A> {
    fn fmap<B, F>(self, function: F) -> ValidationResult<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> ValidationResult<B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Valid(value) => ValidationResult::Valid(function(value)),
            Self::Invalid(errors) => ValidationResult::Invalid(errors.clone()),
        }
    }
}

#[allow(clippy::use_self)]
impl<A> Applicative for ValidationResult<A> {
    fn pure<B>(value: B) -> ValidationResult<B> {
        ValidationResult::Valid(value)
    }

    fn map2<B, C, F>(self, other: ValidationResult<B>, function: F) -> ValidationResult<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Self::map2(self, other, function)
    }

    fn map3<B, C, D, F>(
        self,
        second: ValidationResult<B>,
        third: ValidationResult<C>,
        function: F,
    ) -> ValidationResult<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Self::map3(self, second, third, function)
    }

    fn apply<B, Output>(self, other: ValidationResult<B>) -> ValidationResult<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Self::apply(self, other)
    }
}

impl<A> Monad for ValidationResult<A> {
    fn flat_map<B, F>(self, function: F) -> ValidationResult<B>
    where
        F: FnOnce(A) -> ValidationResult<B>,
    {
        self.bind(function)
    }
}

static_assertions::assert_impl_all!(ValidationResult<String>: Send, Sync);
static_assertions::assert_impl_all!(ValidationErrors: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn failure<T>(path: &str) -> ValidationResult<T> {
        ValidationResult::field_error(path, "invalid")
    }

    fn paths<T>(result: &ValidationResult<T>) -> Vec<String> {
        result
            .errors()
            .map(|errors| errors.field_paths().map(str::to_string).collect())
            .unwrap_or_default()
    }

    #[rstest]
    fn map_passes_failure_through() {
        let result = failure::<i32>("amount").map(|n| n * 2);
        assert_eq!(result, failure("amount"));
    }

    #[rstest]
    fn bind_does_not_evaluate_continuation_on_failure() {
        let calls = Cell::new(0);
        let result = failure::<i32>("first").bind(|n| {
            calls.set(calls.get() + 1);
            ValidationResult::valid(n)
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(paths(&result), vec!["first"]);
    }

    #[rstest]
    #[case(true, true, vec![])]
    #[case(true, false, vec!["argument"])]
    #[case(false, true, vec!["function"])]
    #[case(false, false, vec!["function", "argument"])]
    fn apply_follows_the_accumulation_table(
        #[case] function_valid: bool,
        #[case] argument_valid: bool,
        #[case] expected: Vec<&str>,
    ) {
        let function: ValidationResult<fn(i32) -> i32> = if function_valid {
            ValidationResult::valid((|n: i32| n + 1) as fn(i32) -> i32)
        } else {
            failure("function")
        };
        let argument = if argument_valid {
            ValidationResult::valid(1)
        } else {
            failure("argument")
        };

        let result = function.apply(argument);

        assert_eq!(paths(&result), expected);
        if expected.is_empty() {
            assert_eq!(result, ValidationResult::valid(2));
        }
    }

    #[rstest]
    fn curried_apply_chain_collects_in_argument_order() {
        let build = |a: i32| move |b: i32| move |c: i32| a + b + c;

        let result = ValidationResult::valid(build)
            .apply(failure::<i32>("a"))
            .apply(ValidationResult::valid(2))
            .apply(failure::<i32>("c"));

        assert_eq!(paths(&result), vec!["a", "c"]);
    }

    #[rstest]
    fn required_uses_fixed_message() {
        let result: ValidationResult<i32> = ValidationResult::required("holderId", None);
        let errors = result.into_result().unwrap_err();

        assert_eq!(errors.first(), &FieldValidationError::new("holderId", REQUIRED_MESSAGE));
        assert_eq!(ValidationResult::required("holderId", Some(7)), ValidationResult::valid(7));
    }

    #[rstest]
    fn into_domain_result_lifts_failures() {
        let result = failure::<i32>("name").into_domain_result();
        assert!(matches!(result, Err(DomainError::Validation(errors)) if errors.len() == 1));
    }

    #[rstest]
    fn result_round_trips_through_std_result() {
        let original: ValidationResult<i32> = failure("name");
        let std_result: Result<i32, ValidationErrors> = original.clone().into();
        assert_eq!(ValidationResult::from(std_result), original);
    }
}
