//! Applicative type class: combining independent computations.
//!
//! For [`ValidationResult`](crate::validation::ValidationResult) the
//! applicative combinators are the error-accumulating ones: combining two
//! failures concatenates their errors, left before right.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use card_management::typeclass::Applicative;
//! use card_management::validation::ValidationResult;
//!
//! let left: ValidationResult<u16> = ValidationResult::field_error("month", "bad month");
//! let right: ValidationResult<u16> = ValidationResult::field_error("year", "bad year");
//!
//! let combined = left.map2(right, |month, year| (month, year));
//! assert_eq!(combined.errors().map(|errors| errors.len()), Some(2));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - A function that takes both inner values
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Arguments
    ///
    /// * `other` - An applicative containing the argument
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldValidationError;
    use crate::validation::ValidationResult;
    use rstest::rstest;

    fn failure<T>(path: &str) -> ValidationResult<T> {
        ValidationResult::field_error(path, "invalid")
    }

    #[rstest]
    fn pure_lifts_into_valid() {
        let lifted: ValidationResult<i32> = <ValidationResult<()>>::pure(42);
        assert_eq!(lifted, ValidationResult::valid(42));
    }

    #[rstest]
    fn product_of_two_failures_keeps_both_in_order() {
        let result = failure::<i32>("first").product(failure::<i32>("second"));

        let paths: Vec<&str> = result
            .errors()
            .map(|errors| errors.iter().map(|error| error.field_path.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(paths, vec!["first", "second"]);
    }

    #[rstest]
    fn map3_accumulates_every_failure() {
        let result = failure::<i32>("a").map3(
            ValidationResult::valid(2),
            failure::<i32>("c"),
            |a, b, c| a + b + c,
        );

        let errors: Vec<FieldValidationError> = result.into_result().unwrap_err().into_vec();
        assert_eq!(
            errors,
            vec![
                FieldValidationError::new("a", "invalid"),
                FieldValidationError::new("c", "invalid"),
            ]
        );
    }
}
