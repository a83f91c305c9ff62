//! Property-based tests for the laws of `ValidationResult`.
//!
//! - **Functor**: identity and composition of `map`
//! - **Applicative**: identity, homomorphism, and ordered error concatenation
//!   of `apply`
//! - **Monad**: left identity, right identity, associativity, and
//!   short-circuiting of `bind`
//! - **Semigroup**: associativity of `ValidationErrors::combine`

use card_management::errors::{FieldValidationError, ValidationErrors};
use card_management::typeclass::{Applicative, Functor, Monad, Semigroup};
use card_management::validation::ValidationResult;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn field_error_strategy() -> impl Strategy<Value = FieldValidationError> {
    ("[a-z]{1,8}", "[A-Za-z ]{1,16}")
        .prop_map(|(path, message)| FieldValidationError::new(path, message))
}

fn errors_strategy() -> impl Strategy<Value = ValidationErrors> {
    prop::collection::vec(field_error_strategy(), 1..5).prop_map(|errors| {
        ValidationErrors::from_vec(errors).expect("strategy always yields at least one error")
    })
}

fn result_strategy() -> impl Strategy<Value = ValidationResult<i32>> {
    prop_oneof![
        any::<i32>().prop_map(ValidationResult::valid),
        errors_strategy().prop_map(ValidationResult::invalid),
    ]
}

fn half(n: i32) -> ValidationResult<i32> {
    if n % 2 == 0 {
        ValidationResult::valid(n / 2)
    } else {
        ValidationResult::field_error("n", "Must be even")
    }
}

fn positive(n: i32) -> ValidationResult<i32> {
    if n > 0 {
        ValidationResult::valid(n)
    } else {
        ValidationResult::field_error("n", "Must be positive")
    }
}

// =============================================================================
// Functor
// =============================================================================

proptest! {
    #[test]
    fn prop_functor_identity_law(value in result_strategy()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    #[test]
    fn prop_functor_composition_law(value in result_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(3);

        let left = value.clone().map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Applicative
// =============================================================================

proptest! {
    /// `pure(id) <*> v == v`
    #[test]
    fn prop_applicative_identity_law(value in result_strategy()) {
        let identity = ValidationResult::valid(|x: i32| x);
        prop_assert_eq!(identity.apply(value.clone()), value);
    }

    /// `pure(f) <*> pure(x) == pure(f(x))`
    #[test]
    fn prop_applicative_homomorphism_law(value in any::<i32>()) {
        let function = |n: i32| n.wrapping_sub(7);

        let left = ValidationResult::valid(function).apply(ValidationResult::valid(value));
        let right = <ValidationResult<i32> as Applicative>::pure(function(value));

        prop_assert_eq!(left, right);
    }

    /// Errors of the function side come first, then errors of the argument.
    #[test]
    fn prop_apply_concatenates_failures_in_order(
        left in errors_strategy(),
        right in errors_strategy(),
    ) {
        let function: ValidationResult<fn(i32) -> i32> = ValidationResult::invalid(left.clone());
        let result = function.apply(ValidationResult::<i32>::invalid(right.clone()));

        let expected: Vec<_> = left.iter().chain(right.iter()).cloned().collect();
        prop_assert_eq!(result.into_result().unwrap_err().into_vec(), expected);
    }

    #[test]
    fn prop_map2_accumulates_like_apply(
        first in result_strategy(),
        second in result_strategy(),
    ) {
        let add = |a: i32, b: i32| a.wrapping_add(b);

        let via_map2 = first.clone().map2(second.clone(), add);
        let via_apply = first
            .map(|a| move |b: i32| add(a, b))
            .apply(second);

        prop_assert_eq!(via_map2, via_apply);
    }
}

// =============================================================================
// Monad
// =============================================================================

proptest! {
    /// `pure(a).bind(f) == f(a)`
    #[test]
    fn prop_monad_left_identity_law(value in any::<i32>()) {
        prop_assert_eq!(ValidationResult::valid(value).bind(half), half(value));
    }

    /// `m.bind(pure) == m`
    #[test]
    fn prop_monad_right_identity_law(value in result_strategy()) {
        prop_assert_eq!(value.clone().bind(ValidationResult::valid), value);
    }

    /// `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
    #[test]
    fn prop_monad_associativity_law(value in result_strategy()) {
        let left = value.clone().bind(half).bind(positive);
        let right = value.flat_map(|x| half(x).bind(positive));

        prop_assert_eq!(left, right);
    }

    /// A failed result keeps exactly its own errors through any bind.
    #[test]
    fn prop_bind_short_circuits(errors in errors_strategy()) {
        let result = ValidationResult::<i32>::invalid(errors.clone())
            .bind(|_| ValidationResult::<i32>::field_error("unreachable", "never evaluated"));

        prop_assert_eq!(result, ValidationResult::invalid(errors));
    }
}

// =============================================================================
// Semigroup
// =============================================================================

proptest! {
    #[test]
    fn prop_errors_combine_is_associative(
        a in errors_strategy(),
        b in errors_strategy(),
        c in errors_strategy(),
    ) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_errors_combine_preserves_length(a in errors_strategy(), b in errors_strategy()) {
        let expected = a.len() + b.len();
        prop_assert_eq!(a.combine(b).len(), expected);
    }
}
