//! Helpers shared by the smart constructors.
//!
//! Each helper is generic over the target newtype and reports failure as a
//! single-field [`ValidationResult`].

use std::fmt::Display;

use regex::Regex;

use crate::validation::ValidationResult;

/// Message used for empty required text.
pub const EMPTY_MESSAGE: &str = "Must not be empty";

/// Creates a string type that must match `pattern`.
///
/// Empty input fails with [`EMPTY_MESSAGE`]; any other mismatch fails with
/// `mismatch_message`.
pub fn create_like<T, F>(
    field_name: &str,
    constructor: F,
    pattern: &Regex,
    mismatch_message: &str,
    value: &str,
) -> ValidationResult<T>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        ValidationResult::field_error(field_name, EMPTY_MESSAGE)
    } else if pattern.is_match(value) {
        ValidationResult::valid(constructor(value.to_string()))
    } else {
        ValidationResult::field_error(field_name, mismatch_message)
    }
}

/// Creates a type from a value that must lie in `min_value..=max_value`.
pub fn create_in_range<T, N, F>(
    field_name: &str,
    constructor: F,
    min_value: N,
    max_value: N,
    value: N,
) -> ValidationResult<T>
where
    N: PartialOrd + Display,
    F: FnOnce(N) -> T,
{
    if value < min_value {
        ValidationResult::field_error(field_name, format!("Must not be less than {min_value}"))
    } else if value > max_value {
        ValidationResult::field_error(
            field_name,
            format!("Must not be greater than {max_value}"),
        )
    } else {
        ValidationResult::valid(constructor(value))
    }
}
