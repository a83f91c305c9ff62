//! Field-level validation errors.
//!
//! A [`FieldValidationError`] names one failing field by its path. Failures
//! travel as [`ValidationErrors`], a non-empty ordered collection whose order
//! is the evaluation order of the validations that produced it.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::typeclass::Semigroup;

/// One failing field: where it is and what is wrong with it.
///
/// Construction performs no validation of its own.
///
/// # Examples
///
/// ```
/// use card_management::errors::FieldValidationError;
///
/// let error = FieldValidationError::new("cardNumber", "Card number must be 16 digits");
/// assert_eq!(error.field_path, "cardNumber");
/// assert_eq!(
///     error.to_string(),
///     "Field [cardNumber] is invalid: Card number must be 16 digits"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[error("Field [{field_path}] is invalid: {message}")]
pub struct FieldValidationError {
    /// Path of the field that failed, e.g. `address.postalCode`.
    pub field_path: String,
    /// Why the field was rejected.
    pub message: String,
}

impl FieldValidationError {
    /// Creates a new `FieldValidationError`.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_path: field_path.into(),
            message: message.into(),
        }
    }

    /// Returns the same error nested under `prefix`, e.g. `address.city`.
    #[must_use]
    pub fn nested_under(self, prefix: &str) -> Self {
        Self {
            field_path: format!("{prefix}.{}", self.field_path),
            message: self.message,
        }
    }
}

/// A non-empty, ordered collection of [`FieldValidationError`]s.
///
/// The only ways to obtain one are [`ValidationErrors::single`],
/// [`Semigroup::combine`] and the fallible [`ValidationErrors::from_vec`], so
/// an empty collection cannot exist. Duplicates are kept.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidationErrors(Vec<FieldValidationError>);

impl ValidationErrors {
    /// Creates a collection holding exactly one error.
    #[must_use]
    pub fn single(error: FieldValidationError) -> Self {
        Self(vec![error])
    }

    /// Creates a collection from a vector, or `None` if it is empty.
    #[must_use]
    pub fn from_vec(errors: Vec<FieldValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// Returns the number of errors. Always at least one.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the first error in evaluation order.
    #[must_use]
    pub fn first(&self) -> &FieldValidationError {
        &self.0[0]
    }

    /// Returns an iterator over the errors in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldValidationError> {
        self.0.iter()
    }

    /// Returns the field paths in evaluation order.
    pub fn field_paths(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|error| error.field_path.as_str())
    }

    /// Prefixes every path with `prefix`.
    #[must_use]
    pub fn nested_under(self, prefix: &str) -> Self {
        Self(
            self.0
                .into_iter()
                .map(|error| error.nested_under(prefix))
                .collect(),
        )
    }

    /// Converts to a vector of errors.
    #[must_use]
    pub fn into_vec(self) -> Vec<FieldValidationError> {
        self.0
    }
}

impl Semigroup for ValidationErrors {
    fn combine(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }
}

impl From<FieldValidationError> for ValidationErrors {
    fn from(error: FieldValidationError) -> Self {
        Self::single(error)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(formatter, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = FieldValidationError;
    type IntoIter = std::vec::IntoIter<FieldValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldValidationError;
    type IntoIter = std::slice::Iter<'a, FieldValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ValidationErrors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let errors = Vec::<FieldValidationError>::deserialize(deserializer)?;
        Self::from_vec(errors)
            .ok_or_else(|| serde::de::Error::custom("validation errors must not be empty"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn from_vec_rejects_empty() {
        assert_eq!(ValidationErrors::from_vec(Vec::new()), None);
    }

    #[rstest]
    fn combine_keeps_left_before_right_and_duplicates() {
        let left = ValidationErrors::single(FieldValidationError::new("name", "left"));
        let right = ValidationErrors::from_vec(vec![
            FieldValidationError::new("name", "right"),
            FieldValidationError::new("city", "right"),
        ])
        .unwrap();

        let combined = left.combine(right);

        assert_eq!(combined.field_paths().collect::<Vec<_>>(), vec!["name", "name", "city"]);
        assert_eq!(combined.first().message, "left");
    }

    #[rstest]
    fn display_joins_with_semicolons() {
        let city = FieldValidationError::new("city", "Must contain only letters");
        let postal_code = FieldValidationError::new("postalCode", "Must be 5 or 6 digits");
        let errors = ValidationErrors::single(city).combine(ValidationErrors::single(postal_code));

        assert_eq!(
            errors.to_string(),
            "Field [city] is invalid: Must contain only letters; \
             Field [postalCode] is invalid: Must be 5 or 6 digits"
        );
    }

    #[rstest]
    fn nested_under_prefixes_every_path() {
        let errors = ValidationErrors::single(FieldValidationError::new("city", "bad"))
            .combine(ValidationErrors::single(FieldValidationError::new("country", "bad")))
            .nested_under("address");

        assert_eq!(
            errors.field_paths().collect::<Vec<_>>(),
            vec!["address.city", "address.country"]
        );
    }
}
