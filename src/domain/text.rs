//! Constrained text: letter-only strings and postal codes.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
#[cfg(feature = "serde")]
use serde::Serialize;

use super::constrained_type::{self, EMPTY_MESSAGE};
use crate::validation::ValidationResult;

/// A non-empty string made only of alphabetic characters.
///
/// # Examples
///
/// ```
/// use card_management::domain::LetterString;
///
/// let name = LetterString::create("name", "Alice").to_option().unwrap();
/// assert_eq!(name.value(), "Alice");
///
/// assert!(LetterString::create("name", "").is_invalid());
/// assert!(LetterString::create("name", "R2D2").is_invalid());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LetterString(String);

impl LetterString {
    /// Validates a raw letter-only string.
    pub fn create(field_name: &str, raw: &str) -> ValidationResult<Self> {
        if raw.is_empty() {
            ValidationResult::field_error(field_name, EMPTY_MESSAGE)
        } else if raw.chars().all(char::is_alphabetic) {
            ValidationResult::valid(Self(raw.to_string()))
        } else {
            ValidationResult::field_error(field_name, "Must contain only letters")
        }
    }

    /// Returns the inner string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LetterString {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

static POSTAL_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5,6}$").expect("Invalid postal code regex pattern"));

/// A postal code of five or six ASCII digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PostalCode(String);

impl PostalCode {
    /// Validates a raw postal code.
    pub fn create(field_name: &str, raw: &str) -> ValidationResult<Self> {
        constrained_type::create_like(
            field_name,
            Self,
            &POSTAL_CODE_PATTERN,
            "Must be 5 or 6 digits",
            raw,
        )
    }

    /// Returns the inner string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}
