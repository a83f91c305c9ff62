//! Card number value object.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
#[cfg(feature = "serde")]
use serde::Serialize;

use super::constrained_type;
use crate::validation::ValidationResult;

/// Number of digits in a card number.
pub const CARD_NUMBER_LENGTH: usize = 16;

static CARD_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{16}$").expect("Invalid card number regex pattern"));

/// A card number: exactly 16 ASCII digits.
///
/// Whitespace in the raw input is ignored, so differently formatted inputs
/// with the same digits construct equal values.
///
/// # Examples
///
/// ```
/// use card_management::domain::CardNumber;
///
/// let compact = CardNumber::create("cardNumber", "0000000000000000");
/// let spaced = CardNumber::create("cardNumber", "0000 0000 0000 0000");
/// assert_eq!(compact, spaced);
///
/// assert!(CardNumber::create("cardNumber", "000").is_invalid());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CardNumber(String);

impl CardNumber {
    /// Validates a raw card number.
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field path used in error messages
    /// * `raw` - Input, possibly grouped with spaces
    pub fn create(field_name: &str, raw: &str) -> ValidationResult<Self> {
        let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        constrained_type::create_like(
            field_name,
            Self,
            &CARD_NUMBER_PATTERN,
            "Card number must be 16 digits",
            &digits,
        )
    }

    /// Returns the normalized digit string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1234567812345678")]
    #[case("1234 5678 1234 5678")]
    #[case(" 1234\t5678\n1234 5678 ")]
    fn whitespace_is_stripped(#[case] raw: &str) {
        let number = CardNumber::create("cardNumber", raw).to_option().unwrap();
        assert_eq!(number.value(), "1234567812345678");
    }

    #[rstest]
    #[case("", "Must not be empty")]
    #[case("    ", "Must not be empty")]
    #[case("000", "Card number must be 16 digits")]
    #[case("12345678123456789", "Card number must be 16 digits")]
    #[case("1234-5678-1234-5678", "Card number must be 16 digits")]
    #[case("١٢٣٤٥٦٧٨١٢٣٤٥٦٧٨", "Card number must be 16 digits")]
    fn malformed_numbers_fail_on_the_field(#[case] raw: &str, #[case] message: &str) {
        let errors = CardNumber::create("cardNumber", raw).into_result().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().field_path, "cardNumber");
        assert_eq!(errors.first().message, message);
    }
}
