//! The closed set of supported countries.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::validation::ValidationResult;

/// A supported country.
///
/// Raw input matches a variant by name, ignoring case and surrounding
/// whitespace.
///
/// # Examples
///
/// ```
/// use card_management::domain::Country;
///
/// assert_eq!(Country::create("country", "armenia").to_option(), Some(Country::Armenia));
/// assert!(Country::create("country", "Atlantis").is_invalid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Country {
    /// Armenia
    Armenia,
    /// Belarus
    Belarus,
    /// Georgia
    Georgia,
    /// Kazakhstan
    Kazakhstan,
    /// Latvia
    Latvia,
    /// Lithuania
    Lithuania,
    /// Russia
    Russia,
    /// Ukraine
    Ukraine,
    /// United Kingdom
    UnitedKingdom,
    /// United States
    UnitedStates,
}

impl Country {
    /// Every supported country.
    pub const ALL: [Self; 10] = [
        Self::Armenia,
        Self::Belarus,
        Self::Georgia,
        Self::Kazakhstan,
        Self::Latvia,
        Self::Lithuania,
        Self::Russia,
        Self::Ukraine,
        Self::UnitedKingdom,
        Self::UnitedStates,
    ];

    /// Returns the identifier raw input is matched against.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Armenia => "Armenia",
            Self::Belarus => "Belarus",
            Self::Georgia => "Georgia",
            Self::Kazakhstan => "Kazakhstan",
            Self::Latvia => "Latvia",
            Self::Lithuania => "Lithuania",
            Self::Russia => "Russia",
            Self::Ukraine => "Ukraine",
            Self::UnitedKingdom => "UnitedKingdom",
            Self::UnitedStates => "UnitedStates",
        }
    }

    /// Looks a country up by name.
    #[must_use]
    pub fn from_name(raw: &str) -> Option<Self> {
        let candidate = raw.trim();
        Self::ALL
            .into_iter()
            .find(|country| country.name().eq_ignore_ascii_case(candidate))
    }

    /// Validates a raw country name.
    pub fn create(field_name: &str, raw: &str) -> ValidationResult<Self> {
        Self::from_name(raw).map_or_else(
            || ValidationResult::field_error(field_name, format!("Unknown country: {raw}")),
            ValidationResult::valid,
        )
    }
}

impl fmt::Display for Country {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_name_round_trips() {
        for country in Country::ALL {
            assert_eq!(Country::from_name(country.name()), Some(country));
        }
    }

    #[rstest]
    #[case("  UnitedKingdom ", Some(Country::UnitedKingdom))]
    #[case("UKRAINE", Some(Country::Ukraine))]
    #[case("United Kingdom", None)]
    #[case("", None)]
    fn lookup_ignores_case_and_padding(#[case] raw: &str, #[case] expected: Option<Country>) {
        assert_eq!(Country::from_name(raw), expected);
    }

    #[rstest]
    fn unknown_country_fails_on_the_field() {
        let errors = Country::create("country", "Narnia").into_result().unwrap_err();

        assert_eq!(errors.first().field_path, "country");
        assert_eq!(errors.first().message, "Unknown country: Narnia");
    }
}
