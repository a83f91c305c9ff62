//! Postal address aggregate.

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{Country, LetterString, PostalCode};

/// A validated postal address.
///
/// Only the command assemblers in [`crate::commands`] build addresses, so a
/// value of this type always holds a known country, a letter-only city and a
/// well-formed postal code. The two address lines are free text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Address {
    country: Country,
    city: LetterString,
    postal_code: PostalCode,
    address_line1: String,
    address_line2: String,
}

impl Address {
    pub(crate) const fn from_parts(
        country: Country,
        city: LetterString,
        postal_code: PostalCode,
        address_line1: String,
        address_line2: String,
    ) -> Self {
        Self {
            country,
            city,
            postal_code,
            address_line1,
            address_line2,
        }
    }

    /// Returns the country.
    #[must_use]
    pub const fn country(&self) -> Country {
        self.country
    }

    /// Returns the city.
    #[must_use]
    pub const fn city(&self) -> &LetterString {
        &self.city
    }

    /// Returns the postal code.
    #[must_use]
    pub const fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    /// Returns the first address line.
    #[must_use]
    pub fn address_line1(&self) -> &str {
        &self.address_line1
    }

    /// Returns the second address line.
    #[must_use]
    pub fn address_line2(&self) -> &str {
        &self.address_line2
    }
}
