//! Card expiry month and year.

#[cfg(feature = "serde")]
use serde::Serialize;

use super::constrained_type;
use crate::config::YearWindow;
use crate::validation::ValidationResult;

/// A calendar month, 1 through 12.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Month(u16);

impl Month {
    /// Validates a raw month number.
    pub fn create(field_name: &str, raw: u16) -> ValidationResult<Self> {
        constrained_type::create_in_range(field_name, Self, 1, 12, raw)
    }

    /// Returns the month number.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

/// A card expiry year inside the configured [`YearWindow`].
///
/// # Examples
///
/// ```
/// use card_management::config::YearWindow;
/// use card_management::domain::Year;
///
/// assert!(Year::create("expirationYear", 2030).is_valid());
/// assert!(Year::create("expirationYear", 1999).is_invalid());
///
/// let narrow = YearWindow::new(2025, 2027).unwrap();
/// assert!(Year::create_within("expirationYear", 2030, narrow).is_invalid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Year(u16);

impl Year {
    /// Validates a raw year against the default window.
    pub fn create(field_name: &str, raw: u16) -> ValidationResult<Self> {
        Self::create_within(field_name, raw, YearWindow::default())
    }

    /// Validates a raw year against `window`.
    pub fn create_within(field_name: &str, raw: u16, window: YearWindow) -> ValidationResult<Self> {
        constrained_type::create_in_range(field_name, Self, window.min(), window.max(), raw)
    }

    /// Returns the year.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}
