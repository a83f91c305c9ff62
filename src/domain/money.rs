//! Monetary values: plain amounts, positive transactions and daily limits.

use std::fmt;

use rust_decimal::Decimal;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::validation::ValidationResult;

/// A monetary amount.
///
/// Balances may hold any amount, so construction is unrestricted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Money(Decimal);

impl Money {
    /// Creates a `Money` value from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is strictly greater than zero.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Decimal methods are not const
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// The amount of a single payment or top-up; always strictly positive.
///
/// # Examples
///
/// ```
/// use card_management::domain::MoneyTransaction;
/// use rust_decimal::Decimal;
///
/// assert!(MoneyTransaction::create("paymentAmount", Decimal::new(1050, 2)).is_valid());
/// assert!(MoneyTransaction::create("paymentAmount", Decimal::ZERO).is_invalid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MoneyTransaction(Money);

impl MoneyTransaction {
    /// Validates a raw transaction amount.
    pub fn create(field_name: &str, raw: Decimal) -> ValidationResult<Self> {
        let amount = Money::new(raw);
        if amount.is_positive() {
            ValidationResult::valid(Self(amount))
        } else {
            ValidationResult::field_error(field_name, "Must be greater than zero")
        }
    }

    /// Returns the transaction amount.
    #[must_use]
    pub const fn value(&self) -> Money {
        self.0
    }
}

/// How much a card may spend per day.
///
/// Either capped at a strictly positive amount or unlimited. Construction
/// never fails: positive amounts become a cap, zero and negative amounts
/// become [`DailyLimit::UNLIMITED`]. The representation is private, so a
/// non-positive cap cannot be built.
///
/// # Examples
///
/// ```
/// use card_management::domain::{DailyLimit, Money};
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     DailyLimit::of_decimal(Decimal::from(500)).cap(),
///     Some(Money::new(Decimal::from(500)))
/// );
/// assert_eq!(DailyLimit::of_decimal(Decimal::from(-1)), DailyLimit::UNLIMITED);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DailyLimit(Option<Money>);

impl DailyLimit {
    /// No cap.
    pub const UNLIMITED: Self = Self(None);

    /// Builds a limit from a raw amount, clamping non-positive amounts to
    /// [`DailyLimit::UNLIMITED`].
    #[must_use]
    pub fn of_decimal(raw: Decimal) -> Self {
        let amount = Money::new(raw);
        if amount.is_positive() {
            Self(Some(amount))
        } else {
            Self::UNLIMITED
        }
    }

    /// Validates a raw daily limit. Never fails; see [`DailyLimit::of_decimal`].
    ///
    /// `_field_name` is unused and only keeps the signature in line with the
    /// other smart constructors, so assemblers can compose it the same way.
    pub fn create(_field_name: &str, raw: Decimal) -> ValidationResult<Self> {
        ValidationResult::valid(Self::of_decimal(raw))
    }

    /// Returns the cap, or `None` when unlimited. A cap is always positive.
    #[must_use]
    pub const fn cap(&self) -> Option<Money> {
        self.0
    }

    /// Returns true when there is no cap.
    #[must_use]
    pub const fn is_unlimited(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for DailyLimit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(amount) => write!(formatter, "{amount}"),
            None => write!(formatter, "Unlimited"),
        }
    }
}
