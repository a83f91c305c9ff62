//! Semigroup type class: associative combination.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! [`ValidationErrors`](crate::errors::ValidationErrors) is the semigroup the
//! accumulating combinators rely on: `combine` appends the right operand's
//! entries after the left operand's, keeping duplicates.

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use card_management::errors::{FieldValidationError, ValidationErrors};
/// use card_management::typeclass::Semigroup;
///
/// let left = ValidationErrors::single(FieldValidationError::new("cardNumber", "bad"));
/// let right = ValidationErrors::single(FieldValidationError::new("name", "bad"));
/// assert_eq!(left.combine(right).len(), 2);
/// ```
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements of an iterator with `combine`.
    ///
    /// Returns `None` if the iterator is empty.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}
