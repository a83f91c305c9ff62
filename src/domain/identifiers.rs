//! Identifier value objects.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;
use uuid::Uuid;

use crate::validation::ValidationResult;

/// Identifier of a user (and therefore of a card holder).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserId(Uuid);

impl UserId {
    /// Wraps an already well-typed UUID.
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates a textual UUID.
    pub fn parse(field_name: &str, raw: &str) -> ValidationResult<Self> {
        Uuid::from_str(raw.trim()).map_or_else(
            |_| ValidationResult::field_error(field_name, "Must be a valid UUID"),
            |id| ValidationResult::valid(Self(id)),
        )
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parse_accepts_hyphenated_uuid() {
        let id = UserId::parse("holderId", "01234567-89ab-cdef-0123-456789abcdef");
        assert!(id.is_valid());
    }

    #[rstest]
    fn parse_rejects_garbage() {
        let errors = UserId::parse("holderId", "not-a-uuid").into_result().unwrap_err();
        assert_eq!(errors.first().field_path, "holderId");
    }

    #[rstest]
    fn generated_ids_are_unique() {
        assert_ne!(UserId::generate(), UserId::generate());
    }
}
