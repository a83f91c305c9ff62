//! The top-level error algebra.
//!
//! [`DomainError`] is the single error type handed across the crate boundary.
//! Each variant is a returned value; nothing here panics or retries.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::validation::ValidationErrors;

/// Result alias used at the boundary of the validation core.
pub type DomainResult<T> = Result<T, DomainError>;

/// A well-formed request rejected because of the current business state.
///
/// # Examples
///
/// ```
/// use card_management::errors::OperationNotAllowedError;
///
/// let error = OperationNotAllowedError::new("processPayment", "Card is deactivated");
/// assert_eq!(error.to_string(), "Operation [processPayment] not allowed: Card is deactivated");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error("Operation [{operation}] not allowed: {reason}")]
pub struct OperationNotAllowedError {
    /// Name of the rejected operation.
    pub operation: String,
    /// Why the current state forbids it.
    pub reason: String,
}

impl OperationNotAllowedError {
    /// Creates a new `OperationNotAllowedError`.
    #[must_use]
    pub fn new(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            reason: reason.into(),
        }
    }
}

/// Outcomes reported by a persistence collaborator.
///
/// The validation core only defines their shape; it never raises them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataRelatedError {
    /// An entity with the same id is already stored.
    #[error("{entity} with id [{id}] already exists")]
    EntityAlreadyExists {
        /// Entity kind, e.g. `Card`.
        entity: String,
        /// Identifier of the conflicting entity.
        id: String,
    },

    /// No entity with the id is stored.
    #[error("{entity} with id [{id}] was not found")]
    EntityNotFound {
        /// Entity kind.
        entity: String,
        /// Identifier that was looked up.
        id: String,
    },

    /// The entity is referenced elsewhere and cannot be changed.
    #[error("{entity} with id [{id}] is in use")]
    EntityIsInUse {
        /// Entity kind.
        entity: String,
        /// Identifier of the entity in use.
        id: String,
    },

    /// Inserting the entity failed.
    #[error("Failed to insert {entity} with id [{id}]: {detail}")]
    InsertError {
        /// Entity kind.
        entity: String,
        /// Identifier of the entity.
        id: String,
        /// Free-text detail from the store.
        detail: String,
    },

    /// Updating the entity failed.
    #[error("Failed to update {entity} with id [{id}]: {detail}")]
    UpdateError {
        /// Entity kind.
        entity: String,
        /// Identifier of the entity.
        id: String,
        /// Free-text detail from the store.
        detail: String,
    },
}

impl DataRelatedError {
    /// Returns the entity kind this error refers to.
    #[must_use]
    pub fn entity(&self) -> &str {
        match self {
            Self::EntityAlreadyExists { entity, .. }
            | Self::EntityNotFound { entity, .. }
            | Self::EntityIsInUse { entity, .. }
            | Self::InsertError { entity, .. }
            | Self::UpdateError { entity, .. } => entity,
        }
    }

    /// Returns the identifier this error refers to.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::EntityAlreadyExists { id, .. }
            | Self::EntityNotFound { id, .. }
            | Self::EntityIsInUse { id, .. }
            | Self::InsertError { id, .. }
            | Self::UpdateError { id, .. } => id,
        }
    }
}

/// Opaque diagnostic for a state believed to be unreachable.
///
/// Equality compares the diagnostic text only.
#[derive(Clone)]
pub struct Defect {
    diagnostic: String,
    source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl Defect {
    /// Returns the diagnostic text.
    #[must_use]
    pub fn diagnostic(&self) -> &str {
        &self.diagnostic
    }
}

impl fmt::Debug for Defect {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Defect")
            .field("diagnostic", &self.diagnostic)
            .field("has_source", &self.source.is_some())
            .finish()
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.diagnostic)
    }
}

impl std::error::Error for Defect {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Defect {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.diagnostic)
    }
}

impl PartialEq for Defect {
    fn eq(&self, other: &Self) -> bool {
        self.diagnostic == other.diagnostic
    }
}

impl Eq for Defect {}

/// Every failure the validation core and its collaborators can report.
///
/// # Examples
///
/// ```
/// use card_management::errors::{DomainError, FieldValidationError, ValidationErrors};
///
/// let error: DomainError = ValidationErrors::single(FieldValidationError::new(
///     "cardNumber",
///     "Card number must be 16 digits",
/// ))
/// .into();
///
/// assert!(error.is_validation());
/// assert_eq!(
///     error.to_string(),
///     "Field [cardNumber] is invalid: Card number must be 16 digits"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum DomainError {
    /// Malformed or out-of-range input.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Legal input, illegal business state.
    #[error(transparent)]
    OperationNotAllowed(#[from] OperationNotAllowedError),

    /// Persistence conflict, absence or failure.
    #[error(transparent)]
    Data(#[from] DataRelatedError),

    /// An invariant was violated. Never matched beyond generic handling.
    #[error("Unexpected internal error: {0}")]
    Bug(Defect),
}

impl DomainError {
    /// Reports a defect from a diagnostic message.
    ///
    /// Emits an `error` event; defects are never absorbed silently.
    #[must_use]
    pub fn bug(diagnostic: impl Into<String>) -> Self {
        let diagnostic = diagnostic.into();
        tracing::error!(%diagnostic, "defect reported");
        Self::Bug(Defect {
            diagnostic,
            source: None,
        })
    }

    /// Reports a defect caused by an unexpected error.
    #[must_use]
    pub fn bug_from<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let diagnostic = error.to_string();
        tracing::error!(%diagnostic, "defect reported");
        Self::Bug(Defect {
            diagnostic,
            source: Some(Arc::new(error)),
        })
    }

    /// Returns true for [`DomainError::Validation`].
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns the validation errors, if this is a validation failure.
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::OperationNotAllowed(_) | Self::Data(_) | Self::Bug(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldValidationError;
    use rstest::rstest;

    #[rstest]
    #[case(
        DataRelatedError::EntityAlreadyExists { entity: "Card".into(), id: "1234".into() },
        "Card with id [1234] already exists"
    )]
    #[case(
        DataRelatedError::EntityNotFound { entity: "User".into(), id: "42".into() },
        "User with id [42] was not found"
    )]
    #[case(
        DataRelatedError::EntityIsInUse { entity: "Card".into(), id: "7".into() },
        "Card with id [7] is in use"
    )]
    #[case(
        DataRelatedError::InsertError {
            entity: "Card".into(),
            id: "7".into(),
            detail: "timeout".into(),
        },
        "Failed to insert Card with id [7]: timeout"
    )]
    #[case(
        DataRelatedError::UpdateError {
            entity: "User".into(),
            id: "9".into(),
            detail: "stale".into(),
        },
        "Failed to update User with id [9]: stale"
    )]
    fn data_errors_describe_entity_and_reason(
        #[case] error: DataRelatedError,
        #[case] expected: &str,
    ) {
        assert_eq!(DomainError::from(error).to_string(), expected);
    }

    #[rstest]
    fn data_error_accessors_read_every_variant() {
        let error = DataRelatedError::UpdateError {
            entity: "Card".into(),
            id: "1".into(),
            detail: "conflict".into(),
        };

        assert_eq!(error.entity(), "Card");
        assert_eq!(error.id(), "1");
    }

    #[rstest]
    fn operation_not_allowed_lifts_with_question_mark() {
        fn reject() -> DomainResult<()> {
            Err::<(), _>(OperationNotAllowedError::new("topUp", "Card is deactivated"))?;
            Ok(())
        }

        assert_eq!(
            reject(),
            Err(DomainError::OperationNotAllowed(OperationNotAllowedError::new(
                "topUp",
                "Card is deactivated"
            )))
        );
    }

    #[rstest]
    fn bug_keeps_diagnostic_and_source() {
        let parse_error = "x".parse::<u8>().unwrap_err();
        let error = DomainError::bug_from(parse_error);

        let DomainError::Bug(defect) = &error else {
            panic!("expected a defect");
        };
        assert!(std::error::Error::source(defect).is_some());
        assert!(error.to_string().starts_with("Unexpected internal error: "));
        assert!(!error.is_validation());
    }

    #[rstest]
    fn validation_errors_are_exposed_only_for_validation() {
        let errors = ValidationErrors::single(FieldValidationError::new("name", "bad"));

        assert_eq!(DomainError::from(errors.clone()).validation_errors(), Some(&errors));
        assert_eq!(DomainError::bug("unreachable").validation_errors(), None);
    }
}
