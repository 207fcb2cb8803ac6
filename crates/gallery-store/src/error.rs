//! Constraint violations raised by the persistence layer

use crate::model::EntityId;

/// Persistence layer rejected the supplied fields
///
/// Propagated unchanged through the materializer. Negative-path tests assert
/// on these rather than treating them as failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintViolation {
    /// Unique field already taken
    #[error("{entity} with {field} {value:?} already exists")]
    Duplicate {
        /// Entity kind
        entity: &'static str,
        /// Unique field
        field: &'static str,
        /// Offending value
        value: String,
    },

    /// Required field absent or blank
    #[error("{entity}.{field} is required")]
    MissingField {
        /// Entity kind
        entity: &'static str,
        /// Missing field
        field: String,
    },

    /// Field present but of the wrong type or out of range
    #[error("{entity}.{field} is invalid: {reason}")]
    InvalidValue {
        /// Entity kind
        entity: &'static str,
        /// Offending field
        field: String,
        /// What is wrong with it
        reason: String,
    },

    /// Field the entity does not have
    #[error("{entity} has no field {field:?}")]
    UnknownField {
        /// Entity kind
        entity: &'static str,
        /// Unknown field
        field: String,
    },

    /// `password1` and `password2` differ
    #[error("the two password fields didn't match")]
    PasswordMismatch,

    /// Reference to an entity that does not exist
    #[error("{field} references unknown entity {id}")]
    UnknownReference {
        /// Referencing field
        field: String,
        /// Missing id
        id: EntityId,
    },
}

impl ConstraintViolation {
    /// Field the violation is reported against
    ///
    /// A password mismatch is reported against `password2`.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Duplicate { field, .. } => *field,
            Self::MissingField { field, .. }
            | Self::InvalidValue { field, .. }
            | Self::UnknownField { field, .. }
            | Self::UnknownReference { field, .. } => field.as_str(),
            Self::PasswordMismatch => "password2",
        }
    }

    pub(crate) fn missing(entity: &'static str, field: impl Into<String>) -> Self {
        Self::MissingField {
            entity,
            field: field.into(),
        }
    }

    pub(crate) fn invalid(
        entity: &'static str,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            entity,
            field: field.into(),
            reason: reason.into(),
        }
    }
}
