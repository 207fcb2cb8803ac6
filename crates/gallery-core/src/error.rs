//! Error types for Gallery Core
//!
//! Provides error handling for:
//! - Materialization (generation and persistence failures)
//! - Fixture configuration

use gallery_fields::FieldError;
use gallery_store::ConstraintViolation;

/// Materialization errors
#[derive(Debug, thiserror::Error)]
pub enum MaterializeError {
    /// Persistence layer rejected the fields
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    /// Filling a missing attribute failed
    #[error("field generation failed: {0}")]
    Field(#[from] FieldError),
}

impl MaterializeError {
    /// Check if error indicates a broken fixture rather than a rejected entity
    #[inline]
    #[must_use]
    pub fn is_fixture_bug(&self) -> bool {
        matches!(self, Self::Field(_))
    }

    /// The constraint violation, if the store rejected the entity
    #[inline]
    #[must_use]
    pub fn as_violation(&self) -> Option<&ConstraintViolation> {
        match self {
            Self::Constraint(violation) => Some(violation),
            Self::Field(_) => None,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML could not be parsed
    #[error("invalid fixture configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("invalid fixture configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_error_is_transparent() {
        let err = MaterializeError::from(ConstraintViolation::PasswordMismatch);
        assert_eq!(err.to_string(), ConstraintViolation::PasswordMismatch.to_string());
        assert!(!err.is_fixture_bug());
        assert_eq!(err.as_violation(), Some(&ConstraintViolation::PasswordMismatch));
    }

    #[test]
    fn field_error_is_fixture_bug() {
        let err = MaterializeError::from(FieldError::UnsupportedKind("x.y".to_string()));
        assert!(err.is_fixture_bug());
        assert!(err.as_violation().is_none());
    }
}
