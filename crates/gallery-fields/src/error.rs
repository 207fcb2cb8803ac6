//! Error types for field generation

/// Field generation errors
///
/// Both variants indicate a fixture-authoring bug and are never recovered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Requested generator kind is not part of the vocabulary
    #[error("unsupported field kind: {0}")]
    UnsupportedKind(String),

    /// Parameters cannot be satisfied for the kind
    #[error("invalid parameters for {kind}: {reason}")]
    InvalidParams {
        /// Kind the parameters were given to
        kind: String,
        /// What is wrong with them
        reason: String,
    },
}

impl FieldError {
    /// Create invalid-params error
    #[inline]
    pub fn invalid_params(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            kind: kind.into(),
            reason: reason.into(),
        }
    }
}
