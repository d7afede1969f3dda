//! # Domain Errors
//!
//! Validation failures raised while building domain values from caller
//! input. These are the only failures a caller ever sees; supplier
//! failures are absorbed further down.

use thiserror::Error;

/// Error type for domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A coordinate did not match the `lat,lon` pattern.
    #[error("invalid {field} coordinate: '{value}'")]
    InvalidCoordinate {
        /// Which parameter was rejected (`pickup` or `dropoff`).
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A supplier identifier was empty or blank.
    #[error("supplier identifier must not be empty")]
    InvalidSupplierId,
}

impl DomainError {
    /// Creates an invalid coordinate error.
    #[must_use]
    pub fn invalid_coordinate(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            field,
            value: value.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
