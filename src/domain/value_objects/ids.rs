//! # Identifiers
//!
//! String-based identifiers for domain entities.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a supplier.
///
/// Doubles as the path segment under the supplier base URL, so it is kept
/// lower-case.
///
/// # Examples
///
/// ```
/// use ride_aggregator::domain::value_objects::SupplierId;
///
/// let id = SupplierId::new("Dave");
/// assert_eq!(id.as_str(), "dave");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(String);

impl SupplierId {
    /// Creates a supplier ID, trimming and lower-casing the input.
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_lowercase())
    }

    /// Creates a supplier ID, rejecting blank input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSupplierId` if `id` is empty after trimming.
    pub fn parse(id: impl AsRef<str>) -> DomainResult<Self> {
        let id = Self::new(id);
        if id.0.is_empty() {
            return Err(DomainError::InvalidSupplierId);
        }
        Ok(id)
    }

    /// Returns the identifier.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SupplierId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
