//! # Coordinate
//!
//! A validated `"lat,lon"` string.
//!
//! The value is checked against a pattern and passed through to suppliers
//! verbatim; it is never parsed into floating point numbers.
//!
//! # Examples
//!
//! ```
//! use ride_aggregator::domain::value_objects::Coordinate;
//!
//! let heathrow = Coordinate::parse("pickup", "51.470020,-0.454295").unwrap();
//! assert_eq!(heathrow.as_str(), "51.470020,-0.454295");
//!
//! assert!(Coordinate::parse("pickup", "51.47;-0.45").is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Optional whitespace is accepted before the latitude and around the comma.
#[allow(clippy::expect_used)]
static COORDINATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*-?[0-9]+(\.[0-9]+)?\s*,\s*-?[0-9]+(\.[0-9]+)?$")
        .expect("coordinate pattern is valid")
});

/// A pickup or dropoff location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate(String);

impl Coordinate {
    /// Validates `value` as a coordinate.
    ///
    /// `field` names the parameter in the resulting error.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinate` if the value does not match
    /// the `lat,lon` pattern.
    pub fn parse(field: &'static str, value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::invalid_coordinate(field, value))
        }
    }

    /// Returns true if `value` matches the coordinate pattern.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        COORDINATE_PATTERN.is_match(value)
    }

    /// Returns the coordinate as sent to suppliers.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Coordinate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
