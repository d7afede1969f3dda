//! # Domain Enums
//!
//! Enumeration types for domain concepts.
//!
//! - [`CarCategory`] - Vehicle class offered by a supplier, together with
//!   the fixed category table that maps each class to its seating capacity.
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle class of a ride option.
///
/// The set is closed: suppliers publishing any other `car_type` have that
/// option dropped during normalization.
///
/// # Examples
///
/// ```
/// use ride_aggregator::domain::value_objects::enums::CarCategory;
///
/// let minibus: CarCategory = "MINIBUS".parse().unwrap();
/// assert_eq!(minibus.max_passengers(), 16);
/// assert_eq!(minibus.to_string(), "MINIBUS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum CarCategory {
    /// Standard saloon.
    Standard = 0,
    /// Executive saloon.
    Executive = 1,
    /// Luxury saloon.
    Luxury = 2,
    /// People carrier.
    PeopleCarrier = 3,
    /// Luxury people carrier.
    LuxuryPeopleCarrier = 4,
    /// Minibus.
    Minibus = 5,
}

impl CarCategory {
    /// Every category, in declaration order.
    pub const ALL: [CarCategory; 6] = [
        Self::Standard,
        Self::Executive,
        Self::Luxury,
        Self::PeopleCarrier,
        Self::LuxuryPeopleCarrier,
        Self::Minibus,
    ];

    /// Returns the maximum number of passengers this category can seat.
    ///
    /// This is the category table; capacity is never stored separately
    /// from the category.
    ///
    /// # Examples
    ///
    /// ```
    /// use ride_aggregator::domain::value_objects::enums::CarCategory;
    ///
    /// assert_eq!(CarCategory::Standard.max_passengers(), 4);
    /// assert_eq!(CarCategory::PeopleCarrier.max_passengers(), 6);
    /// ```
    #[inline]
    #[must_use]
    pub const fn max_passengers(self) -> u32 {
        match self {
            Self::Standard | Self::Executive | Self::Luxury => 4,
            Self::PeopleCarrier | Self::LuxuryPeopleCarrier => 6,
            Self::Minibus => 16,
        }
    }

    /// Returns true if this category can seat `passengers` people.
    #[inline]
    #[must_use]
    pub const fn seats(self, passengers: u32) -> bool {
        self.max_passengers() >= passengers
    }

    /// Returns the wire name used by suppliers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Executive => "EXECUTIVE",
            Self::Luxury => "LUXURY",
            Self::PeopleCarrier => "PEOPLE_CARRIER",
            Self::LuxuryPeopleCarrier => "LUXURY_PEOPLE_CARRIER",
            Self::Minibus => "MINIBUS",
        }
    }
}

impl fmt::Display for CarCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarCategory {
    type Err = ParseEnumError;

    /// Parses a supplier `car_type`. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseEnumError::InvalidValue("CarCategory", s.to_string()))
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}
