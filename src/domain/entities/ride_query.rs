//! # Ride Query
//!
//! A validated price-discovery request: where from, where to, and
//! optionally how many passengers must fit.
//!
//! # Examples
//!
//! ```
//! use ride_aggregator::domain::entities::RideQuery;
//!
//! let query = RideQuery::new("51.470020,-0.454295", "51.00000,1.0000", Some(4)).unwrap();
//! assert_eq!(query.passengers(), Some(4));
//!
//! assert!(RideQuery::new("here", "51.0,1.0", None).is_err());
//! ```

use crate::domain::errors::DomainResult;
use crate::domain::value_objects::Coordinate;
use std::fmt;

/// Validated input to an aggregation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideQuery {
    pickup: Coordinate,
    dropoff: Coordinate,
    passengers: Option<u32>,
}

impl RideQuery {
    /// Validates both coordinates and builds a query.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinate` naming the first coordinate
    /// that fails validation.
    pub fn new(
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        passengers: Option<u32>,
    ) -> DomainResult<Self> {
        Ok(Self {
            pickup: Coordinate::parse("pickup", pickup)?,
            dropoff: Coordinate::parse("dropoff", dropoff)?,
            passengers,
        })
    }

    /// Returns the pickup location.
    #[inline]
    #[must_use]
    pub fn pickup(&self) -> &Coordinate {
        &self.pickup
    }

    /// Returns the dropoff location.
    #[inline]
    #[must_use]
    pub fn dropoff(&self) -> &Coordinate {
        &self.dropoff
    }

    /// Returns the requested passenger count, if any.
    #[inline]
    #[must_use]
    pub fn passengers(&self) -> Option<u32> {
        self.passengers
    }
}

impl fmt::Display for RideQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RideQuery({} -> {}", self.pickup, self.dropoff)?;
        if let Some(passengers) = self.passengers {
            write!(f, ", passengers={}", passengers)?;
        }
        write!(f, ")")
    }
}
