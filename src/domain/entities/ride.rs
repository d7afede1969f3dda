//! # Ride Entity
//!
//! The normalized response from one supplier for one request.
//!
//! An empty ride (no identifiers, no options) stands for "this supplier
//! produced no usable data", whatever the cause.

use crate::domain::entities::ride_option::RideOption;
use serde::Serialize;

/// A supplier's answer for one pickup/dropoff pair.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Ride {
    /// Supplier identifier echoed by the supplier.
    supplier_id: Option<String>,
    /// Pickup coordinate echoed by the supplier.
    pickup: Option<String>,
    /// Dropoff coordinate echoed by the supplier.
    dropoff: Option<String>,
    /// Offers in the order the supplier listed them.
    options: Vec<RideOption>,
}

impl Ride {
    /// Creates a ride from decoded parts.
    #[must_use]
    pub fn new(
        supplier_id: Option<String>,
        pickup: Option<String>,
        dropoff: Option<String>,
        options: Vec<RideOption>,
    ) -> Self {
        Self {
            supplier_id,
            pickup,
            dropoff,
            options,
        }
    }

    /// Returns the canonical empty ride.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the ride carries no options.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns the supplier identifier echoed in the payload.
    #[must_use]
    pub fn supplier_id(&self) -> Option<&str> {
        self.supplier_id.as_deref()
    }

    /// Returns the pickup echoed in the payload.
    #[must_use]
    pub fn pickup(&self) -> Option<&str> {
        self.pickup.as_deref()
    }

    /// Returns the dropoff echoed in the payload.
    #[must_use]
    pub fn dropoff(&self) -> Option<&str> {
        self.dropoff.as_deref()
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &[RideOption] {
        &self.options
    }

    /// Consumes the ride, returning its options.
    #[must_use]
    pub fn into_options(self) -> Vec<RideOption> {
        self.options
    }
}
