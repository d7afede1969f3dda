//! # Ride Option Entity
//!
//! One priced offer for a car category.
//!
//! # Examples
//!
//! ```
//! use ride_aggregator::domain::entities::RideOption;
//! use ride_aggregator::domain::value_objects::{CarCategory, SupplierId};
//!
//! let option = RideOption::new(CarCategory::Executive, 279_000);
//! assert_eq!(option.max_passengers(), 4);
//! assert!(option.supplier().is_none());
//!
//! let tagged = option.with_supplier(SupplierId::new("dave"));
//! assert_eq!(tagged.to_string(), "EXECUTIVE - dave - 279000");
//! ```

use crate::domain::value_objects::{CarCategory, SupplierId};
use serde::Serialize;
use std::fmt;

/// A priced offer from a supplier.
///
/// # Invariants
///
/// - `max_passengers` is derived from `category` on every read
/// - `supplier` is set at most once, when options from several suppliers
///   are pooled together
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RideOption {
    /// Supplier that quoted this option; only set for cross-supplier results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    supplier: Option<SupplierId>,
    /// Vehicle class.
    #[serde(rename = "car_type")]
    category: CarCategory,
    /// Price in minor currency units.
    price: u64,
}

impl RideOption {
    /// Creates an untagged option.
    #[must_use]
    pub fn new(category: CarCategory, price: u64) -> Self {
        Self {
            supplier: None,
            category,
            price,
        }
    }

    /// Tags this option with the supplier it came from.
    #[must_use]
    pub fn with_supplier(mut self, supplier: SupplierId) -> Self {
        self.supplier = Some(supplier);
        self
    }

    /// Returns the vehicle class.
    #[inline]
    #[must_use]
    pub fn category(&self) -> CarCategory {
        self.category
    }

    /// Returns the price in minor currency units.
    #[inline]
    #[must_use]
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Returns the supplier tag, if any.
    #[inline]
    #[must_use]
    pub fn supplier(&self) -> Option<&SupplierId> {
        self.supplier.as_ref()
    }

    /// Returns the seating capacity of this option's category.
    #[inline]
    #[must_use]
    pub fn max_passengers(&self) -> u32 {
        self.category.max_passengers()
    }
}

impl fmt::Display for RideOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.supplier {
            Some(supplier) => write!(f, "{} - {} - {}", self.category, supplier, self.price),
            None => write!(f, "{} - {}", self.category, self.price),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn capacity_follows_category() {
        assert_eq!(RideOption::new(CarCategory::Minibus, 1).max_passengers(), 16);
        assert_eq!(RideOption::new(CarCategory::Luxury, 1).max_passengers(), 4);
    }

    #[test]
    fn untagged_display_and_json() {
        let option = RideOption::new(CarCategory::PeopleCarrier, 329_000);
        assert_eq!(option.to_string(), "PEOPLE_CARRIER - 329000");
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"car_type": "PEOPLE_CARRIER", "price": 329000})
        );
    }

    #[test]
    fn tagged_json_includes_supplier() {
        let option = RideOption::new(CarCategory::Standard, 392_299).with_supplier("dave".into());
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"supplier": "dave", "car_type": "STANDARD", "price": 392299})
        );
        assert!(json.get("max_passengers").is_none());
    }
}
