//! # Domain Entities
//!
//! - [`RideOption`]: One priced offer for a car category
//! - [`Ride`]: A supplier's normalized response
//! - [`RideQuery`]: Validated pickup/dropoff/passengers request

pub mod ride;
pub mod ride_option;
pub mod ride_query;

pub use ride::Ride;
pub use ride_option::RideOption;
pub use ride_query::RideQuery;
