//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`CarCategory`]: Vehicle class and its seating capacity
//! - [`Coordinate`]: Validated `lat,lon` location string
//! - [`SupplierId`]: Supplier identifier

pub mod coordinate;
pub mod enums;
pub mod ids;

pub use coordinate::Coordinate;
pub use enums::{CarCategory, ParseEnumError};
pub use ids::SupplierId;
