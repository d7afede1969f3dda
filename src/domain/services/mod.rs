//! # Domain Services
//!
//! Domain services encapsulating business logic that doesn't naturally
//! belong to a single entity or value object.
//!
//! ## Services
//!
//! - [`capacity_filter`]: Drops options that cannot seat the party

pub mod capacity_filter;

pub use capacity_filter::filter_by_capacity;
