//! # Domain Layer
//!
//! Ride categories, options, rides and the rules that apply to them,
//! free of any transport concerns.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
