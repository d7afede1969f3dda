//! # Application Layer
//!
//! Use-case orchestration: fan out to suppliers, normalize, filter, rank.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
