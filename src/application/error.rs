//! # Application Errors
//!
//! Error types for the application layer.
//!
//! Only input problems reach callers of an aggregation: supplier outages,
//! timeouts and bad payloads are absorbed and surface as fewer options,
//! never as an error.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)       - Malformed coordinates or supplier id
//! ├── UnknownSupplier(String)   - Supplier not in the configured set
//! ├── Supplier(SupplierError)   - Gateway could not be constructed
//! └── Configuration(String)     - Invalid or unreadable settings
//! ```
//!
//! # Examples
//!
//! ```
//! use ride_aggregator::application::error::ApplicationError;
//!
//! let err = ApplicationError::unknown_supplier("bob");
//! assert!(err.is_input_validation());
//!
//! let err = ApplicationError::configuration("no suppliers configured");
//! assert!(!err.is_input_validation());
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::suppliers::error::SupplierError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Caller input failed domain validation.
    #[error("validation error: {0}")]
    Domain(#[from] DomainError),

    /// The requested supplier is not configured.
    #[error("unknown supplier: {0}")]
    UnknownSupplier(String),

    /// The supplier gateway could not be set up.
    #[error("supplier setup error: {0}")]
    Supplier(#[from] SupplierError),

    /// Settings are missing or invalid.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Creates an unknown supplier error.
    #[must_use]
    pub fn unknown_supplier(supplier: impl Into<String>) -> Self {
        Self::UnknownSupplier(supplier.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true if the caller's input was rejected before any network
    /// call was made.
    #[must_use]
    pub fn is_input_validation(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::UnknownSupplier(_))
    }
}

impl From<config::ConfigError> for ApplicationError {
    fn from(error: config::ConfigError) -> Self {
        Self::Configuration(error.to_string())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
