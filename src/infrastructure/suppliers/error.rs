//! # Supplier Errors
//!
//! Error types for supplier transport operations.
//!
//! These never leave the gateway: every [`SupplierError`] is classified
//! into a [`RawResponse`] failure kind before it reaches the aggregator.
//!
//! # Examples
//!
//! ```
//! use ride_aggregator::infrastructure::suppliers::error::SupplierError;
//! use ride_aggregator::infrastructure::suppliers::traits::RawResponse;
//!
//! let error = SupplierError::server_unavailable(503, "maintenance");
//! assert_eq!(error.classify(), RawResponse::ServerUnavailable);
//! ```

use crate::infrastructure::suppliers::traits::RawResponse;
use thiserror::Error;

/// Error type for supplier HTTP operations.
#[derive(Debug, Clone, Error)]
pub enum SupplierError {
    /// Request timed out.
    #[error("supplier timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// Network or connection error.
    #[error("supplier connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// The supplier rejected the request (4xx).
    #[error("supplier invalid request ({status}): {message}")]
    InvalidRequest {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// The supplier failed to serve the request (5xx).
    #[error("supplier unavailable ({status}): {message}")]
    ServerUnavailable {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// Any other non-success status.
    #[error("supplier unexpected status ({status})")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
    },

    /// The client could not be built or the request could not be formed.
    #[error("supplier internal error: {message}")]
    InternalError {
        /// Error message.
        message: String,
    },
}

impl SupplierError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(status: u16, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            status,
            message: message.into(),
        }
    }

    /// Creates a server unavailable error.
    #[must_use]
    pub fn server_unavailable(status: u16, message: impl Into<String>) -> Self {
        Self::ServerUnavailable {
            status,
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Maps this error onto the failure kind reported by the gateway.
    ///
    /// Transport failures of every sort are reported as timeouts; only
    /// responses that carried a status code are told apart.
    #[must_use]
    pub fn classify(&self) -> RawResponse {
        match self {
            Self::InvalidRequest { .. } => RawResponse::ClientError,
            Self::ServerUnavailable { .. } | Self::UnexpectedStatus { .. } => {
                RawResponse::ServerUnavailable
            }
            Self::Timeout { .. } | Self::Connection { .. } | Self::InternalError { .. } => {
                RawResponse::Timeout
            }
        }
    }

    /// Returns the HTTP status, if the supplier answered with one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidRequest { status, .. }
            | Self::ServerUnavailable { status, .. }
            | Self::UnexpectedStatus { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for supplier operations.
pub type SupplierResult<T> = Result<T, SupplierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_classify_as_client_error() {
        let error = SupplierError::invalid_request(400, "missing pickup");
        assert_eq!(error.classify(), RawResponse::ClientError);
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn server_errors_classify_as_unavailable() {
        assert_eq!(
            SupplierError::server_unavailable(500, "boom").classify(),
            RawResponse::ServerUnavailable
        );
        assert_eq!(
            SupplierError::UnexpectedStatus { status: 302 }.classify(),
            RawResponse::ServerUnavailable
        );
    }

    #[test]
    fn transport_errors_classify_as_timeout() {
        assert_eq!(SupplierError::timeout("slow").classify(), RawResponse::Timeout);
        assert_eq!(
            SupplierError::connection("refused").classify(),
            RawResponse::Timeout
        );
        assert_eq!(SupplierError::timeout("slow").status(), None);
    }

    #[test]
    fn display_format() {
        let error = SupplierError::timeout_with_duration("request timed out", 2000);
        let display = error.to_string();
        assert!(display.contains("timeout"));
        assert!(display.contains("request timed out"));
    }
}
