//! # Supplier Gateway Trait
//!
//! Port definition for supplier integrations.
//!
//! A [`SupplierGateway`] issues one bounded-timeout request to one supplier
//! and reports the outcome as a [`RawResponse`]. It never returns an error:
//! every failure is an ordinary variant.
//!
//! # Examples
//!
//! ```
//! use async_trait::async_trait;
//! use ride_aggregator::domain::value_objects::{Coordinate, SupplierId};
//! use ride_aggregator::infrastructure::suppliers::traits::{RawResponse, SupplierGateway};
//!
//! #[derive(Debug)]
//! struct AlwaysDown;
//!
//! #[async_trait]
//! impl SupplierGateway for AlwaysDown {
//!     async fn fetch(&self, _: &SupplierId, _: &Coordinate, _: &Coordinate) -> RawResponse {
//!         RawResponse::ServerUnavailable
//!     }
//! }
//! ```

use crate::domain::value_objects::{Coordinate, SupplierId};
use async_trait::async_trait;
use std::fmt;

/// Outcome of a single supplier request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawResponse {
    /// 2xx response with its body, not yet decoded.
    Success(String),
    /// The supplier rejected the request as malformed.
    ClientError,
    /// The supplier answered with a server error.
    ServerUnavailable,
    /// No answer within the deadline, or no connection at all.
    Timeout,
}

impl RawResponse {
    /// Returns true for [`RawResponse::Success`].
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns a short label for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::ClientError => "client_error",
            Self::ServerUnavailable => "server_unavailable",
            Self::Timeout => "timeout",
        }
    }
}

impl fmt::Display for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(body) => write!(f, "SUCCESS({} bytes)", body.len()),
            Self::ClientError => write!(f, "CLIENT_ERROR"),
            Self::ServerUnavailable => write!(f, "SERVER_UNAVAILABLE"),
            Self::Timeout => write!(f, "TIMEOUT"),
        }
    }
}

/// Trait for supplier gateways.
///
/// Implementations must be safe to call concurrently for different
/// suppliers.
#[async_trait]
pub trait SupplierGateway: Send + Sync + fmt::Debug {
    /// Requests quotes from `supplier` for the given trip.
    ///
    /// Makes exactly one attempt.
    async fn fetch(
        &self,
        supplier: &SupplierId,
        pickup: &Coordinate,
        dropoff: &Coordinate,
    ) -> RawResponse;
}
