//! # HTTP Client Utilities
//!
//! Shared HTTP client for supplier gateways.
//!
//! This module provides a reusable HTTP client wrapper with:
//! - A single request timeout covering connect and read
//! - `Accept: application/json` on every request
//! - Status-code classification into [`SupplierError`]
//!
//! The wrapper never retries.
//!
//! # Examples
//!
//! ```ignore
//! use ride_aggregator::infrastructure::suppliers::http_client::HttpClient;
//!
//! let client = HttpClient::new(2000)?;
//! let body = client
//!     .get_text_with_params("https://suppliers.example.com/dave", &[("pickup", "1,2")])
//!     .await?;
//! ```

use crate::infrastructure::suppliers::error::{SupplierError, SupplierResult};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

/// HTTP client wrapper for supplier gateways.
///
/// Cloning is cheap and clones share one connection pool, so a single
/// instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `SupplierError::InternalError` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> SupplierResult<Self> {
        Self::with_headers(timeout_ms, HeaderMap::new())
    }

    /// Creates a new HTTP client with additional default headers.
    ///
    /// `Accept: application/json` is always set unless `default_headers`
    /// overrides it.
    ///
    /// # Errors
    ///
    /// Returns `SupplierError::InternalError` if the client cannot be created.
    pub fn with_headers(timeout_ms: u64, mut default_headers: HeaderMap) -> SupplierResult<Self> {
        default_headers
            .entry(ACCEPT)
            .or_insert(HeaderValue::from_static("application/json"));

        let timeout = Duration::from_millis(timeout_ms);
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| {
                SupplierError::internal_error(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request with query parameters and returns the raw body.
    ///
    /// The body is not decoded here; a 2xx response with any body is a
    /// success at this level.
    ///
    /// # Errors
    ///
    /// Returns `SupplierError::Timeout` or `SupplierError::Connection` if no
    /// response arrives, and a status-specific error for non-2xx responses.
    pub async fn get_text_with_params<P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> SupplierResult<String> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Checks the status and reads the body.
    async fn handle_response(&self, response: Response) -> SupplierResult<String> {
        let status = response.status();

        if status.is_success() {
            response.text().await.map_err(|e| self.map_reqwest_error(e))
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(Self::map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to a SupplierError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> SupplierError {
        if error.is_timeout() {
            SupplierError::timeout_with_duration("Request timed out", self.timeout_ms)
        } else if error.is_connect() {
            SupplierError::connection(format!("Connection failed: {}", error))
        } else if error.is_builder() {
            SupplierError::internal_error(format!("Invalid request: {}", error))
        } else {
            SupplierError::connection(format!("HTTP request failed: {}", error))
        }
    }

    /// Maps a non-success HTTP status to a SupplierError.
    fn map_status_error(status: StatusCode, body: &str) -> SupplierError {
        if status.is_client_error() {
            SupplierError::invalid_request(status.as_u16(), format!("Bad request: {}", body))
        } else if status.is_server_error() {
            SupplierError::server_unavailable(status.as_u16(), format!("Server error: {}", body))
        } else {
            SupplierError::UnexpectedStatus {
                status: status.as_u16(),
            }
        }
    }
}
