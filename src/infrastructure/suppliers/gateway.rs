//! # HTTP Supplier Gateway
//!
//! [`SupplierGateway`] backed by [`HttpClient`].
//!
//! Requests go to `GET {base_url}/{supplier}?pickup={pickup}&dropoff={dropoff}`.

use crate::domain::value_objects::{Coordinate, SupplierId};
use crate::infrastructure::suppliers::error::SupplierResult;
use crate::infrastructure::suppliers::http_client::HttpClient;
use crate::infrastructure::suppliers::traits::{RawResponse, SupplierGateway};
use async_trait::async_trait;
use tracing::debug;

/// Default supplier request timeout in milliseconds.
pub const DEFAULT_SUPPLIER_TIMEOUT_MS: u64 = 2000;

/// Gateway that talks to suppliers over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSupplierGateway {
    base_url: String,
    client: HttpClient,
}

impl HttpSupplierGateway {
    /// Creates a gateway for suppliers hosted under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `SupplierError::InternalError` if the HTTP client cannot be
    /// created.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> SupplierResult<Self> {
        Ok(Self::with_client(base_url, HttpClient::new(timeout_ms)?))
    }

    /// Creates a gateway around an existing client.
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, client: HttpClient) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the request timeout in milliseconds.
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.client.timeout_ms()
    }

    /// Builds the endpoint URL for `supplier`.
    #[must_use]
    pub fn endpoint(&self, supplier: &SupplierId) -> String {
        format!("{}/{}", self.base_url, supplier)
    }
}

#[async_trait]
impl SupplierGateway for HttpSupplierGateway {
    async fn fetch(
        &self,
        supplier: &SupplierId,
        pickup: &Coordinate,
        dropoff: &Coordinate,
    ) -> RawResponse {
        let url = self.endpoint(supplier);
        let params = [("pickup", pickup.as_str()), ("dropoff", dropoff.as_str())];

        match self.client.get_text_with_params(&url, &params).await {
            Ok(body) => RawResponse::Success(body),
            Err(error) => {
                debug!(supplier = %supplier, %error, "supplier request failed");
                error.classify()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn coordinates() -> (Coordinate, Coordinate) {
        (
            Coordinate::parse("pickup", "51.470020,-0.454295").unwrap(),
            Coordinate::parse("dropoff", "51.00000,1.0000").unwrap(),
        )
    }

    async fn fetch_with(template: ResponseTemplate, timeout_ms: u64) -> RawResponse {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dave"))
            .respond_with(template)
            .mount(&server)
            .await;

        let gateway = HttpSupplierGateway::new(server.uri(), timeout_ms).unwrap();
        let (pickup, dropoff) = coordinates();
        gateway.fetch(&SupplierId::new("dave"), &pickup, &dropoff).await
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let gateway = HttpSupplierGateway::new("https://suppliers.example.com/", 2000).unwrap();
        assert_eq!(
            gateway.endpoint(&SupplierId::new("eric")),
            "https://suppliers.example.com/eric"
        );
        assert_eq!(gateway.base_url(), "https://suppliers.example.com");
        assert_eq!(gateway.timeout_ms(), 2000);
    }

    #[tokio::test]
    async fn success_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dave"))
            .and(query_param("pickup", "51.470020,-0.454295"))
            .and(query_param("dropoff", "51.00000,1.0000"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = HttpSupplierGateway::new(server.uri(), 2000).unwrap();
        let (pickup, dropoff) = coordinates();
        let raw = gateway.fetch(&SupplierId::new("dave"), &pickup, &dropoff).await;
        assert_eq!(raw, RawResponse::Success("{}".to_string()));
    }

    #[tokio::test]
    async fn bad_request_is_client_error() {
        let raw = fetch_with(ResponseTemplate::new(400), 2000).await;
        assert_eq!(raw, RawResponse::ClientError);
    }

    #[tokio::test]
    async fn internal_server_error_is_unavailable() {
        let raw = fetch_with(ResponseTemplate::new(500), 2000).await;
        assert_eq!(raw, RawResponse::ServerUnavailable);
    }

    #[tokio::test]
    async fn slow_supplier_is_timeout() {
        let template = ResponseTemplate::new(200).set_delay(Duration::from_millis(500));
        let raw = fetch_with(template, 50).await;
        assert_eq!(raw, RawResponse::Timeout);
    }

    #[tokio::test]
    async fn unreachable_supplier_is_timeout() {
        let gateway = HttpSupplierGateway::new("http://127.0.0.1:1", 500).unwrap();
        let (pickup, dropoff) = coordinates();
        let raw = gateway.fetch(&SupplierId::new("dave"), &pickup, &dropoff).await;
        assert_eq!(raw, RawResponse::Timeout);
    }
}
