//! # Supplier Integrations
//!
//! Everything needed to ask a supplier for prices.
//!
//! - [`SupplierGateway`]: Port for one bounded request to one supplier
//! - [`HttpSupplierGateway`]: reqwest-backed implementation
//! - [`SupplierRegistry`]: The configured supplier set
//! - [`SupplierError`]: Transport failures, classified into [`RawResponse`]

pub mod error;
pub mod gateway;
pub mod http_client;
pub mod registry;
pub mod traits;

pub use error::{SupplierError, SupplierResult};
pub use gateway::{DEFAULT_SUPPLIER_TIMEOUT_MS, HttpSupplierGateway};
pub use http_client::HttpClient;
pub use registry::{DEFAULT_SUPPLIERS, SupplierRegistry};
pub use traits::{RawResponse, SupplierGateway};
