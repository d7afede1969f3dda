//! # Ride Aggregation Engine
//!
//! Orchestrates supplier requests, normalization, capacity filtering and
//! ranking.
//!
//! This module provides the [`RideAggregationEngine`] with two operations:
//! - [`RideAggregationEngine::supplier_options`]: one supplier's options,
//!   most expensive first
//! - [`RideAggregationEngine::cheapest_per_category`]: the cheapest option
//!   of each category across all suppliers, most expensive first
//!
//! Suppliers are queried concurrently, each in its own task with its own
//! timeout. A supplier that fails or stalls contributes no options and
//! never delays or fails the others.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::normalizer::normalize;
use crate::application::services::ranking_strategy::{
    CheapestPerCategoryStrategy, PriceDescendingStrategy, RankingStrategy,
};
use crate::config::Settings;
use crate::domain::entities::{RideOption, RideQuery};
use crate::domain::services::filter_by_capacity;
use crate::domain::value_objects::SupplierId;
use crate::infrastructure::suppliers::gateway::{DEFAULT_SUPPLIER_TIMEOUT_MS, HttpSupplierGateway};
use crate::infrastructure::suppliers::registry::SupplierRegistry;
use crate::infrastructure::suppliers::traits::{RawResponse, SupplierGateway};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{Instrument, debug, info, info_span, warn};

/// Configuration for ride aggregation.
#[derive(Debug, Clone)]
pub struct AggregationConfig {
    /// Per-supplier timeout in milliseconds.
    pub per_supplier_timeout_ms: u64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            per_supplier_timeout_ms: DEFAULT_SUPPLIER_TIMEOUT_MS,
        }
    }
}

impl AggregationConfig {
    /// Sets the per-supplier timeout.
    #[must_use]
    pub fn with_per_supplier_timeout(mut self, timeout_ms: u64) -> Self {
        self.per_supplier_timeout_ms = timeout_ms;
        self
    }
}

/// Engine for collecting and ranking ride options from suppliers.
#[derive(Debug, Clone)]
pub struct RideAggregationEngine {
    gateway: Arc<dyn SupplierGateway>,
    registry: SupplierRegistry,
    config: AggregationConfig,
}

impl RideAggregationEngine {
    /// Creates a new RideAggregationEngine.
    #[must_use]
    pub fn new(
        gateway: Arc<dyn SupplierGateway>,
        registry: SupplierRegistry,
        config: AggregationConfig,
    ) -> Self {
        Self {
            gateway,
            registry,
            config,
        }
    }

    /// Creates a new engine with default configuration.
    #[must_use]
    pub fn with_defaults(gateway: Arc<dyn SupplierGateway>, registry: SupplierRegistry) -> Self {
        Self::new(gateway, registry, AggregationConfig::default())
    }

    /// Builds an HTTP-backed engine from process settings.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the settings are
    /// invalid, or `ApplicationError::Supplier` if the HTTP client cannot
    /// be created.
    pub fn from_settings(settings: &Settings) -> ApplicationResult<Self> {
        settings.validate()?;
        let gateway = HttpSupplierGateway::new(&settings.base_url, settings.timeout_ms)?;
        Ok(Self::new(
            Arc::new(gateway),
            SupplierRegistry::new(&settings.suppliers),
            AggregationConfig::default().with_per_supplier_timeout(settings.timeout_ms),
        ))
    }

    /// Returns one supplier's options, most expensive first.
    ///
    /// Options are not tagged with the supplier. A failing supplier yields
    /// an empty list.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::UnknownSupplier` if `supplier` is not
    /// configured. No request is made in that case.
    pub async fn supplier_options(
        &self,
        supplier: &str,
        query: &RideQuery,
    ) -> ApplicationResult<Vec<RideOption>> {
        let supplier = self
            .registry
            .resolve(supplier)
            .cloned()
            .ok_or_else(|| ApplicationError::unknown_supplier(supplier))?;

        let span = info_span!("supplier", supplier = %supplier);
        let options = fetch_supplier_options(
            Arc::clone(&self.gateway),
            supplier,
            query.clone(),
            self.per_supplier_timeout(),
            false,
        )
        .instrument(span)
        .await;

        let ranked = PriceDescendingStrategy.rank(options);
        info!(%query, options = ranked.len(), "ranked supplier options");
        Ok(ranked)
    }

    /// Returns the cheapest option of each category across all configured
    /// suppliers, most expensive first.
    ///
    /// Each option carries the supplier it came from. Never fails: if every
    /// supplier fails, or no option seats the party, the list is empty.
    pub async fn cheapest_per_category(&self, query: &RideQuery) -> Vec<RideOption> {
        let pool = self.collect_from_suppliers(query).await;
        let ranked = CheapestPerCategoryStrategy.rank(pool);
        info!(%query, options = ranked.len(), "ranked cheapest option per category");
        ranked
    }

    /// Queries every supplier concurrently and pools the tagged, filtered
    /// options in configured supplier order.
    async fn collect_from_suppliers(&self, query: &RideQuery) -> Vec<RideOption> {
        let suppliers = self.registry.suppliers();
        let handles: Vec<_> = suppliers
            .iter()
            .map(|supplier| {
                let span = info_span!("supplier", supplier = %supplier);
                tokio::spawn(
                    fetch_supplier_options(
                        Arc::clone(&self.gateway),
                        supplier.clone(),
                        query.clone(),
                        self.per_supplier_timeout(),
                        true,
                    )
                    .instrument(span),
                )
            })
            .collect();

        let mut pool = Vec::new();
        let mut contributing = 0usize;
        for (supplier, result) in suppliers.iter().zip(join_all(handles).await) {
            match result {
                Ok(options) => {
                    if !options.is_empty() {
                        contributing += 1;
                    }
                    pool.extend(options);
                }
                Err(error) => warn!(supplier = %supplier, %error, "supplier task failed"),
            }
        }

        info!(
            suppliers_queried = suppliers.len(),
            suppliers_contributing = contributing,
            pooled = pool.len(),
            "collected supplier options"
        );
        pool
    }

    fn per_supplier_timeout(&self) -> Duration {
        Duration::from_millis(self.config.per_supplier_timeout_ms)
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Returns the configured suppliers.
    #[must_use]
    pub fn registry(&self) -> &SupplierRegistry {
        &self.registry
    }
}

/// Fetch, normalize, optionally tag, and capacity-filter one supplier.
async fn fetch_supplier_options(
    gateway: Arc<dyn SupplierGateway>,
    supplier: SupplierId,
    query: RideQuery,
    per_supplier_timeout: Duration,
    tag: bool,
) -> Vec<RideOption> {
    let raw = match timeout(
        per_supplier_timeout,
        gateway.fetch(&supplier, query.pickup(), query.dropoff()),
    )
    .await
    {
        Ok(raw) => raw,
        Err(_) => RawResponse::Timeout,
    };
    debug!(outcome = raw.kind(), "supplier responded");

    let mut options = normalize(&raw).into_options();
    if options.is_empty() {
        return options;
    }
    if tag {
        options = options
            .into_iter()
            .map(|option| option.with_supplier(supplier.clone()))
            .collect();
    }

    let filtered = filter_by_capacity(options, query.passengers());
    if filtered.is_empty() {
        debug!(
            passengers = query.passengers(),
            "no options from this supplier seat the party"
        );
    }
    filtered
}
