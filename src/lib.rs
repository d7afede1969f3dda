//! # Ride Aggregator
//!
//! Ride price discovery across independent suppliers.
//!
//! Given a pickup, a dropoff and optionally a passenger count, the
//! aggregator asks every configured supplier for quotes, normalizes the
//! answers and produces either one supplier's options ranked by price or
//! the cheapest option of each car category across all suppliers.
//!
//! A supplier that is down, slow or returns garbage contributes nothing;
//! it never fails the request.
//!
//! ## Layers
//!
//! - [`domain`]: Categories, options, rides and the capacity rule
//! - [`application`]: Aggregation engine, normalizer, ranking strategies
//! - [`infrastructure`]: Supplier HTTP gateway
//! - [`config`]: Settings loading
//! - [`telemetry`]: Tracing setup
//!
//! # Examples
//!
//! ```no_run
//! use ride_aggregator::application::services::RideAggregationEngine;
//! use ride_aggregator::config::Settings;
//! use ride_aggregator::domain::entities::RideQuery;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = RideAggregationEngine::from_settings(&Settings::load()?)?;
//! let query = RideQuery::new("51.470020,-0.454295", "51.00000,1.0000", Some(4))?;
//!
//! for option in engine.cheapest_per_category(&query).await {
//!     println!("{option}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
