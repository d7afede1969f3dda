//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! This module provides application-level services including:
//! - [`RideAggregationEngine`]: Concurrent supplier fan-out and ranking
//! - [`RankingStrategy`]: Strategies for ordering ride options
//! - [`normalize`]: Supplier response normalization

pub mod normalizer;
pub mod ranking_strategy;
pub mod ride_aggregation;

pub use normalizer::normalize;
pub use ranking_strategy::{CheapestPerCategoryStrategy, PriceDescendingStrategy, RankingStrategy};
pub use ride_aggregation::{AggregationConfig, RideAggregationEngine};
