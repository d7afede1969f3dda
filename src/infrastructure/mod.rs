//! # Infrastructure Layer
//!
//! Adapters to external systems. The only external system is the set of
//! supplier HTTP endpoints.

pub mod suppliers;
