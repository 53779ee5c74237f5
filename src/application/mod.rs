//! Application layer: the marketplace scoring core and the services that
//! wire it to the store.
//!
//! - [`pricing`]: price estimator and market heuristics
//! - [`fraud`]: anomaly scoring and review decisions
//! - [`recommendation`]: content and interaction matchers and the blender
//! - [`chat`]: keyword assistant
//! - [`service`]: store-backed services with fallback policy

pub mod chat;
pub mod fraud;
pub mod pricing;
pub mod recommendation;
pub mod service;
