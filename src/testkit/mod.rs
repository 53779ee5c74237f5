//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for listings, preferences, and transactions.
//! - [`store`] - Pre-populated in-memory stores and seed files.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod domain;
pub mod store;
