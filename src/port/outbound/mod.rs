//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the backend-as-a-service the marketplace runs on:
//! its document database and its authentication provider.

pub mod auth;
pub mod store;
