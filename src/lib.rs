//! BookXchange - pricing, fraud screening, and recommendations for a
//! second-hand book marketplace.
//!
//! # Architecture
//!
//! The scoring core is pure and synchronous; services around it talk to the
//! marketplace's document store through ports:
//!
//! - **`application::pricing`** - condition-ladder price estimator with
//!   popularity, supply, demand, and age multipliers
//! - **`application::fraud`** - additive anomaly score over five rules and
//!   the approve / review / block decision
//! - **`application::recommendation`** - content and author-interaction
//!   matchers blended with random backfill
//! - **`application::chat`** - keyword knowledge-base assistant
//! - **`application::service`** - store-backed services with fallbacks
//!
//! # Modules
//!
//! - [`domain`] - listings, preferences, transactions, and their invariants
//! - [`port`] - traits for the document store, auth, and candidate matchers
//! - [`adapter`] - in-memory store, static auth, and the CLI
//! - [`infrastructure`] - configuration and wiring
//! - [`error`] - error types for the crate
//!
//! # Example
//!
//! ```
//! use bookxchange::application::pricing::estimate_price_at;
//! use bookxchange::domain::{Condition, Genre, PricingFactors};
//!
//! let factors = PricingFactors::new(Condition::LikeNew, Genre::NonFiction);
//! assert_eq!(estimate_price_at(&factors, 2026), 360);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
