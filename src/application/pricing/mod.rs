//! Price suggestion.
//!
//! - [`estimator`]: condition-ladder pricing with market multipliers
//! - [`demand`]: popularity and demand signals derived from the catalog

pub mod demand;
pub mod estimator;

pub use estimator::{
    base_price, estimate_price, estimate_price_at, genre_multiplier, price_range, price_range_at,
};
