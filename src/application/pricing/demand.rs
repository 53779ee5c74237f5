//! Market-signal heuristics fed into the estimator.
//!
//! Popularity and supply come from how many listings share a genre. Demand
//! has no analytics source yet, so it is drawn at random from a band that
//! sits higher for popular genres.

use rand::Rng;

/// A genre with more listings than this is considered popular.
pub const POPULAR_LISTING_THRESHOLD: usize = 5;

/// Whether a genre with `listing_count` listings counts as popular.
#[must_use]
pub const fn is_popular(listing_count: usize) -> bool {
    listing_count > POPULAR_LISTING_THRESHOLD
}

/// Demand score on the 0-100 scale.
///
/// Uniform over `50..100` for popular genres and `30..80` otherwise.
pub fn demand_score<R: Rng + ?Sized>(popular: bool, rng: &mut R) -> f64 {
    let floor = if popular { 50 } else { 30 };
    f64::from(rng.gen_range(0..50u32) + floor)
}
