//! Random backfill for short candidate lists.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{BookListing, ListingId};

/// Top `chosen` up to `target` with listings drawn uniformly from `catalog`.
///
/// Listings already in `chosen`, listings sharing an id with one already
/// drawn, and the `exclude`d listing are never drawn.
pub fn backfill<'a, R: Rng + ?Sized>(
    catalog: &'a [BookListing],
    chosen: &mut Vec<&'a BookListing>,
    exclude: Option<&ListingId>,
    target: usize,
    rng: &mut R,
) {
    if chosen.len() >= target {
        return;
    }

    let mut taken: HashSet<&'a ListingId> = chosen.iter().copied().map(BookListing::id).collect();
    let mut pool: Vec<&'a BookListing> = catalog
        .iter()
        .filter(|b| !taken.contains(b.id()) && exclude != Some(b.id()))
        .collect();
    pool.shuffle(rng);

    for listing in pool {
        if chosen.len() >= target {
            break;
        }
        if taken.insert(listing.id()) {
            chosen.push(listing);
        }
    }
}

/// `count` listings drawn uniformly from `catalog`, without repeats.
pub fn random_listings<'a, R: Rng + ?Sized>(
    catalog: &'a [BookListing],
    count: usize,
    rng: &mut R,
) -> Vec<&'a BookListing> {
    let mut chosen = Vec::with_capacity(count.min(catalog.len()));
    backfill(catalog, &mut chosen, None, count, rng);
    chosen
}
