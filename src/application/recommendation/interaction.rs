//! Author co-occurrence matcher.
//!
//! Stands in for collaborative filtering: if the reader bought or viewed a
//! book, other books by the same author qualify. Short lists are topped up
//! with random catalog listings.

use std::collections::{HashMap, HashSet};

use rand::{Rng, RngCore};
use tracing::debug;

use super::sample::backfill;
use crate::domain::{BookListing, ListingId, UserPreference};
use crate::port::inbound::recommendation::{CandidateMatcher, MatchRequest};

/// Listings by authors the reader interacted with through a different book,
/// backfilled at random up to `limit`.
pub fn match_by_interaction<'a, R: Rng + ?Sized>(
    catalog: &'a [BookListing],
    preference: &UserPreference,
    exclude: Option<&ListingId>,
    limit: usize,
    rng: &mut R,
) -> Vec<&'a BookListing> {
    if limit == 0 {
        return Vec::new();
    }

    let interacted: HashSet<&ListingId> = preference.interactions().collect();

    // author -> ids of that author's catalog listings the reader touched
    let mut touched_by_author: HashMap<&str, HashSet<&ListingId>> = HashMap::new();
    for listing in catalog.iter().filter(|b| interacted.contains(b.id())) {
        touched_by_author
            .entry(listing.author())
            .or_default()
            .insert(listing.id());
    }

    let mut matches: Vec<&'a BookListing> = catalog
        .iter()
        .filter(|b| {
            touched_by_author
                .get(b.author())
                .is_some_and(|ids| ids.iter().any(|id| *id != b.id()))
        })
        .filter(|b| exclude != Some(b.id()))
        .collect();

    let qualified = matches.len();
    backfill(catalog, &mut matches, exclude, limit, rng);
    matches.truncate(limit);

    debug!(
        qualified,
        returned = matches.len(),
        "Interaction matches"
    );
    matches
}

/// [`CandidateMatcher`] over [`match_by_interaction`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionMatcher;

impl CandidateMatcher for InteractionMatcher {
    fn name(&self) -> &'static str {
        "interaction"
    }

    fn candidates<'c>(
        &self,
        request: &MatchRequest<'c, '_>,
        rng: &mut dyn RngCore,
    ) -> Vec<&'c BookListing> {
        match_by_interaction(
            request.catalog,
            request.preference,
            request.exclude,
            request.limit,
            rng,
        )
    }
}
