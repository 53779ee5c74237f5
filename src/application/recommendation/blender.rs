//! Hybrid recommendation blender.
//!
//! Runs each registered matcher with half the requested limit, merges the
//! proposals in registration order (first occurrence of an id wins), and
//! tops up any shortfall with random catalog listings.

use std::collections::HashSet;

use rand::RngCore;
use tracing::debug;

use super::content::ContentMatcher;
use super::interaction::InteractionMatcher;
use super::sample::backfill;
use crate::domain::{BookListing, Genre, ListingId, UserPreference};
use crate::port::inbound::recommendation::{CandidateMatcher, MatchRequest};

/// Default number of listings on the home page.
pub const DEFAULT_PERSONALIZED_LIMIT: usize = 8;

/// Default number of "similar books" on a listing page.
pub const DEFAULT_SIMILAR_LIMIT: usize = 4;

/// Ordered set of matchers blended into one list.
///
/// Use [`Blender::default`] for the content-then-interaction blend.
pub struct Blender {
    matchers: Vec<Box<dyn CandidateMatcher>>,
}

impl Default for Blender {
    fn default() -> Self {
        let mut blender = Self::new();
        blender.register(Box::new(ContentMatcher));
        blender.register(Box::new(InteractionMatcher));
        blender
    }
}

impl Blender {
    /// Create a blender with no matchers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Register a matcher. Earlier matchers take priority in the merge.
    pub fn register(&mut self, matcher: Box<dyn CandidateMatcher>) {
        self.matchers.push(matcher);
    }

    /// Names of the registered matchers, in priority order.
    #[must_use]
    pub fn matcher_names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }

    /// Blend recommendations for one request.
    ///
    /// Returns `min(limit, eligible catalog size)` listings with unique ids,
    /// none of them the excluded listing.
    pub fn recommend<'c>(
        &self,
        request: &MatchRequest<'c, '_>,
        rng: &mut dyn RngCore,
    ) -> Vec<&'c BookListing> {
        let limit = request.limit;
        if limit == 0 {
            return Vec::new();
        }

        let share = request.with_limit(limit / 2);
        let mut seen: HashSet<&'c ListingId> = HashSet::new();
        let mut blended: Vec<&'c BookListing> = Vec::with_capacity(limit);

        for matcher in &self.matchers {
            for listing in matcher.candidates(&share, rng) {
                if seen.insert(listing.id()) {
                    blended.push(listing);
                }
            }
        }

        let merged = blended.len();
        backfill(request.catalog, &mut blended, request.exclude, limit, rng);
        blended.truncate(limit);

        debug!(
            matchers = ?self.matcher_names(),
            merged,
            returned = blended.len(),
            limit,
            "Blended recommendations"
        );
        blended
    }
}

/// Content-then-interaction recommendations for a reader.
pub fn recommend<'a>(
    catalog: &'a [BookListing],
    preference: &UserPreference,
    exclude: Option<&ListingId>,
    limit: usize,
    rng: &mut dyn RngCore,
) -> Vec<&'a BookListing> {
    let request = MatchRequest::new(catalog, preference, exclude, limit);
    Blender::default().recommend(&request, rng)
}

/// Home-page recommendations: the blend with nothing excluded.
pub fn recommend_personalized<'a>(
    catalog: &'a [BookListing],
    preference: &UserPreference,
    limit: usize,
    rng: &mut dyn RngCore,
) -> Vec<&'a BookListing> {
    recommend(catalog, preference, None, limit, rng)
}

/// Recommendations biased toward `genre`.
///
/// `genre` is moved to the front of the reader's favorites before blending.
pub fn recommend_similar<'a>(
    catalog: &'a [BookListing],
    exclude: Option<&ListingId>,
    genre: &Genre,
    preference: &UserPreference,
    limit: usize,
    rng: &mut dyn RngCore,
) -> Vec<&'a BookListing> {
    let biased = preference.with_leading_genre(genre);
    recommend(catalog, &biased, exclude, limit, rng)
}
