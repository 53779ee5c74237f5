//! Recommendation matcher port.
//!
//! A [`CandidateMatcher`] proposes listings for a reader. The blender runs
//! several matchers and merges their proposals, so a new signal is added by
//! implementing this trait rather than by touching the blender.
//!
//! # Example
//!
//! ```
//! use bookxchange::domain::BookListing;
//! use bookxchange::port::inbound::recommendation::{CandidateMatcher, MatchRequest};
//! use rand::RngCore;
//!
//! struct Cheapest;
//!
//! impl CandidateMatcher for Cheapest {
//!     fn name(&self) -> &'static str { "cheapest" }
//!
//!     fn candidates<'c>(
//!         &self,
//!         request: &MatchRequest<'c, '_>,
//!         _rng: &mut dyn RngCore,
//!     ) -> Vec<&'c BookListing> {
//!         let mut books: Vec<_> = request.eligible().collect();
//!         books.sort_by_key(|b| b.price());
//!         books.truncate(request.limit);
//!         books
//!     }
//! }
//! ```

use rand::RngCore;

use crate::domain::{BookListing, ListingId, UserPreference};

/// Inputs shared by every matcher for one recommendation call.
///
/// Proposals borrow from the catalog (`'c`); the reader's preference and the
/// excluded id (`'r`) only need to live for the call.
#[derive(Debug, Clone, Copy)]
pub struct MatchRequest<'c, 'r> {
    /// Listings to choose from, in store order.
    pub catalog: &'c [BookListing],
    /// The reader's taste.
    pub preference: &'r UserPreference,
    /// Listing that must never be proposed (usually the one being viewed).
    pub exclude: Option<&'r ListingId>,
    /// Maximum number of listings to return.
    pub limit: usize,
}

impl<'c, 'r> MatchRequest<'c, 'r> {
    pub fn new(
        catalog: &'c [BookListing],
        preference: &'r UserPreference,
        exclude: Option<&'r ListingId>,
        limit: usize,
    ) -> Self {
        Self {
            catalog,
            preference,
            exclude,
            limit,
        }
    }

    /// Same request with a different limit.
    #[must_use]
    pub const fn with_limit(self, limit: usize) -> Self {
        Self { limit, ..self }
    }

    /// Whether `listing` is the excluded one.
    #[must_use]
    pub fn is_excluded(&self, listing: &BookListing) -> bool {
        self.exclude == Some(listing.id())
    }

    /// Catalog listings other than the excluded one, in store order.
    pub fn eligible(&self) -> impl Iterator<Item = &'c BookListing> + '_ {
        self.catalog.iter().filter(move |b| !self.is_excluded(b))
    }
}

/// A source of recommendation candidates.
///
/// Implementations must never return the excluded listing and never more
/// than `request.limit` listings.
pub trait CandidateMatcher: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Propose up to `request.limit` listings, best first.
    fn candidates<'c>(
        &self,
        request: &MatchRequest<'c, '_>,
        rng: &mut dyn RngCore,
    ) -> Vec<&'c BookListing>;
}
