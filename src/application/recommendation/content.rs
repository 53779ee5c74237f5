//! Genre-based content matcher.
//!
//! Stands in for a content-embedding model: a listing matches when its genre
//! is one of the reader's favorites. Favorites are treated as a set; their
//! order carries no weight here.

use rand::RngCore;
use tracing::debug;

use crate::domain::{BookListing, ListingId, UserPreference};
use crate::port::inbound::recommendation::{CandidateMatcher, MatchRequest};

/// First `limit` catalog listings whose genre the reader favors, skipping
/// `exclude`.
#[must_use]
pub fn match_by_content<'a>(
    catalog: &'a [BookListing],
    preference: &UserPreference,
    exclude: Option<&ListingId>,
    limit: usize,
) -> Vec<&'a BookListing> {
    catalog
        .iter()
        .filter(|b| preference.favorite_genres.contains(b.genre()))
        .filter(|b| exclude != Some(b.id()))
        .take(limit)
        .collect()
}

/// [`CandidateMatcher`] over [`match_by_content`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentMatcher;

impl CandidateMatcher for ContentMatcher {
    fn name(&self) -> &'static str {
        "content"
    }

    fn candidates<'c>(
        &self,
        request: &MatchRequest<'c, '_>,
        _rng: &mut dyn RngCore,
    ) -> Vec<&'c BookListing> {
        let matches = match_by_content(
            request.catalog,
            request.preference,
            request.exclude,
            request.limit,
        );
        debug!(matcher = self.name(), count = matches.len(), "Content matches");
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Genre;
    use crate::testkit::domain::{catalog, ids, preference};

    #[test]
    fn keeps_catalog_order_and_limit() {
        let books = catalog();
        let pref = preference(&[Genre::Mystery], &[], &[]);
        let matches = match_by_content(&books, &pref, None, 2);
        assert_eq!(ids(&matches), vec!["m1", "m2"]);
    }

    #[test]
    fn favorite_order_does_not_rank() {
        let books = catalog();
        let a = preference(&[Genre::Poetry, Genre::Mystery], &[], &[]);
        let b = preference(&[Genre::Mystery, Genre::Poetry], &[], &[]);
        assert_eq!(
            match_by_content(&books, &a, None, 10),
            match_by_content(&books, &b, None, 10)
        );
    }

    #[test]
    fn never_returns_excluded_listing() {
        let books = catalog();
        let pref = preference(&[Genre::Mystery], &[], &[]);
        let exclude = ListingId::from("m1");
        let matches = match_by_content(&books, &pref, Some(&exclude), 10);
        assert!(matches.iter().all(|b| b.id() != &exclude));
        assert_eq!(ids(&matches), vec!["m2", "m3"]);
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let books = catalog();
        let pref = preference(&[Genre::Mystery], &[], &[]);
        assert!(match_by_content(&books, &pref, None, 0).is_empty());
    }

    #[test]
    fn no_favorites_means_no_matches() {
        let books = catalog();
        let pref = preference(&[], &[], &[]);
        assert!(match_by_content(&books, &pref, None, 5).is_empty());
    }
}
