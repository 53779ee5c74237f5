//! Catalog-backed recommendations.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use super::{decode_all, rng_from};
use crate::application::recommendation::{random_listings, recommend_similar};
use crate::domain::{BookListing, Genre, UserId, UserPreference};
use crate::error::Result;
use crate::port::outbound::auth::AuthProvider;
use crate::port::outbound::store::{collections, DocumentStore, Query};

/// Serves the home-page and listing-page recommendation rows.
pub struct RecommendationService<S, A> {
    store: Arc<S>,
    auth: Arc<A>,
    rng: Mutex<StdRng>,
}

impl<S: DocumentStore, A: AuthProvider> RecommendationService<S, A> {
    pub fn new(store: Arc<S>, auth: Arc<A>) -> Self {
        Self::with_seed(store, auth, None)
    }

    /// Service whose backfill sampling is reproducible when `seed` is set.
    pub fn with_seed(store: Arc<S>, auth: Arc<A>, seed: Option<u64>) -> Self {
        Self {
            store,
            auth,
            rng: rng_from(seed),
        }
    }

    /// Recommendations for the signed-in reader, excluding their own listings.
    ///
    /// Falls back to random listings when nobody is signed in or the store
    /// fails, and to an empty list when even that fails.
    pub async fn personalized(&self, count: usize) -> Vec<BookListing> {
        match self.try_personalized(count).await {
            Ok(listings) => listings,
            Err(e) => {
                warn!(error = %e, "Personalized recommendations degraded to random listings");
                self.random(count).await
            }
        }
    }

    async fn try_personalized(&self, count: usize) -> Result<Vec<BookListing>> {
        let user = self.auth.require_user()?;
        let catalog = self.catalog().await?;
        let preference = self.preference(&user).await?;

        let available: Vec<BookListing> = catalog
            .into_iter()
            .filter(|b| b.owner_id() != Some(&user))
            .collect();

        let genre = preference
            .leading_genre()
            .cloned()
            .unwrap_or(Genre::Fiction);
        let picks = recommend_similar(
            &available,
            None,
            &genre,
            &preference,
            count,
            &mut *self.rng.lock(),
        )
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

        debug!(user = %user, available = available.len(), picked = picks.len(), "Personalized recommendations");
        Ok(picks)
    }

    /// Listings like `listing`, never including `listing` itself.
    ///
    /// Uses the signed-in reader's preference when one is stored, the default
    /// preference otherwise. Store failures yield an empty row.
    pub async fn similar(&self, listing: &BookListing, count: usize) -> Vec<BookListing> {
        let catalog = match self.catalog().await {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(listing = %listing.id(), error = %e, "Similar listings unavailable");
                return Vec::new();
            }
        };
        let preference = match self.auth.current_user() {
            Some(user) => self
                .preference(&user)
                .await
                .unwrap_or_else(|_| UserPreference::fallback()),
            None => UserPreference::fallback(),
        };

        recommend_similar(
            &catalog,
            Some(listing.id()),
            listing.genre(),
            &preference,
            count,
            &mut *self.rng.lock(),
        )
        .into_iter()
        .cloned()
        .collect()
    }

    /// `count` listings drawn at random; empty when the catalog is unreadable.
    pub async fn random(&self, count: usize) -> Vec<BookListing> {
        match self.catalog().await {
            Ok(catalog) => random_listings(&catalog, count, &mut *self.rng.lock())
                .into_iter()
                .cloned()
                .collect(),
            Err(e) => {
                warn!(error = %e, "Random listings unavailable");
                Vec::new()
            }
        }
    }

    async fn catalog(&self) -> Result<Vec<BookListing>> {
        let documents = self
            .store
            .query(&Query::collection(collections::BOOKS))
            .await?;
        Ok(decode_all(collections::BOOKS, &documents))
    }

    /// Stored preference for `user`, or the default when none is stored.
    async fn preference(&self, user: &UserId) -> Result<UserPreference> {
        let documents = self
            .store
            .query(
                &Query::collection(collections::USER_PREFERENCES)
                    .where_eq("userId", user.as_str())
                    .limit(1),
            )
            .await?;
        Ok(decode_all(collections::USER_PREFERENCES, &documents)
            .into_iter()
            .next()
            .unwrap_or_else(UserPreference::fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::store::StaticAuth;
    use crate::testkit::domain::{catalog, listing};
    use crate::testkit::store::{put_preference, with_listings};

    #[tokio::test]
    async fn personalized_follows_stored_preference_and_skips_own_listings() {
        let mut books = catalog();
        books.push(listing("own", "Somebody", Genre::Poetry).with_owner("u1"));
        let store = with_listings(&books);
        put_preference(&store, "u1", &["Poetry"]);

        let service = RecommendationService::with_seed(
            Arc::clone(&store),
            Arc::new(StaticAuth::signed_in("u1")),
            Some(3),
        );
        let picks = service.personalized(4).await;

        assert_eq!(picks.len(), 4);
        assert_eq!(picks[0].id().as_str(), "p1");
        assert!(picks.iter().all(|b| b.id().as_str() != "own"));
    }

    #[tokio::test]
    async fn missing_preference_defaults_to_fiction() {
        let store = with_listings(&catalog());
        let service = RecommendationService::with_seed(
            store,
            Arc::new(StaticAuth::signed_in("u9")),
            Some(3),
        );
        let picks = service.personalized(4).await;
        assert_eq!(picks.len(), 4);
        assert_eq!(picks[0].genre(), &Genre::Fiction);
        assert_eq!(picks[1].genre(), &Genre::Fiction);
    }

    #[tokio::test]
    async fn anonymous_visitor_gets_random_listings() {
        let store = with_listings(&catalog());
        let service =
            RecommendationService::with_seed(store, Arc::new(StaticAuth::anonymous()), Some(3));
        let picks = service.personalized(5).await;
        assert_eq!(picks.len(), 5);
    }

    #[tokio::test]
    async fn offline_store_yields_empty_row() {
        let store = with_listings(&catalog());
        store.set_offline(true);
        let service = RecommendationService::new(store, Arc::new(StaticAuth::signed_in("u1")));
        assert!(service.personalized(5).await.is_empty());
    }

    #[tokio::test]
    async fn similar_excludes_the_listing_itself() {
        let books = catalog();
        let store = with_listings(&books);
        let service =
            RecommendationService::with_seed(store, Arc::new(StaticAuth::anonymous()), Some(11));
        let anchor = books.iter().find(|b| b.id().as_str() == "m1").unwrap();

        let picks = service.similar(anchor, 4).await;
        assert_eq!(picks.len(), 4);
        assert!(picks.iter().all(|b| b.id() != anchor.id()));
        // Content matches lead: the anchor's genre joins the default Fiction.
        assert!(picks[..2]
            .iter()
            .all(|b| matches!(b.genre(), Genre::Mystery | Genre::Fiction)));
    }
}
