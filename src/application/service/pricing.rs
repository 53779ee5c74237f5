//! Listing price suggestions backed by catalog statistics.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::{rng_from, timestamp};
use crate::application::pricing::demand::{demand_score, is_popular};
use crate::application::pricing::estimate_price;
use crate::domain::{Condition, Genre, PricingFactors};
use crate::error::{BackendError, Error, Result};
use crate::port::outbound::auth::AuthProvider;
use crate::port::outbound::store::{collections, DocumentStore, Query};

/// Suggests prices for new listings.
pub struct PriceSuggestionService<S, A> {
    store: Arc<S>,
    auth: Arc<A>,
    rng: Mutex<StdRng>,
}

impl<S: DocumentStore, A: AuthProvider> PriceSuggestionService<S, A> {
    pub fn new(store: Arc<S>, auth: Arc<A>) -> Self {
        Self::with_seed(store, auth, None)
    }

    /// Service whose demand draws are reproducible when `seed` is set.
    pub fn with_seed(store: Arc<S>, auth: Arc<A>, seed: Option<u64>) -> Self {
        Self {
            store,
            auth,
            rng: rng_from(seed),
        }
    }

    /// Suggested price for a listing.
    ///
    /// `condition` is `None` for a grade the form could not parse. Never
    /// fails: when the catalog cannot be read the price is estimated from the
    /// book alone.
    pub async fn suggest(
        &self,
        condition: Option<Condition>,
        genre: &Genre,
        publication_year: Option<i32>,
    ) -> u32 {
        match self.suggest_with_market(condition, genre, publication_year).await {
            Ok(price) => price,
            Err(e) => {
                warn!(genre = %genre, error = %e, "Price suggestion degraded to book-only estimate");
                estimate_price(&Self::base_factors(condition, genre, publication_year))
            }
        }
    }

    async fn suggest_with_market(
        &self,
        condition: Option<Condition>,
        genre: &Genre,
        publication_year: Option<i32>,
    ) -> Result<u32> {
        let listings = self
            .store
            .query(&Query::collection(collections::BOOKS).where_eq("genre", genre.label()))
            .await?;
        let supply = listings.len();
        let popular = is_popular(supply);
        let demand = demand_score(popular, &mut *self.rng.lock());

        let factors = Self::base_factors(condition, genre, publication_year)
            .with_popularity(popular)
            .with_supply(u32::try_from(supply).unwrap_or(u32::MAX))
            .with_demand(demand)?;
        let price = estimate_price(&factors);

        if let Some(user) = self.auth.current_user() {
            let record = json!({
                "userId": user.as_str(),
                "condition": condition.map(Condition::label),
                "genre": genre.label(),
                "publishYear": publication_year,
                "suggestedPrice": price,
                "timestamp": timestamp(Utc::now()),
            });
            let Value::Object(fields) = record else {
                return Err(Error::Backend(BackendError::Decode {
                    collection: collections::PRICE_SUGGESTIONS.to_string(),
                    reason: "suggestion is not an object".to_string(),
                }));
            };
            self.store
                .insert(collections::PRICE_SUGGESTIONS, fields)
                .await?;
            info!(user = %user, price, supply, popular, "Stored price suggestion");
        }

        Ok(price)
    }

    fn base_factors(
        condition: Option<Condition>,
        genre: &Genre,
        publication_year: Option<i32>,
    ) -> PricingFactors {
        PricingFactors {
            condition,
            ..PricingFactors::new(Condition::Good, genre.clone())
        }
        .with_publication_year(publication_year)
    }
}
