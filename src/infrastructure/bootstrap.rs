//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::memory::{InMemoryStore, StaticAuth};
use crate::application::service::{
    ChatService, ListingService, PriceSuggestionService, RecommendationService,
    TransactionService,
};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Services wired to the in-memory store and the configured session.
pub struct Marketplace {
    pub store: Arc<InMemoryStore>,
    pub auth: Arc<StaticAuth>,
    pub listings: ListingService<InMemoryStore, StaticAuth>,
    pub pricing: PriceSuggestionService<InMemoryStore, StaticAuth>,
    pub recommendations: RecommendationService<InMemoryStore, StaticAuth>,
    pub transactions: TransactionService<InMemoryStore, StaticAuth>,
    pub chat: ChatService<InMemoryStore, StaticAuth>,
}

/// Build the store from configuration, loading seed data when configured.
pub fn build_store(config: &Config) -> Result<Arc<InMemoryStore>> {
    let store = match &config.store.seed_path {
        Some(path) => InMemoryStore::from_seed_file(path)?,
        None => {
            info!("No seed data configured; starting with an empty store");
            InMemoryStore::new()
        }
    };
    Ok(Arc::new(store))
}

/// Build every service from configuration.
pub fn build_marketplace(config: &Config) -> Result<Marketplace> {
    let store = build_store(config)?;
    let auth = Arc::new(StaticAuth::from_option(config.session.user_id.clone()));
    let seed = config.recommendation.seed;

    Ok(Marketplace {
        listings: ListingService::new(Arc::clone(&store), Arc::clone(&auth)),
        pricing: PriceSuggestionService::with_seed(Arc::clone(&store), Arc::clone(&auth), seed),
        recommendations: RecommendationService::with_seed(
            Arc::clone(&store),
            Arc::clone(&auth),
            seed,
        ),
        transactions: TransactionService::new(Arc::clone(&store), Arc::clone(&auth)),
        chat: ChatService::new(Arc::clone(&store), Arc::clone(&auth)),
        store,
        auth,
    })
}
