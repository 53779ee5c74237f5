//! Store-backed services.
//!
//! These sit between the pure scorers and the hosted document store. Each one
//! takes its collaborators by injection and owns the fallback policy for its
//! feature: store failures are logged and replaced by a degraded result,
//! except where the caller must know a write did not happen.

mod chat;
mod listing;
mod pricing;
mod recommendation;
mod transaction;

pub use chat::ChatService;
pub use listing::{ListingFilter, ListingPage, ListingService, DEFAULT_PAGE_SIZE};
pub use pricing::PriceSuggestionService;
pub use recommendation::RecommendationService;
pub use transaction::{Recorded, TransactionService, TransactionStatus};

use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::port::outbound::store::Document;

/// Decode every document, skipping (and logging) the malformed ones.
fn decode_all<T: DeserializeOwned>(collection: &str, documents: &[Document]) -> Vec<T> {
    documents
        .iter()
        .filter_map(|doc| match doc.decode(collection) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(collection, id = %doc.id, error = %e, "Skipping malformed document");
                None
            }
        })
        .collect()
}

/// Timestamp field value in the store's sortable text form.
fn timestamp(at: DateTime<Utc>) -> Value {
    Value::String(at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Random source shared by a service's requests.
fn rng_from(seed: Option<u64>) -> Mutex<StdRng> {
    Mutex::new(match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    })
}
