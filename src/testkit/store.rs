//! Pre-populated in-memory stores.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{json, Value};

pub use crate::adapter::outbound::memory::{InMemoryStore, StaticAuth};
use crate::domain::{BookListing, Transaction};
use crate::port::outbound::store::{collections, to_fields, Fields};

fn object(value: Value) -> Fields {
    match value {
        Value::Object(fields) => fields,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Store holding `listings` under their own ids.
pub fn with_listings(listings: &[BookListing]) -> Arc<InMemoryStore> {
    let store = InMemoryStore::new();
    for listing in listings {
        let fields = to_fields(collections::BOOKS, listing).expect("listing encodes");
        store.put(collections::BOOKS, fields);
    }
    Arc::new(store)
}

/// Store a preference document for `user` favoring `genres`.
pub fn put_preference(store: &InMemoryStore, user: &str, genres: &[&str]) {
    store.put(
        collections::USER_PREFERENCES,
        object(json!({ "userId": user, "favoriteGenres": genres })),
    );
}

/// Store `history` as prior transactions, in the order given.
pub fn put_transactions(store: &InMemoryStore, history: &[Transaction]) {
    for tx in history {
        let fields = to_fields(collections::TRANSACTIONS, tx).expect("transaction encodes");
        store.put(collections::TRANSACTIONS, fields);
    }
}

/// Write a seed file holding `listings` into `dir`.
pub fn write_seed(dir: &Path, listings: &[BookListing]) -> PathBuf {
    let path = dir.join("seed.json");
    let seed = json!({ "books": listings });
    std::fs::write(&path, seed.to_string()).expect("write seed file");
    path
}
