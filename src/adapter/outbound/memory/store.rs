//! Thread-safe in-memory document store.
//!
//! Stands in for the hosted database in the CLI and in tests. Collections keep
//! insertion order; ordered queries sort a snapshot.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::DocumentId;
use crate::error::{BackendError, Error, Result};
use crate::port::outbound::store::{Direction, Document, DocumentStore, Fields, Query};

/// In-memory [`DocumentStore`].
#[derive(Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    /// When set, every operation fails with [`BackendError::TransientIo`].
    offline: AtomicBool,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON seed file.
    ///
    /// The file holds one array of objects per collection, e.g.
    /// `{"books": [{"id": "b1", ...}]}`. An `id` field becomes the document id;
    /// documents without one get a generated id.
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let seed: HashMap<String, Vec<Value>> = serde_json::from_str(&content)?;
        let store = Self::new();
        for (collection, rows) in seed {
            for row in rows {
                let Value::Object(fields) = row else {
                    return Err(Error::Backend(BackendError::Decode {
                        collection,
                        reason: "seed rows must be objects".to_string(),
                    }));
                };
                store.put(&collection, fields);
            }
        }
        info!(
            path = %path.as_ref().display(),
            documents = store.len(),
            "Loaded seed data"
        );
        Ok(store)
    }

    /// Insert synchronously, honoring an `id` field when present.
    pub fn put(&self, collection: &str, mut fields: Fields) -> DocumentId {
        let id = match fields.remove("id") {
            Some(Value::String(id)) => DocumentId::from(id),
            Some(Value::Number(n)) => DocumentId::from(n.to_string()),
            _ => DocumentId::generate(),
        };
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .push(Document::new(id.clone(), fields));
        id
    }

    /// Snapshot of one collection, in insertion order.
    #[must_use]
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .read()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Total number of documents across collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.read().values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Simulate losing the connection to the backend.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, AtomicOrdering::SeqCst);
    }

    fn ensure_online(&self) -> std::result::Result<(), BackendError> {
        if self.offline.load(AtomicOrdering::SeqCst) {
            return Err(BackendError::TransientIo("store is offline".to_string()));
        }
        Ok(())
    }

    fn run_query(&self, query: &Query) -> std::result::Result<Vec<Document>, BackendError> {
        self.ensure_online()?;
        let mut hits: Vec<Document> = self
            .collections
            .read()
            .get(&query.collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| query.matches(&d.fields))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some((field, direction)) = &query.order_by {
            hits.sort_by(|a, b| {
                let ord = compare_values(a.fields.get(field), b.fields.get(field));
                match direction {
                    Direction::Ascending => ord,
                    Direction::Descending => ord.reverse(),
                }
            });
        }
        if let Some(limit) = query.limit {
            hits.truncate(limit);
        }

        debug!(
            collection = %query.collection,
            filters = query.filters.len(),
            hits = hits.len(),
            "Query"
        );
        Ok(hits)
    }
}

/// Order JSON values: missing < null < bool < number < string.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(v: Option<&Value>) -> u8 {
        match v {
            None => 0,
            Some(Value::Null) => 1,
            Some(Value::Bool(_)) => 2,
            Some(Value::Number(_)) => 3,
            Some(Value::String(_)) => 4,
            Some(_) => 5,
        }
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

impl DocumentStore for InMemoryStore {
    async fn query(&self, query: &Query) -> std::result::Result<Vec<Document>, BackendError> {
        self.run_query(query)
    }

    async fn get(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> std::result::Result<Document, BackendError> {
        self.ensure_online()?;
        self.collections
            .read()
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| &d.id == id).cloned())
            .ok_or_else(|| BackendError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })
    }

    async fn insert(
        &self,
        collection: &str,
        fields: Fields,
    ) -> std::result::Result<DocumentId, BackendError> {
        self.ensure_online()?;
        let id = DocumentId::generate();
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .push(Document::new(id.clone(), fields));
        debug!(collection, id = %id, "Inserted document");
        Ok(id)
    }
}
