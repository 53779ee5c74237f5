//! Document store port.
//!
//! The marketplace keeps its state in a hosted document database. The
//! services only need field-equality queries with optional ordering and
//! limit, keyed lookups, and inserts.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::DocumentId;
use crate::error::BackendError;

/// Collection names used by the marketplace.
pub mod collections {
    pub const BOOKS: &str = "books";
    pub const USER_PREFERENCES: &str = "userPreferences";
    pub const TRANSACTIONS: &str = "transactions";
    pub const PRICE_SUGGESTIONS: &str = "priceSuggestions";
    pub const CHAT_INTERACTIONS: &str = "chatInteractions";
    pub const CHAT_FEEDBACK: &str = "chatFeedback";
    pub const BOOK_VIEWS: &str = "bookViews";
}

/// Field map of a stored document.
pub type Fields = Map<String, Value>;

/// A document together with its store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: DocumentId, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// Decode into `T`, exposing the document id as an `id` field.
    pub fn decode<T: DeserializeOwned>(&self, collection: &str) -> Result<T, BackendError> {
        let mut fields = self.fields.clone();
        fields
            .entry("id")
            .or_insert_with(|| Value::String(self.id.as_str().to_string()));
        serde_json::from_value(Value::Object(fields)).map_err(|e| BackendError::Decode {
            collection: collection.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Encode `value` as a field map for insertion.
pub fn to_fields<T: Serialize>(collection: &str, value: &T) -> Result<Fields, BackendError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(BackendError::Decode {
            collection: collection.to_string(),
            reason: format!("expected an object, got {other}"),
        }),
        Err(e) => Err(BackendError::Decode {
            collection: collection.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Sort direction for ordered queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Field-equality query over one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: String,
    pub filters: Vec<(String, Value)>,
    pub order_by: Option<(String, Direction)>,
    pub limit: Option<usize>,
}

impl Query {
    /// Every document in `collection`.
    pub fn collection(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            filters: Vec::new(),
            order_by: None,
            limit: None,
        }
    }

    /// Keep documents whose `field` equals `value`.
    #[must_use]
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by = Some((field.into(), direction));
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether `fields` satisfies every filter.
    #[must_use]
    pub fn matches(&self, fields: &Fields) -> bool {
        self.filters
            .iter()
            .all(|(field, value)| fields.get(field) == Some(value))
    }
}

/// Storage operations against the hosted document database.
pub trait DocumentStore: Send + Sync {
    /// Run a field-equality query.
    fn query(&self, query: &Query) -> impl Future<Output = Result<Vec<Document>, BackendError>> + Send;

    /// Fetch one document by id.
    fn get(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> impl Future<Output = Result<Document, BackendError>> + Send;

    /// Insert a document, returning its new id.
    fn insert(
        &self,
        collection: &str,
        fields: Fields,
    ) -> impl Future<Output = Result<DocumentId, BackendError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: String,
        name: String,
    }

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("fixture is an object"),
        }
    }

    #[test]
    fn decode_injects_document_id() {
        let doc = Document::new(DocumentId::from("d1"), fields(json!({"name": "x"})));
        let row: Row = doc.decode("rows").unwrap();
        assert_eq!(
            row,
            Row {
                id: "d1".into(),
                name: "x".into()
            }
        );
    }

    #[test]
    fn decode_failure_names_collection() {
        let doc = Document::new(DocumentId::from("d1"), fields(json!({"name": 3})));
        let err = doc.decode::<Row>("rows").unwrap_err();
        assert!(matches!(err, BackendError::Decode { ref collection, .. } if collection == "rows"));
    }

    #[test]
    fn query_matches_all_filters() {
        let q = Query::collection("books")
            .where_eq("genre", "Poetry")
            .where_eq("ownerId", "u1");
        assert!(q.matches(&fields(json!({"genre": "Poetry", "ownerId": "u1", "x": 1}))));
        assert!(!q.matches(&fields(json!({"genre": "Poetry", "ownerId": "u2"}))));
        assert!(!q.matches(&fields(json!({"genre": "Poetry"}))));
    }

    #[test]
    fn non_object_values_cannot_be_stored() {
        assert!(to_fields("rows", &3).is_err());
        assert!(to_fields("rows", &json!({"a": 1})).is_ok());
    }
}
