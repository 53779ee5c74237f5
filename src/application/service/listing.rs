//! Seller listings: adding books and browsing the catalog.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use super::{decode_all, timestamp};
use crate::domain::{BookListing, Condition, Genre, ListingDraft, ListingId, UserId};
use crate::error::{BackendError, Error, Result};
use crate::port::outbound::auth::AuthProvider;
use crate::port::outbound::store::{collections, to_fields, Direction, DocumentStore, Query};

/// Listings per browse page when the caller does not choose.
pub const DEFAULT_PAGE_SIZE: usize = 10;

const CREATED_AT: &str = "createdAt";

/// Catalog filters. Unset fields match every listing; price bounds are
/// inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub genre: Option<Genre>,
    pub condition: Option<Condition>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl ListingFilter {
    /// Equality filters go to the store, newest first.
    fn query(&self) -> Query {
        let mut query = Query::collection(collections::BOOKS);
        if let Some(genre) = &self.genre {
            query = query.where_eq("genre", genre.label());
        }
        if let Some(condition) = self.condition {
            query = query.where_eq("condition", condition.label());
        }
        query.order_by(CREATED_AT, Direction::Descending)
    }

    fn admits_price(&self, price: Decimal) -> bool {
        self.min_price.map_or(true, |min| price >= min)
            && self.max_price.map_or(true, |max| price <= max)
    }
}

/// One page of browse results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingPage {
    pub listings: Vec<BookListing>,
    /// Pass back as `after` to fetch the following page. `None` when the page
    /// is empty.
    pub next_after: Option<ListingId>,
}

/// Adds and looks up catalog listings.
pub struct ListingService<S, A> {
    store: Arc<S>,
    auth: Arc<A>,
}

impl<S: DocumentStore, A: AuthProvider> ListingService<S, A> {
    pub fn new(store: Arc<S>, auth: Arc<A>) -> Self {
        Self { store, auth }
    }

    /// List a book for sale under the signed-in user.
    pub async fn add(&self, draft: ListingDraft) -> Result<BookListing> {
        let owner = self.auth.require_user()?;

        let now = timestamp(Utc::now());
        let mut fields = to_fields(collections::BOOKS, &draft)?;
        fields.insert("ownerId".into(), owner.as_str().into());
        fields.insert(CREATED_AT.into(), now.clone());
        fields.insert("updatedAt".into(), now);

        let id = self.store.insert(collections::BOOKS, fields).await?;
        let listing = draft.into_listing(id.as_str(), owner)?;
        info!(
            id = %listing.id(),
            owner = ?listing.owner_id().map(UserId::as_str),
            title = listing.title(),
            "Listed book"
        );
        Ok(listing)
    }

    /// One page of the catalog, newest listings first.
    ///
    /// `after` continues from the listing that ended the previous page.
    pub async fn browse(
        &self,
        filter: &ListingFilter,
        after: Option<&ListingId>,
        page_size: usize,
    ) -> Result<ListingPage> {
        let documents = self.store.query(&filter.query()).await?;
        let matching: Vec<BookListing> = decode_all::<BookListing>(collections::BOOKS, &documents)
            .into_iter()
            .filter(|listing| filter.admits_price(listing.price()))
            .collect();

        let start = match after {
            Some(cursor) => {
                let position = matching
                    .iter()
                    .position(|listing| listing.id() == cursor)
                    .ok_or_else(|| {
                        Error::Backend(BackendError::NotFound {
                            collection: collections::BOOKS.to_string(),
                            id: cursor.to_string(),
                        })
                    })?;
                position + 1
            }
            None => 0,
        };

        let listings: Vec<BookListing> =
            matching.into_iter().skip(start).take(page_size).collect();
        let next_after = listings.last().map(|listing| listing.id().clone());
        debug!(
            filter = ?filter,
            start,
            returned = listings.len(),
            "Browsed catalog"
        );
        Ok(ListingPage {
            listings,
            next_after,
        })
    }

    /// One listing, or `None` when the store has no such id.
    pub async fn get(&self, id: &ListingId) -> Result<Option<BookListing>> {
        match self.store.get(collections::BOOKS, &id.as_str().into()).await {
            Ok(document) => Ok(Some(document.decode(collections::BOOKS)?)),
            Err(BackendError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// The signed-in user's listings, newest first.
    pub async fn mine(&self) -> Result<Vec<BookListing>> {
        let owner = self.auth.require_user()?;
        let documents = self
            .store
            .query(
                &Query::collection(collections::BOOKS)
                    .where_eq("ownerId", owner.as_str())
                    .order_by(CREATED_AT, Direction::Descending),
            )
            .await?;
        Ok(decode_all(collections::BOOKS, &documents))
    }
}
