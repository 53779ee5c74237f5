//! Builders for domain primitives used across tests.
//!
//! Provides a small fixed catalog and concise factories for listings,
//! preferences, and transactions so tests focus on assertions rather than
//! construction boilerplate.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::{BookListing, Condition, Genre, ListingId, Transaction, UserPreference};

/// Create a `Good` listing priced at 200.
pub fn listing(id: &str, author: &str, genre: Genre) -> BookListing {
    BookListing::try_new(
        id,
        format!("Book {id}"),
        author,
        genre,
        Condition::Good,
        Decimal::from(200),
    )
    .expect("fixture listing is valid")
}

/// Create a listing with an explicit grade and price.
pub fn priced_listing(id: &str, genre: Genre, condition: Condition, price: Decimal) -> BookListing {
    BookListing::try_new(id, format!("Book {id}"), "Anon", genre, condition, price)
        .expect("fixture listing is valid")
}

/// Twelve listings across six genres.
///
/// Austen wrote `f1`, `f2` and `r1`; Christie wrote `m1` and `m2`. Every other
/// author has a single book. Fiction comes first in catalog order.
pub fn catalog() -> Vec<BookListing> {
    vec![
        listing("f1", "Austen", Genre::Fiction),
        listing("f2", "Austen", Genre::Fiction),
        listing("f3", "Rowling", Genre::Fiction),
        listing("m1", "Christie", Genre::Mystery),
        listing("m2", "Christie", Genre::Mystery),
        listing("m3", "Doyle", Genre::Mystery),
        listing("s1", "Herbert", Genre::ScienceFiction),
        listing("s2", "Asimov", Genre::ScienceFiction),
        listing("p1", "Tagore", Genre::Poetry),
        listing("h1", "Harari", Genre::History),
        listing("b1", "Isaacson", Genre::Biography),
        listing("r1", "Austen", Genre::Romance),
    ]
}

/// Build a preference from genres, viewed ids, and purchased ids.
pub fn preference(genres: &[Genre], viewed: &[&str], purchased: &[&str]) -> UserPreference {
    UserPreference {
        favorite_genres: genres.to_vec(),
        recently_viewed: viewed.iter().copied().map(ListingId::from).collect(),
        purchase_history: purchased.iter().copied().map(ListingId::from).collect(),
    }
}

/// The demo reader: three favorite genres and a short history.
pub fn sample_preference() -> UserPreference {
    preference(
        &[Genre::Fiction, Genre::Mystery, Genre::ScienceFiction],
        &["1", "3", "5", "9"],
        &["2", "7", "11"],
    )
}

/// Ids of `listings` as string slices, in order.
pub fn ids<'a>(listings: &[&'a BookListing]) -> Vec<&'a str> {
    listings.iter().copied().map(|b| b.id().as_str()).collect()
}

/// Fixed reference instant for transaction fixtures.
pub fn instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("fixed instant is valid")
}

/// A card payment from a year-old account at [`instant`].
pub fn transaction(buyer: &str, amount: Decimal) -> Transaction {
    Transaction::builder(buyer, "item", amount)
        .timestamp(instant())
        .payment_method("card")
        .account_age_days(365)
        .build()
        .expect("fixture transaction is valid")
}

/// A prior card payment `minutes_ago` before [`instant`].
pub fn prior_transaction(buyer: &str, amount: Decimal, minutes_ago: i64) -> Transaction {
    Transaction::builder(buyer, "earlier", amount)
        .timestamp(instant() - Duration::minutes(minutes_ago))
        .payment_method("card")
        .account_age_days(365)
        .build()
        .expect("fixture transaction is valid")
}
