//! Book listings and their graded attributes.
//!
//! A [`BookListing`] is the unit every scorer works over. Its condition sits on
//! a fixed five-step ladder and its genre is one of the marketplace's known
//! shelves, with [`Genre::Other`] catching anything a seller typed by hand.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{ListingId, UserId};

/// Physical condition of a book.
///
/// Variants are declared worst-first so the derived ordering follows the
/// ladder: `LikeNew > VeryGood > Good > Fair > Acceptable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Acceptable")]
    Acceptable,
    #[serde(rename = "Fair")]
    Fair,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Very Good")]
    VeryGood,
    #[serde(rename = "Like New")]
    LikeNew,
}

impl Condition {
    /// Every condition, best first.
    pub const ALL: [Condition; 5] = [
        Condition::LikeNew,
        Condition::VeryGood,
        Condition::Good,
        Condition::Fair,
        Condition::Acceptable,
    ];

    /// Display label used by the storefront and the store documents.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Condition::LikeNew => "Like New",
            Condition::VeryGood => "Very Good",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Acceptable => "Acceptable",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Condition::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownCondition {
                label: s.to_string(),
            })
    }
}

/// Book genre.
///
/// Labels outside the known set are preserved verbatim in [`Genre::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Genre {
    Fiction,
    NonFiction,
    ScienceFiction,
    Mystery,
    Romance,
    Biography,
    History,
    Poetry,
    SelfHelp,
    Other(String),
}

impl Genre {
    /// The genres offered on the listing form.
    pub const KNOWN: [Genre; 9] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::ScienceFiction,
        Genre::Mystery,
        Genre::Romance,
        Genre::Biography,
        Genre::History,
        Genre::Poetry,
        Genre::SelfHelp,
    ];

    /// Parse a label; unknown labels become [`Genre::Other`].
    #[must_use]
    pub fn parse(label: &str) -> Self {
        let wanted = label.trim();
        Self::KNOWN
            .iter()
            .find(|g| g.label().eq_ignore_ascii_case(wanted))
            .cloned()
            .unwrap_or_else(|| Genre::Other(wanted.to_string()))
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::Biography => "Biography",
            Genre::History => "History",
            Genre::Poetry => "Poetry",
            Genre::SelfHelp => "Self-Help",
            Genre::Other(label) => label,
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Genre {
    fn from(s: String) -> Self {
        Genre::parse(&s)
    }
}

impl From<&str> for Genre {
    fn from(s: &str) -> Self {
        Genre::parse(s)
    }
}

impl From<Genre> for String {
    fn from(g: Genre) -> Self {
        match g {
            Genre::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// A book offered for sale or trade.
///
/// Construct through [`BookListing::try_new`]; deserialization runs the same
/// validation so a listing with a non-positive price never exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawListing")]
pub struct BookListing {
    id: ListingId,
    title: String,
    author: String,
    genre: Genre,
    condition: Condition,
    price: Decimal,
    #[serde(rename = "publishYear", skip_serializing_if = "Option::is_none")]
    publication_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    owner_id: Option<UserId>,
}

impl BookListing {
    /// Create a listing, rejecting empty ids and non-positive prices.
    pub fn try_new(
        id: impl Into<ListingId>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: Genre,
        condition: Condition,
        price: Decimal,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        if id.as_str().is_empty() {
            return Err(DomainError::EmptyId { field: "listing id" });
        }
        if price <= Decimal::ZERO {
            return Err(DomainError::NonPositivePrice { price });
        }
        Ok(Self {
            id,
            title: title.into(),
            author: author.into(),
            genre,
            condition,
            price,
            publication_year: None,
            description: None,
            owner_id: None,
        })
    }

    #[must_use]
    pub fn with_publication_year(mut self, year: i32) -> Self {
        self.publication_year = Some(year);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<UserId>) -> Self {
        self.owner_id = Some(owner.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &ListingId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn genre(&self) -> &Genre {
        &self.genre
    }

    #[must_use]
    pub const fn condition(&self) -> Condition {
        self.condition
    }

    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    #[must_use]
    pub const fn publication_year(&self) -> Option<i32> {
        self.publication_year
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Seller who listed the book, when the store recorded one.
    #[must_use]
    pub fn owner_id(&self) -> Option<&UserId> {
        self.owner_id.as_ref()
    }
}

/// A listing as submitted by a seller, before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    title: String,
    author: String,
    genre: Genre,
    condition: Condition,
    price: Decimal,
    #[serde(rename = "publishYear", skip_serializing_if = "Option::is_none")]
    publication_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl ListingDraft {
    /// Validate the form fields: title and author must not be blank and the
    /// price must be positive.
    pub fn try_new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: Genre,
        condition: Condition,
        price: Decimal,
    ) -> Result<Self, DomainError> {
        let title = title.into().trim().to_string();
        let author = author.into().trim().to_string();
        if title.is_empty() {
            return Err(DomainError::BlankField { field: "title" });
        }
        if author.is_empty() {
            return Err(DomainError::BlankField { field: "author" });
        }
        if price <= Decimal::ZERO {
            return Err(DomainError::NonPositivePrice { price });
        }
        Ok(Self {
            title,
            author,
            genre,
            condition,
            price,
            publication_year: None,
            description: None,
        })
    }

    #[must_use]
    pub fn with_publication_year(mut self, year: Option<i32>) -> Self {
        self.publication_year = year;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The stored listing this draft became.
    pub fn into_listing(
        self,
        id: impl Into<ListingId>,
        owner: impl Into<UserId>,
    ) -> Result<BookListing, DomainError> {
        let mut listing = BookListing::try_new(
            id,
            self.title,
            self.author,
            self.genre,
            self.condition,
            self.price,
        )?
        .with_owner(owner);
        listing.publication_year = self.publication_year;
        listing.description = self.description;
        Ok(listing)
    }
}

/// Wire shape of a listing before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawListing {
    id: ListingId,
    title: String,
    author: String,
    genre: Genre,
    condition: Condition,
    price: Decimal,
    #[serde(default, rename = "publishYear")]
    publication_year: Option<i32>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    owner_id: Option<UserId>,
}

impl TryFrom<RawListing> for BookListing {
    type Error = DomainError;

    fn try_from(raw: RawListing) -> Result<Self, Self::Error> {
        let mut listing = BookListing::try_new(
            raw.id,
            raw.title,
            raw.author,
            raw.genre,
            raw.condition,
            raw.price,
        )?;
        listing.publication_year = raw.publication_year;
        listing.description = raw.description;
        listing.owner_id = raw.owner_id;
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn condition_ladder_orders_best_first() {
        assert!(Condition::LikeNew > Condition::VeryGood);
        assert!(Condition::VeryGood > Condition::Good);
        assert!(Condition::Good > Condition::Fair);
        assert!(Condition::Fair > Condition::Acceptable);
    }

    #[test]
    fn condition_parses_labels_case_insensitively() {
        assert_eq!("like new".parse::<Condition>().unwrap(), Condition::LikeNew);
        assert_eq!(" Fair ".parse::<Condition>().unwrap(), Condition::Fair);
        assert!(matches!(
            "Mint".parse::<Condition>(),
            Err(DomainError::UnknownCondition { .. })
        ));
    }

    #[test]
    fn genre_keeps_unknown_labels() {
        assert_eq!(Genre::parse("self-help"), Genre::SelfHelp);
        assert_eq!(Genre::parse("Cookbooks"), Genre::Other("Cookbooks".into()));
        assert_eq!(String::from(Genre::NonFiction), "Non-Fiction");
    }

    #[test]
    fn listing_rejects_non_positive_price() {
        let err = BookListing::try_new(
            "b1",
            "T",
            "A",
            Genre::Fiction,
            Condition::Good,
            dec!(-5),
        )
        .unwrap_err();
        assert_eq!(err, DomainError::NonPositivePrice { price: dec!(-5) });
    }

    #[test]
    fn listing_rejects_empty_id() {
        let err =
            BookListing::try_new("", "T", "A", Genre::Fiction, Condition::Good, dec!(1)).unwrap_err();
        assert!(matches!(err, DomainError::EmptyId { .. }));
    }

    #[test]
    fn listing_deserializes_store_document() {
        let json = r#"{
            "id": "b9",
            "title": "Gitanjali",
            "author": "Rabindranath Tagore",
            "genre": "Poetry",
            "condition": "Very Good",
            "price": 180,
            "publishYear": 1910,
            "ownerId": "u1"
        }"#;
        let listing: BookListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.genre(), &Genre::Poetry);
        assert_eq!(listing.condition(), Condition::VeryGood);
        assert_eq!(listing.publication_year(), Some(1910));
        assert_eq!(listing.owner_id().map(UserId::as_str), Some("u1"));
    }

    #[test]
    fn draft_trims_and_validates_form_fields() {
        let draft = ListingDraft::try_new(" Dune ", "Frank Herbert", Genre::ScienceFiction, Condition::Good, dec!(250))
            .unwrap()
            .with_description(Some("  ".into()));
        assert_eq!(draft.title(), "Dune");

        let listing = draft.into_listing("b1", "u1").unwrap();
        assert_eq!(listing.title(), "Dune");
        assert_eq!(listing.owner_id().map(UserId::as_str), Some("u1"));
        assert_eq!(listing.description(), None);

        assert_eq!(
            ListingDraft::try_new("  ", "A", Genre::Fiction, Condition::Good, dec!(1)).unwrap_err(),
            DomainError::BlankField { field: "title" }
        );
        assert_eq!(
            ListingDraft::try_new("T", "", Genre::Fiction, Condition::Good, dec!(1)).unwrap_err(),
            DomainError::BlankField { field: "author" }
        );
        assert!(matches!(
            ListingDraft::try_new("T", "A", Genre::Fiction, Condition::Good, dec!(0)),
            Err(DomainError::NonPositivePrice { .. })
        ));
    }

    #[test]
    fn draft_encodes_with_store_field_names() {
        let draft = ListingDraft::try_new("T", "A", Genre::NonFiction, Condition::VeryGood, dec!(120))
            .unwrap()
            .with_publication_year(Some(1999));
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["genre"], "Non-Fiction");
        assert_eq!(value["condition"], "Very Good");
        assert_eq!(value["publishYear"], 1999);
        assert!(value.get("description").is_none());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn listing_deserialization_validates_price() {
        let json = r#"{"id":"b","title":"t","author":"a","genre":"Fiction","condition":"Good","price":0}"#;
        assert!(serde_json::from_str::<BookListing>(json).is_err());
    }
}
