//! Marketplace domain types.
//!
//! Plain records shared by the scorers and the store-backed services. Nothing
//! here performs I/O.

pub mod error;
pub mod id;
pub mod listing;
pub mod preference;
pub mod pricing;
pub mod transaction;

pub use error::DomainError;
pub use id::{DocumentId, ListingId, UserId};
pub use listing::{BookListing, Condition, Genre, ListingDraft};
pub use preference::UserPreference;
pub use pricing::{PriceRange, PricingFactors};
pub use transaction::{
    AnomalyResult, AnomalySignal, GeoLocation, ReviewDecision, Transaction, TransactionBuilder,
};
