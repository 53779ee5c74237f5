//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! ```
//! use bookxchange::domain::error::DomainError;
//! use bookxchange::domain::listing::{BookListing, Condition, Genre};
//! use rust_decimal_macros::dec;
//!
//! let result = BookListing::try_new(
//!     "b1",
//!     "Dune",
//!     "Frank Herbert",
//!     Genre::ScienceFiction,
//!     Condition::Good,
//!     dec!(0),
//! );
//!
//! assert!(matches!(result, Err(DomainError::NonPositivePrice { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Listing prices must be strictly positive.
    #[error("price must be positive, got {price}")]
    NonPositivePrice {
        /// The invalid price that was provided.
        price: rust_decimal::Decimal,
    },

    /// Transaction amounts must be strictly positive.
    #[error("transaction amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The invalid amount that was provided.
        amount: rust_decimal::Decimal,
    },

    /// Condition label is not on the condition ladder.
    #[error("unknown condition '{label}'")]
    UnknownCondition {
        /// The label that failed to parse.
        label: String,
    },

    /// Identifiers must not be empty.
    #[error("{field} cannot be empty")]
    EmptyId {
        /// Which identifier was empty.
        field: &'static str,
    },

    /// Required text fields must not be blank.
    #[error("{field} cannot be blank")]
    BlankField {
        /// Which field was blank.
        field: &'static str,
    },

    /// Demand scores live on a 0-100 scale.
    #[error("demand score must be within 0..=100, got {score}")]
    DemandOutOfRange {
        /// The invalid score.
        score: f64,
    },
}
