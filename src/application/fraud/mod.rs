//! Transaction screening.
//!
//! [`scorer::score_transaction`] produces an additive anomaly score;
//! [`check_transaction`] turns it into a [`ReviewDecision`].

pub mod scorer;

use serde::Serialize;

use crate::domain::{AnomalyResult, ReviewDecision, Transaction};

pub use scorer::{decide, score_transaction, BLOCK_THRESHOLD, SUSPICIOUS_THRESHOLD};

/// A scored transaction together with its decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screening {
    pub result: AnomalyResult,
    pub decision: ReviewDecision,
    /// True when the buyer's history could not be loaded and the transaction
    /// was scored without it.
    pub degraded: bool,
}

impl Screening {
    /// Whether the transaction may go ahead.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        self.decision.is_approved()
    }

    /// Whether a person must look at this transaction.
    #[must_use]
    pub const fn requires_review(&self) -> bool {
        self.decision.requires_review()
    }

    /// Message shown to the buyer.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.decision.message()
    }
}

/// Score `tx` against `history` and classify the outcome.
///
/// Above [`BLOCK_THRESHOLD`] the transaction is blocked; between
/// [`SUSPICIOUS_THRESHOLD`] and the block threshold (inclusive) it is
/// approved but held for review; below that it is approved outright.
#[must_use]
pub fn check_transaction(tx: &Transaction, history: &[Transaction]) -> Screening {
    let result = score_transaction(tx, history);
    let decision = decide(&result);
    Screening {
        result,
        decision,
        degraded: false,
    }
}
