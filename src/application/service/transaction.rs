//! Purchase screening and recording.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use super::{decode_all, timestamp};
use crate::application::fraud::{check_transaction, Screening};
use crate::domain::{DocumentId, Transaction, UserId};
use crate::error::{Result, ScreeningError};
use crate::port::outbound::auth::AuthProvider;
use crate::port::outbound::store::{collections, to_fields, Direction, DocumentStore, Query};

/// Stored state of a recorded purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    PendingReview,
}

impl TransactionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::PendingReview => "pending_review",
        }
    }
}

/// A purchase that passed screening and was written to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recorded {
    pub id: DocumentId,
    pub status: TransactionStatus,
    pub screening: Screening,
}

/// Screens purchases against the buyer's history and records them.
pub struct TransactionService<S, A> {
    store: Arc<S>,
    auth: Arc<A>,
}

impl<S: DocumentStore, A: AuthProvider> TransactionService<S, A> {
    pub fn new(store: Arc<S>, auth: Arc<A>) -> Self {
        Self { store, auth }
    }

    /// Screen `tx` against the buyer's stored history.
    ///
    /// When the history cannot be read the transaction is scored on its own
    /// and the screening is marked degraded.
    pub async fn screen(&self, tx: &Transaction) -> Screening {
        match self.history(tx.buyer_id()).await {
            Ok(history) => check_transaction(tx, &history),
            Err(e) => {
                warn!(buyer = %tx.buyer_id(), error = %e, "Screening without purchase history");
                Screening {
                    degraded: true,
                    ..check_transaction(tx, &[])
                }
            }
        }
    }

    /// Screen and record a purchase from `seller`.
    ///
    /// Requires a signed-in user. Blocked transactions are not written and
    /// surface as [`ScreeningError::TransactionBlocked`]; store failures
    /// propagate.
    pub async fn record(&self, tx: &Transaction, seller: &UserId) -> Result<Recorded> {
        let user = self.auth.require_user()?;
        let screening = self.screen(tx).await;

        if !screening.is_approved() {
            warn!(
                buyer = %tx.buyer_id(),
                score = screening.result.score,
                "Blocked transaction"
            );
            return Err(ScreeningError::TransactionBlocked {
                score: screening.result.score,
                reasons: screening.result.reasons().map(str::to_string).collect(),
            }
            .into());
        }

        let status = if screening.requires_review() {
            TransactionStatus::PendingReview
        } else {
            TransactionStatus::Completed
        };

        let mut fields = to_fields(collections::TRANSACTIONS, tx)?;
        fields.insert("timestamp".into(), timestamp(tx.timestamp()));
        fields.insert("sellerId".into(), Value::String(seller.as_str().to_string()));
        fields.insert("status".into(), Value::String(status.as_str().to_string()));
        fields.insert("fraudScore".into(), Value::from(screening.result.score));

        let id = self.store.insert(collections::TRANSACTIONS, fields).await?;
        info!(
            id = %id,
            user = %user,
            seller = %seller,
            status = status.as_str(),
            "Recorded transaction"
        );
        Ok(Recorded {
            id,
            status,
            screening,
        })
    }

    /// The buyer's prior transactions, newest first.
    async fn history(&self, buyer: &UserId) -> Result<Vec<Transaction>> {
        let documents = self
            .store
            .query(
                &Query::collection(collections::TRANSACTIONS)
                    .where_eq("buyerId", buyer.as_str())
                    .order_by("timestamp", Direction::Descending),
            )
            .await?;
        let mut history: Vec<Transaction> = decode_all(collections::TRANSACTIONS, &documents);
        history.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        Ok(history)
    }
}
