//! Additive rule-based anomaly scorer.
//!
//! Each rule is evaluated independently against the transaction and the
//! buyer's recent history (newest first). A fired rule appends its signal and
//! adds its fixed weight. Weights are summed, never normalized, so several
//! fired rules can push the score past 1.0.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::debug;

use crate::domain::{AnomalyResult, AnomalySignal, ReviewDecision, Transaction};

/// Scores at or above this are suspicious.
pub const SUSPICIOUS_THRESHOLD: f64 = 0.5;

/// Scores strictly above this are blocked.
pub const BLOCK_THRESHOLD: f64 = 0.7;

const BURST_WINDOW_MS: i64 = 3_600_000;
const BURST_MIN_IN_WINDOW: usize = 3;
/// Burst and payment-method rules need strictly more history than this.
const MIN_HISTORY_FOR_PATTERNS: usize = 3;
const NEW_ACCOUNT_DAYS: u32 = 7;
const HIGH_VALUE_AMOUNT: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);
const SPIKE_FACTOR: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

fn within_window(now: DateTime<Utc>, then: DateTime<Utc>) -> bool {
    (now - then).num_milliseconds() < BURST_WINDOW_MS
}

fn is_burst(tx: &Transaction, history: &[Transaction]) -> bool {
    if history.len() <= MIN_HISTORY_FOR_PATTERNS {
        return false;
    }
    let in_window = history
        .iter()
        .filter(|prior| within_window(tx.timestamp(), prior.timestamp()))
        .count();
    in_window >= BURST_MIN_IN_WINDOW
}

fn is_new_account_high_value(tx: &Transaction) -> bool {
    tx.account_age_days() < NEW_ACCOUNT_DAYS && tx.amount() > HIGH_VALUE_AMOUNT
}

fn is_unusual_location(tx: &Transaction, history: &[Transaction]) -> bool {
    match (tx.geo_location(), history.first().and_then(Transaction::geo_location)) {
        (Some(current), Some(previous)) => current.country != previous.country,
        _ => false,
    }
}

fn is_unusual_payment_method(tx: &Transaction, history: &[Transaction]) -> bool {
    if history.len() <= MIN_HISTORY_FOR_PATTERNS {
        return false;
    }
    let usual: HashSet<&str> = history.iter().map(Transaction::payment_method).collect();
    !usual.contains(tx.payment_method())
}

/// Mean of the history amounts, falling back to averaging per entry when the
/// plain sum does not fit in a `Decimal`.
fn mean_amount(history: &[Transaction]) -> Decimal {
    let count = Decimal::from(history.len());
    history
        .iter()
        .try_fold(Decimal::ZERO, |total, prior| total.checked_add(prior.amount()))
        .map_or_else(
            || {
                history
                    .iter()
                    .try_fold(Decimal::ZERO, |total, prior| {
                        total.checked_add(prior.amount() / count)
                    })
                    .unwrap_or(Decimal::MAX)
            },
            |total| total / count,
        )
}

fn is_amount_spike(tx: &Transaction, history: &[Transaction]) -> bool {
    if history.is_empty() {
        return false;
    }
    // An overflowing threshold is above every representable amount.
    mean_amount(history)
        .checked_mul(SPIKE_FACTOR)
        .is_some_and(|threshold| tx.amount() > threshold)
}

/// Score `tx` against the buyer's recent history.
///
/// `history` is expected newest first; only its first entry is used as the
/// "previous" location.
#[must_use]
pub fn score_transaction(tx: &Transaction, history: &[Transaction]) -> AnomalyResult {
    let checks = [
        (AnomalySignal::Burst, is_burst(tx, history)),
        (AnomalySignal::NewAccountHighValue, is_new_account_high_value(tx)),
        (AnomalySignal::UnusualLocation, is_unusual_location(tx, history)),
        (
            AnomalySignal::UnusualPaymentMethod,
            is_unusual_payment_method(tx, history),
        ),
        (AnomalySignal::AmountSpike, is_amount_spike(tx, history)),
    ];

    let mut score = 0.0;
    let mut signals = Vec::new();
    for (signal, fired) in checks {
        if fired {
            score += signal.weight();
            signals.push(signal);
        }
    }

    let suspicious = score >= SUSPICIOUS_THRESHOLD;
    debug!(
        buyer = %tx.buyer_id(),
        history = history.len(),
        score,
        suspicious,
        signals = ?signals,
        "Scored transaction"
    );

    AnomalyResult {
        suspicious,
        score,
        signals,
    }
}

/// Classify a scored transaction.
#[must_use]
pub fn decide(result: &AnomalyResult) -> ReviewDecision {
    if result.suspicious && result.score > BLOCK_THRESHOLD {
        ReviewDecision::Blocked
    } else if result.suspicious {
        ReviewDecision::NeedsReview
    } else {
        ReviewDecision::Approved
    }
}
