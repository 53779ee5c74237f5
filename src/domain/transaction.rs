//! Purchase attempts and the outcome of screening them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{ListingId, UserId};

/// Coarse origin of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub country: String,
    pub city: String,
}

impl GeoLocation {
    pub fn new(country: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
        }
    }
}

/// A single purchase attempt as seen by the fraud screen.
///
/// Built per check through [`TransactionBuilder`] and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTransaction")]
pub struct Transaction {
    buyer_id: UserId,
    item_id: ListingId,
    amount: Decimal,
    timestamp: DateTime<Utc>,
    payment_method: String,
    account_age_days: u32,
    prior_transactions: u32,
    device_fingerprint: String,
    ip_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    geo_location: Option<GeoLocation>,
}

impl Transaction {
    /// Start building a transaction.
    pub fn builder(
        buyer_id: impl Into<UserId>,
        item_id: impl Into<ListingId>,
        amount: Decimal,
    ) -> TransactionBuilder {
        TransactionBuilder {
            raw: RawTransaction {
                buyer_id: buyer_id.into(),
                item_id: item_id.into(),
                amount,
                timestamp: Utc::now(),
                payment_method: String::new(),
                account_age_days: 0,
                prior_transactions: 0,
                device_fingerprint: String::new(),
                ip_address: String::new(),
                geo_location: None,
            },
        }
    }

    #[must_use]
    pub fn buyer_id(&self) -> &UserId {
        &self.buyer_id
    }

    #[must_use]
    pub fn item_id(&self) -> &ListingId {
        &self.item_id
    }

    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    /// Age of the buyer's account in whole days.
    #[must_use]
    pub const fn account_age_days(&self) -> u32 {
        self.account_age_days
    }

    #[must_use]
    pub const fn prior_transactions(&self) -> u32 {
        self.prior_transactions
    }

    #[must_use]
    pub fn device_fingerprint(&self) -> &str {
        &self.device_fingerprint
    }

    #[must_use]
    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    #[must_use]
    pub fn geo_location(&self) -> Option<&GeoLocation> {
        self.geo_location.as_ref()
    }
}

/// Builder for [`Transaction`].
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    raw: RawTransaction,
}

impl TransactionBuilder {
    #[must_use]
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.raw.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn payment_method(mut self, method: impl Into<String>) -> Self {
        self.raw.payment_method = method.into();
        self
    }

    #[must_use]
    pub fn account_age_days(mut self, days: u32) -> Self {
        self.raw.account_age_days = days;
        self
    }

    #[must_use]
    pub fn prior_transactions(mut self, count: u32) -> Self {
        self.raw.prior_transactions = count;
        self
    }

    #[must_use]
    pub fn device_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.raw.device_fingerprint = fingerprint.into();
        self
    }

    #[must_use]
    pub fn ip_address(mut self, ip: impl Into<String>) -> Self {
        self.raw.ip_address = ip.into();
        self
    }

    #[must_use]
    pub fn geo_location(mut self, location: GeoLocation) -> Self {
        self.raw.geo_location = Some(location);
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<Transaction, DomainError> {
        Transaction::try_from(self.raw)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransaction {
    buyer_id: UserId,
    item_id: ListingId,
    amount: Decimal,
    timestamp: DateTime<Utc>,
    #[serde(default)]
    payment_method: String,
    #[serde(default)]
    account_age_days: u32,
    #[serde(default)]
    prior_transactions: u32,
    #[serde(default)]
    device_fingerprint: String,
    #[serde(default)]
    ip_address: String,
    #[serde(default)]
    geo_location: Option<GeoLocation>,
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = DomainError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        if raw.buyer_id.as_str().is_empty() {
            return Err(DomainError::EmptyId { field: "buyer id" });
        }
        if raw.amount <= Decimal::ZERO {
            return Err(DomainError::NonPositiveAmount { amount: raw.amount });
        }
        Ok(Self {
            buyer_id: raw.buyer_id,
            item_id: raw.item_id,
            amount: raw.amount,
            timestamp: raw.timestamp,
            payment_method: raw.payment_method,
            account_age_days: raw.account_age_days,
            prior_transactions: raw.prior_transactions,
            device_fingerprint: raw.device_fingerprint,
            ip_address: raw.ip_address,
            geo_location: raw.geo_location,
        })
    }
}

/// A rule of the anomaly screen that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalySignal {
    /// Several purchases inside the last hour.
    Burst,
    /// Young account spending big.
    NewAccountHighValue,
    /// Country changed since the previous purchase.
    UnusualLocation,
    /// Payment method never seen in the buyer's history.
    UnusualPaymentMethod,
    /// Amount far above the buyer's average.
    AmountSpike,
}

impl AnomalySignal {
    /// Score contribution of this signal.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            AnomalySignal::Burst => 0.3,
            AnomalySignal::NewAccountHighValue => 0.4,
            AnomalySignal::UnusualLocation => 0.25,
            AnomalySignal::UnusualPaymentMethod => 0.15,
            AnomalySignal::AmountSpike => 0.2,
        }
    }

    /// Human-readable explanation shown to reviewers.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            AnomalySignal::Burst => "Multiple transactions in a short time period",
            AnomalySignal::NewAccountHighValue => "New account with high value transaction",
            AnomalySignal::UnusualLocation => "Transaction from unusual location",
            AnomalySignal::UnusualPaymentMethod => "Unusual payment method",
            AnomalySignal::AmountSpike => "Transaction amount significantly higher than average",
        }
    }
}

/// Outcome of the anomaly screen.
///
/// `score` is the plain sum of fired weights and may exceed 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyResult {
    pub suspicious: bool,
    pub score: f64,
    pub signals: Vec<AnomalySignal>,
}

impl AnomalyResult {
    /// Reasons in detection order.
    pub fn reasons(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.signals.iter().map(|s| s.reason())
    }
}

/// What the storefront should do with a screened transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    /// Proceed without review.
    Approved,
    /// Proceed, but hold for additional verification.
    NeedsReview,
    /// Refuse the transaction.
    Blocked,
}

impl ReviewDecision {
    #[must_use]
    pub const fn is_approved(self) -> bool {
        !matches!(self, ReviewDecision::Blocked)
    }

    #[must_use]
    pub const fn requires_review(self) -> bool {
        !matches!(self, ReviewDecision::Approved)
    }

    /// Message shown to the buyer.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            ReviewDecision::Approved => "Transaction approved.",
            ReviewDecision::NeedsReview => {
                "Additional verification required before completing this transaction."
            }
            ReviewDecision::Blocked => {
                "Transaction blocked due to suspicious activity. Please contact support."
            }
        }
    }
}
