//! Inputs and outputs of the price estimator.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::listing::{Condition, Genre};

/// Attributes that drive a price suggestion.
///
/// `condition` is `None` when the seller supplied a label that is not on the
/// condition ladder; the estimator then prices from the middle of the table.
/// Every optional factor left unset is neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingFactors {
    pub condition: Option<Condition>,
    pub genre: Genre,
    #[serde(default, rename = "publishYear")]
    pub publication_year: Option<i32>,
    #[serde(default)]
    pub is_popular: Option<bool>,
    #[serde(default)]
    pub supply_count: Option<u32>,
    #[serde(default)]
    pub demand_score: Option<f64>,
}

impl PricingFactors {
    /// Factors for a graded book with no market signals.
    #[must_use]
    pub fn new(condition: Condition, genre: Genre) -> Self {
        Self {
            condition: Some(condition),
            genre,
            publication_year: None,
            is_popular: None,
            supply_count: None,
            demand_score: None,
        }
    }

    /// Factors built from free-text form labels.
    #[must_use]
    pub fn from_labels(condition: &str, genre: &str) -> Self {
        Self {
            condition: condition.parse().ok(),
            ..Self::new(Condition::Good, Genre::parse(genre))
        }
    }

    #[must_use]
    pub fn with_publication_year(mut self, year: Option<i32>) -> Self {
        self.publication_year = year;
        self
    }

    #[must_use]
    pub fn with_popularity(mut self, is_popular: bool) -> Self {
        self.is_popular = Some(is_popular);
        self
    }

    #[must_use]
    pub fn with_supply(mut self, supply_count: u32) -> Self {
        self.supply_count = Some(supply_count);
        self
    }

    /// Attach a demand score on the 0-100 scale.
    pub fn with_demand(mut self, demand_score: f64) -> Result<Self, DomainError> {
        if !(0.0..=100.0).contains(&demand_score) {
            return Err(DomainError::DemandOutOfRange {
                score: demand_score,
            });
        }
        self.demand_score = Some(demand_score);
        Ok(self)
    }
}

/// Comparison band for similar books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
    pub average: u32,
}
