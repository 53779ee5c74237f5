//! Recommendation row configuration.

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Sizes of the recommendation rows and the sampling seed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecommendationConfig {
    /// Listings on the home-page row.
    #[serde(default = "default_personalized_limit")]
    pub personalized_limit: usize,
    /// Listings on a listing page's "similar books" row.
    #[serde(default = "default_similar_limit")]
    pub similar_limit: usize,
    /// Seed for backfill sampling; entropy when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

const fn default_personalized_limit() -> usize {
    6
}

const fn default_similar_limit() -> usize {
    4
}

impl RecommendationConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.personalized_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "recommendation.personalized_limit",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.similar_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "recommendation.similar_limit",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            personalized_limit: default_personalized_limit(),
            similar_limit: default_similar_limit(),
            seed: None,
        }
    }
}
