//! Tunables for the pricing services.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_HISTORY, MIN_COMMUNITY_SAMPLES, PRICE_CACHE_TTL_MS};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// How long a fetched price is served from cache
    pub cache_ttl: Duration,
    /// Reports required before a community average is used
    pub min_community_samples: usize,
    /// Analyses kept in history
    pub max_history: usize,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_millis(PRICE_CACHE_TTL_MS as u64),
            min_community_samples: MIN_COMMUNITY_SAMPLES,
            max_history: MAX_HISTORY,
        }
    }
}

impl PricingConfig {
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Cache TTL as a signed duration for timestamp arithmetic.
    pub fn cache_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.cache_ttl)
            .unwrap_or_else(|_| chrono::Duration::milliseconds(PRICE_CACHE_TTL_MS))
    }
}
