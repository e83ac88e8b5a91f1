//! Ordered fallback across live price sources.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::PriceData;
use crate::provider::LivePriceSource;

/// Asks each configured source in priority order and returns the first price.
///
/// The chain is itself a [`LivePriceSource`], so the pricing service can hold
/// either a single source or a whole chain behind the same trait object.
pub struct LiveSourceChain {
    sources: Vec<Arc<dyn LivePriceSource>>,
}

impl LiveSourceChain {
    pub fn new(mut sources: Vec<Arc<dyn LivePriceSource>>) -> Self {
        // Stable sort keeps registration order among equal priorities.
        sources.sort_by_key(|source| source.priority());
        Self { sources }
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Source ids in the order they are asked.
    pub fn source_ids(&self) -> Vec<&'static str> {
        self.sources.iter().map(|source| source.id()).collect()
    }
}

#[async_trait]
impl LivePriceSource for LiveSourceChain {
    fn id(&self) -> &'static str {
        "LIVE_CHAIN"
    }

    async fn fetch_price(&self, item_name: &str) -> Result<PriceData, MarketDataError> {
        if self.sources.is_empty() {
            return Err(MarketDataError::NoProvidersAvailable);
        }

        let mut last_error: Option<MarketDataError> = None;

        for source in &self.sources {
            match source.fetch_price(item_name).await {
                Ok(data) => {
                    debug!("{} priced '{}'", source.id(), item_name);
                    return Ok(data);
                }
                Err(e) => {
                    if e.is_not_found() {
                        debug!("{} has no price for '{}': {}", source.id(), item_name, e);
                    } else {
                        warn!("{} failed for '{}': {}", source.id(), item_name, e);
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(MarketDataError::AllProvidersFailed))
    }
}
