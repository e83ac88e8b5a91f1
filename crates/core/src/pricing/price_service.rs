use std::sync::Arc;

use async_trait::async_trait;
use horadric_market_data::{LivePriceSource, PriceData};
use log::{debug, warn};

use super::{CacheStats, PriceCache};
use crate::catalog::PriceCatalog;
use crate::clock::Clock;
use crate::community::CommunityPricing;
use crate::settings::PricingConfig;

#[async_trait]
pub trait PriceServiceTrait: Send + Sync {
    /// Price for an item, or `None` when no source knows it.
    async fn get_price(&self, item_name: &str) -> Option<Arc<PriceData>>;

    fn clear_cache(&self);

    fn cache_stats(&self) -> CacheStats;
}

/// Read-through price cache over the fallback chain
/// live source, then trusted community average, then catalog.
///
/// Concurrent misses for the same item each run the chain; the last one to
/// finish wins the cache slot.
pub struct PriceService {
    live_source: Option<Arc<dyn LivePriceSource>>,
    community: Arc<CommunityPricing>,
    catalog: Arc<PriceCatalog>,
    cache: PriceCache,
    clock: Arc<dyn Clock>,
    config: PricingConfig,
}

impl PriceService {
    pub fn new(
        live_source: Option<Arc<dyn LivePriceSource>>,
        community: Arc<CommunityPricing>,
        catalog: Arc<PriceCatalog>,
        clock: Arc<dyn Clock>,
        config: PricingConfig,
    ) -> Self {
        let cache = PriceCache::new(config.cache_ttl_chrono());
        Self {
            live_source,
            community,
            catalog,
            cache,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    async fn fetch_live(&self, item_name: &str) -> Option<PriceData> {
        let source = self.live_source.as_ref()?;
        match source.fetch_price(item_name).await {
            Ok(data) => Some(data),
            Err(e) if e.is_not_found() => {
                debug!("No live price for '{}': {}", item_name, e);
                None
            }
            Err(e) => {
                warn!("Live price fetch failed for '{}': {}", item_name, e);
                None
            }
        }
    }

    fn community_price(&self, item_name: &str) -> Option<PriceData> {
        self.community
            .average(item_name)
            .filter(|aggregate| aggregate.is_trusted(self.config.min_community_samples))
            .map(|aggregate| aggregate.to_price_data())
    }

    fn catalog_price(&self, item_name: &str) -> Option<PriceData> {
        self.catalog
            .search(item_name)
            .map(|record| record.to_price_data())
    }

    async fn resolve(&self, item_name: &str) -> Option<PriceData> {
        if let Some(data) = self.fetch_live(item_name).await {
            return Some(data);
        }
        if let Some(data) = self.community_price(item_name) {
            return Some(data);
        }
        self.catalog_price(item_name)
    }
}

#[async_trait]
impl PriceServiceTrait for PriceService {
    async fn get_price(&self, item_name: &str) -> Option<Arc<PriceData>> {
        if let Some(cached) = self.cache.get(item_name, self.clock.now()) {
            debug!("Price cache hit for '{}'", item_name);
            return Some(cached);
        }

        let data = self.resolve(item_name).await?;
        debug!("Priced '{}' from {}", item_name, data.source);

        let payload = Arc::new(data);
        self.cache
            .insert(item_name, Arc::clone(&payload), self.clock.now());
        Some(payload)
    }

    fn clear_cache(&self) {
        self.cache.clear();
    }

    fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
