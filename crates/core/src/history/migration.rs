use std::sync::Arc;

use log::debug;

use super::{HistoryItem, PriceSource, StoredValue};
use crate::analysis::extract_verdict;
use crate::catalog::PriceCatalog;
use crate::community::CommunityPricing;

/// Market price label for a history item: trusted community average first,
/// then the catalog's trade-value label.
pub struct MarketPriceResolver {
    community: Arc<CommunityPricing>,
    catalog: Arc<PriceCatalog>,
    min_community_samples: usize,
}

impl MarketPriceResolver {
    pub fn new(
        community: Arc<CommunityPricing>,
        catalog: Arc<PriceCatalog>,
        min_community_samples: usize,
    ) -> Self {
        Self {
            community,
            catalog,
            min_community_samples,
        }
    }

    pub fn resolve(&self, title: &str) -> Option<(String, PriceSource)> {
        if title.is_empty() {
            return None;
        }

        if let Some(aggregate) = self
            .community
            .average(title)
            .filter(|aggregate| aggregate.is_trusted(self.min_community_samples))
        {
            return Some((aggregate.formatted_price, PriceSource::Community));
        }

        self.catalog
            .search(title)
            .map(|record| (record.trade_value.as_str().to_string(), PriceSource::Database))
    }
}

/// Outcome of one migration pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Items looked at after truncation
    pub examined: usize,
    /// Items that gained a verdict or a market price
    pub migrated: usize,
    /// Whether the history was written back
    pub persisted: bool,
}

/// Backfill verdict and market price on older history items.
///
/// Complete items are skipped. Returns the number of items changed; callers
/// write the history back only when that is non-zero.
pub fn migrate_history<'a>(
    items: impl IntoIterator<Item = &'a mut HistoryItem>,
    resolver: &MarketPriceResolver,
) -> usize {
    let mut migrated = 0;

    for item in items.into_iter().filter(|item| !item.is_complete()) {
        let mut changed = false;

        if !item.has_verdict() && !item.text.is_empty() {
            if let Some(verdict) = extract_verdict(&item.text).parsed() {
                item.verdict = Some(StoredValue::Known(verdict));
                changed = true;
            }
        }

        if !item.has_market_price() {
            if let Some((price, source)) = resolver.resolve(&item.title) {
                item.market_price = Some(price);
                item.price_source = Some(StoredValue::Known(source));
                changed = true;
            }
        }

        if changed {
            debug!("Migrated history item {}", item.id);
            migrated += 1;
        }
    }

    migrated
}
