//! Price lookup with a time-bounded cache in front of the source chain.

mod price_cache;
mod price_service;

pub use price_cache::{CacheEntry, CacheStats, PriceCache};
pub use price_service::{PriceService, PriceServiceTrait};
