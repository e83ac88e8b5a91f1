//! Live price source trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::PriceData;

/// A remote source of current item prices.
///
/// Implement this trait to add a new marketplace or pricing backend. The
/// chain orders sources by [`priority`](LivePriceSource::priority) and asks
/// each one in turn until a source returns a price.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use horadric_market_data::{LivePriceSource, MarketDataError, PriceData};
///
/// struct MySource;
///
/// #[async_trait]
/// impl LivePriceSource for MySource {
///     fn id(&self) -> &'static str {
///         "MY_SOURCE"
///     }
///
///     async fn fetch_price(&self, item_name: &str) -> Result<PriceData, MarketDataError> {
///         Err(MarketDataError::NoListings(item_name.to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait LivePriceSource: Send + Sync {
    /// Unique identifier such as "DIABLO_TRADE". Used for logging.
    fn id(&self) -> &'static str;

    /// Lower values are asked first. Default is 10.
    fn priority(&self) -> u8 {
        10
    }

    /// Fetch the current price for an item by its display name.
    ///
    /// Returns `MarketDataError::NoListings` when the source has nothing for
    /// the item, and other variants when the source itself is unavailable.
    async fn fetch_price(&self, item_name: &str) -> Result<PriceData, MarketDataError>;
}
