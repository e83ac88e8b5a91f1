//! Market data models
//!
//! - `price_data` - The `PriceData` contract shared by every price source
//! - `tiers` - Trade-value and demand tiers

mod price_data;
mod tiers;

pub use price_data::{Listing, PriceData};
pub use tiers::{DemandTier, TradeValue};
