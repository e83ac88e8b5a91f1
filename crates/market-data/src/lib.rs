//! Horadric Market Data Crate
//!
//! Live item pricing for the Horadric loot analyzer.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Parsing and formatting gold prices in the canonical unit (millions)
//! - Trade-value and demand tiers
//! - Live sources: Diablo.Trade listings and a self-hosted pricing backend
//! - Priority-ordered fallback across sources
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Pricing core    | --> | LiveSourceChain  |  (priority fallback)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | LivePriceSource  |  (Diablo.Trade, backend API)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    PriceData     |  (shared price contract)
//!                          +------------------+
//! ```

pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;
pub mod valuation;

pub use errors::MarketDataError;
pub use models::{DemandTier, Listing, PriceData, TradeValue};
pub use provider::diablo_trade::{search_url, DiabloTradeProvider};
pub use provider::price_api::PriceApiProvider;
pub use provider::LivePriceSource;
pub use registry::LiveSourceChain;
pub use valuation::{demand_from_listing_count, format_price, parse_price, price_to_trade_value};
