//! Live price source abstractions and implementations.
//!
//! This module contains:
//! - The `LivePriceSource` trait that every source implements
//! - A Diablo.Trade listings scraper
//! - A client for a self-hosted pricing backend

mod traits;

pub mod diablo_trade;
pub mod price_api;

pub use traits::LivePriceSource;
