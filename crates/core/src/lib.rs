//! Horadric Core - pricing, crowdsourced reports, and analysis history.
//!
//! This crate contains the business logic behind item price lookups.
//! It is storage-agnostic and defines the `KeyValueStore` trait that is
//! implemented by the `storage-sqlite` crate.

pub mod analysis;
pub mod catalog;
pub mod clock;
pub mod community;
pub mod constants;
pub mod errors;
pub mod history;
pub mod pricing;
pub mod reports;
pub mod settings;
pub mod storage;

// Price parsing and tiers live with the live sources that also need them.
pub use horadric_market_data::valuation;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
