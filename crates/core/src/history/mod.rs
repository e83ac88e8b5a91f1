//! Saved analyses and the startup backfill of fields added after release.

pub mod history_model;
pub mod history_service;
pub mod migration;

pub use history_model::{HistoryItem, PriceSource, StoredValue};
pub use history_service::{AnalysisContext, HistoryService};
pub use migration::{migrate_history, MarketPriceResolver, MigrationReport};
