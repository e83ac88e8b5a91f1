//! SQLite storage for the JSON documents kept by `horadric-core`.

mod model;
mod repository;

pub use model::KeyValueDB;
pub use repository::SqliteKeyValueStore;

// Re-export trait from core for convenience
pub use horadric_core::storage::KeyValueStore;
