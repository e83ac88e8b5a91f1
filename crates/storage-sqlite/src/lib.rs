//! SQLite storage implementation for Horadric.
//!
//! This crate provides the database-backed persistence used by the server:
//! - Database connection pooling and management
//! - Diesel migrations
//! - A `KeyValueStore` implementation for report and history documents
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! `horadric-core` works against the `KeyValueStore` trait only.
//!
//! ```text
//!     core (pricing, reports, history)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

pub mod key_value;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, open, run_migrations, DbConnection, DbPool};

pub use errors::{IntoCore, StorageError};
pub use key_value::SqliteKeyValueStore;

// Re-export from horadric-core for convenience
pub use horadric_core::errors::{DatabaseError, Error, Result};
