use chrono::{SecondsFormat, Utc};
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::KeyValueDB;
use crate::db::{get_connection, DbPool};
use crate::errors::{IntoCore, StorageError};
use crate::schema::key_value_store::dsl::*;
use horadric_core::errors::Result;
use horadric_core::storage::KeyValueStore;

/// `KeyValueStore` backed by a SQLite table.
pub struct SqliteKeyValueStore {
    pool: Arc<DbPool>,
}

impl SqliteKeyValueStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteKeyValueStore { pool }
    }

    /// Every stored key, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;
        key_value_store
            .select(storage_key)
            .order(storage_key.asc())
            .load::<String>(&mut conn)
            .into_core()
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        key_value_store
            .filter(storage_key.eq(key))
            .select(storage_value)
            .first::<String>(&mut conn)
            .optional()
            .into_core()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let row = KeyValueDB {
            storage_key: key.to_string(),
            storage_value: value.to_string(),
            updated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        let mut conn = get_connection(&self.pool)?;
        conn.immediate_transaction::<_, StorageError, _>(|c| {
            diesel::replace_into(key_value_store)
                .values(&row)
                .execute(c)?;
            Ok(())
        })?;

        debug!("Stored {} ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::delete(key_value_store.filter(storage_key.eq(key)))
            .execute(&mut conn)
            .into_core()?;
        Ok(())
    }
}
