//! Database model for stored JSON documents.

use diesel::prelude::*;

/// One row of the key-value table.
#[derive(Queryable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::key_value_store)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct KeyValueDB {
    pub storage_key: String,
    pub storage_value: String,
    pub updated_at: String,
}
