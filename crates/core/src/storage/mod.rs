//! Key-value persistence seam.
//!
//! Report and history state is stored as JSON strings under fixed keys.
//! Implementations are synchronous and may fail; callers in this crate log
//! failures and carry on with their in-memory state.

mod memory_store;
mod records;

pub use memory_store::InMemoryKeyValueStore;
pub use records::{decode_array, StoredRecord};

use crate::errors::Result;

pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, or `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use super::{InMemoryKeyValueStore, KeyValueStore};
    use crate::errors::{DatabaseError, Error, Result};

    /// In-memory store that counts writes and can be told to reject them.
    #[derive(Default)]
    pub struct RecordingStore {
        inner: InMemoryKeyValueStore,
        writes: AtomicUsize,
        fail_writes: AtomicBool,
    }

    impl RecordingStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn writes(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        pub fn fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }

        /// Seed a value without counting it as a write.
        pub fn seed(&self, key: &str, value: &str) {
            let _ = self.inner.set(key, value);
        }

        fn check_writable(&self) -> Result<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(Error::Database(DatabaseError::WriteRejected(
                    "quota exceeded".to_string(),
                )));
            }
            Ok(())
        }
    }

    impl KeyValueStore for RecordingStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.check_writable()?;
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.check_writable()?;
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.remove(key)
        }
    }
}
