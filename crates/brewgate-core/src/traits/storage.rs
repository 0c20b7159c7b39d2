//! `IKeyValueStorage` trait: origin-scoped key-value persistence.
//!
//! This is the contract between the entitlement store and whatever holds
//! its slot: browser-style local storage, a SQLite file
//! (`brewgate-storage`), or an in-memory fake. Writes replace the whole
//! value for a key; there is no partial update and no locking, so
//! concurrent writers get last-writer-wins.

use std::sync::Arc;

use crate::errors::StorageError;

/// String-keyed, string-valued persistence.
pub trait IKeyValueStorage: Send + Sync {
    /// Read the value stored under `key`. `Ok(None)` when absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

// ─── Arc blanket impl ───────────────────────────────────────────────

impl<T: IKeyValueStorage + ?Sized> IKeyValueStorage for Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
