//! # Storage Traits
//!
//! The storage abstraction the domain layer works against, so that the file
//! backed store and the in-memory store can be used interchangeably.

use async_trait::async_trait;

use super::error::StorageResult;

/// Asynchronous string key-value store.
///
/// Writes are full overwrites of a key. Implementations do not coordinate
/// concurrent writers to the same key: the last `set_item` wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if the key was never written
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> StorageResult<()>;
}
