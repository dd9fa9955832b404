use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::error::{StorageError, StorageResult};
use super::traits::KeyValueStore;

/// In-memory key-value store shared between clones
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_items<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> StorageResult<T> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))?;
        Ok(f(&mut items))
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.with_items(|items| items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        debug!("memory store: set {} ({} bytes)", key, value.len());
        self.with_items(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    async fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.with_items(|items| {
            items.remove(key);
        })
    }
}
