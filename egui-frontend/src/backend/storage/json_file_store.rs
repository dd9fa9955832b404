//! # JSON File Store
//!
//! A [`KeyValueStore`] that keeps the whole key space in a single JSON object
//! stored at `<data_directory>/storage.json`.
//!
//! ```json
//! {
//!   "@gofinances:transactions_user:local-user": "[{\"id\":\"...\", ...}]"
//! }
//! ```
//!
//! Every write rewrites the file through a temp file and a rename, so a crash
//! never leaves a half-written store behind. A missing file is an empty store.

use async_trait::async_trait;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::error::{StorageError, StorageResult};
use super::traits::KeyValueStore;

const STORE_FILE_NAME: &str = "storage.json";

type Items = BTreeMap<String, String>;

/// File backed key-value store
#[derive(Clone)]
pub struct JsonFileStore {
    base_directory: PathBuf,
    // Serializes load-modify-save of the file within this process
    file_lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    /// Open a store in `base_directory`, creating the directory if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> StorageResult<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("📁 Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
            file_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the JSON file holding all keys
    pub fn store_file_path(&self) -> PathBuf {
        self.base_directory.join(STORE_FILE_NAME)
    }

    fn load_items(&self) -> StorageResult<Items> {
        let path = self.store_file_path();
        if !path.exists() {
            return Ok(Items::new());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Items::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save_items(&self, items: &Items) -> StorageResult<()> {
        let path = self.store_file_path();
        let content = serde_json::to_string_pretty(items)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &path)?;

        debug!("Saved {} keys to {:?}", items.len(), path);
        Ok(())
    }

    fn locked<T>(&self, f: impl FnOnce() -> StorageResult<T>) -> StorageResult<T> {
        let _guard = self
            .file_lock
            .lock()
            .map_err(|_| StorageError::Unavailable("store file lock poisoned".to_string()))?;
        f()
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.locked(|| Ok(self.load_items()?.get(key).cloned()))
    }

    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.locked(|| {
            let mut items = self.load_items()?;
            items.insert(key.to_string(), value.to_string());
            self.save_items(&items)
        })
    }

    async fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.locked(|| {
            let mut items = self.load_items()?;
            if items.remove(key).is_some() {
                self.save_items(&items)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::test_utils::TestEnvironment;

    #[tokio::test]
    async fn test_missing_file_is_empty_store() {
        let env = TestEnvironment::new().unwrap();
        assert!(!env.store.store_file_path().exists());
        assert_eq!(env.store.get_item("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_values_survive_reopening() {
        let env = TestEnvironment::new().unwrap();
        env.store.set_item("a", "1").await.unwrap();
        env.store.set_item("b", "2").await.unwrap();

        let reopened = JsonFileStore::new(&env.base_path).unwrap();
        assert_eq!(reopened.get_item("a").await.unwrap(), Some("1".to_string()));
        assert_eq!(reopened.get_item("b").await.unwrap(), Some("2".to_string()));
    }

    #[tokio::test]
    async fn test_remove_item() {
        let env = TestEnvironment::new().unwrap();
        env.store.set_item("a", "1").await.unwrap();
        env.store.remove_item("a").await.unwrap();
        env.store.remove_item("never-set").await.unwrap();
        assert_eq!(env.store.get_item("a").await.unwrap(), None);
        assert!(!env.store.store_file_path().with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_reports_serialization_error() {
        let env = TestEnvironment::new().unwrap();
        fs::write(env.store.store_file_path(), "not json").unwrap();

        let result = env.store.get_item("a").await;
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_new_creates_missing_directory() {
        let env = TestEnvironment::new().unwrap();
        let nested = env.base_path.join("nested").join("data");
        let store = JsonFileStore::new(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(store.base_directory(), nested.as_path());
    }
}
