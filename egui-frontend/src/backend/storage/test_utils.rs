//! Test utilities providing RAII cleanup for filesystem backed tests.
//!
//! The temporary directory is removed when the `TestEnvironment` is dropped,
//! even if the test panics.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

use super::error::{StorageError, StorageResult};
use super::json_file_store::JsonFileStore;
use super::memory_store::MemoryStore;
use super::traits::KeyValueStore;

pub struct TestEnvironment {
    /// Kept alive so the directory is only deleted on drop
    _temp_dir: TempDir,
    pub store: JsonFileStore,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> StorageResult<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let store = JsonFileStore::new(&base_path)?;

        Ok(Self {
            _temp_dir: temp_dir,
            store,
            base_path,
        })
    }
}

/// Store double that counts calls and can be told to fail reads or writes
#[derive(Clone, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    fail_reads: bool,
    fail_writes: bool,
    reads: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Total number of store calls made so far
    pub fn calls(&self) -> usize {
        self.reads() + self.writes()
    }
}

#[async_trait]
impl KeyValueStore for RecordingStore {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(StorageError::Unavailable("simulated read failure".to_string()));
        }
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(StorageError::Unavailable("simulated write failure".to_string()));
        }
        self.inner.set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove_item(key).await
    }
}
