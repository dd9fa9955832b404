//! Transaction persistence for the register and listing screens.
//!
//! Each user's transactions live under one key as a JSON array. Appending is a
//! read-modify-write of the whole array: read, push, rewrite. Nothing guards
//! against another writer touching the same key in between; the last write
//! wins.

use log::{debug, info};
use shared::{transactions_storage_key, Transaction};
use std::sync::Arc;
use thiserror::Error;

use crate::backend::storage::{KeyValueStore, StorageError};

#[derive(Error, Debug)]
pub enum TransactionServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Stored value under {key} is not a transaction list: {source}")]
    CorruptCollection {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not serialize transactions: {0}")]
    Serialization(serde_json::Error),
}

#[derive(Clone)]
pub struct TransactionService {
    store: Arc<dyn KeyValueStore>,
}

impl TransactionService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All transactions of a user in the order they were appended
    pub async fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>, TransactionServiceError> {
        let key = transactions_storage_key(user_id);
        let stored = self.store.get_item(&key).await?;

        match stored {
            Some(data) => serde_json::from_str(&data)
                .map_err(|source| TransactionServiceError::CorruptCollection { key, source }),
            None => Ok(Vec::new()),
        }
    }

    /// Append one transaction to the user's list and write the list back.
    ///
    /// Returns the number of transactions stored after the append.
    pub async fn append_transaction(
        &self,
        user_id: &str,
        transaction: Transaction,
    ) -> Result<usize, TransactionServiceError> {
        let key = transactions_storage_key(user_id);

        let mut transactions = self.list_transactions(user_id).await?;
        debug!("Read {} existing transactions from {}", transactions.len(), key);

        let transaction_id = transaction.id.clone();
        transactions.push(transaction);

        let data = serde_json::to_string(&transactions).map_err(TransactionServiceError::Serialization)?;
        self.store.set_item(&key, &data).await?;

        info!("💾 Stored transaction {} ({} total for user {})", transaction_id, transactions.len(), user_id);
        Ok(transactions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::test_utils::{RecordingStore, TestEnvironment};
    use crate::backend::storage::MemoryStore;
    use shared::TransactionType;
    use std::collections::HashSet;

    fn sample(name: &str) -> Transaction {
        Transaction::new(name.to_string(), "10,50".to_string(), TransactionType::Negative, "food".to_string())
    }

    #[tokio::test]
    async fn test_list_without_data_is_empty() {
        let service = TransactionService::new(Arc::new(MemoryStore::new()));
        assert!(service.list_transactions("user-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_order_and_ids() {
        let service = TransactionService::new(Arc::new(MemoryStore::new()));

        let names: Vec<String> = (0..5).map(|i| format!("entry {}", i)).collect();
        for (i, name) in names.iter().enumerate() {
            let count = service.append_transaction("user-1", sample(name)).await.unwrap();
            assert_eq!(count, i + 1);
        }

        let stored = service.list_transactions("user-1").await.unwrap();
        assert_eq!(stored.len(), 5);
        let stored_names: Vec<String> = stored.iter().map(|t| t.name.clone()).collect();
        assert_eq!(stored_names, names);

        let ids: HashSet<&str> = stored.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn test_collections_are_scoped_per_user() {
        let store = MemoryStore::new();
        let service = TransactionService::new(Arc::new(store.clone()));

        service.append_transaction("alice", sample("rent")).await.unwrap();
        service.append_transaction("bob", sample("lunch")).await.unwrap();

        assert_eq!(service.list_transactions("alice").await.unwrap()[0].name, "rent");
        assert_eq!(service.list_transactions("bob").await.unwrap()[0].name, "lunch");
        assert!(store.get_item("@gofinances:transactions_user:alice").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_corrupt_collection_is_reported() {
        let store = MemoryStore::new();
        store.set_item("@gofinances:transactions_user:u", "{\"not\":\"a list\"}").await.unwrap();
        let service = TransactionService::new(Arc::new(store));

        let result = service.append_transaction("u", sample("x")).await;
        assert!(matches!(result, Err(TransactionServiceError::CorruptCollection { .. })));
    }

    #[tokio::test]
    async fn test_failed_write_surfaces_storage_error() {
        let store = RecordingStore::failing_writes();
        let service = TransactionService::new(Arc::new(store.clone()));

        let result = service.append_transaction("u", sample("x")).await;
        assert!(matches!(result, Err(TransactionServiceError::Storage(_))));
        assert_eq!(store.reads(), 1);
        assert_eq!(store.writes(), 1);
    }

    #[tokio::test]
    async fn test_failed_read_skips_write() {
        let store = RecordingStore::failing_reads();
        let service = TransactionService::new(Arc::new(store.clone()));

        assert!(service.append_transaction("u", sample("x")).await.is_err());
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn test_round_trip_through_file_store() {
        let env = TestEnvironment::new().unwrap();
        let service = TransactionService::new(Arc::new(env.store.clone()));

        for i in 0..3 {
            service.append_transaction("u", sample(&format!("t{}", i))).await.unwrap();
        }

        let reopened = crate::backend::storage::JsonFileStore::new(&env.base_path).unwrap();
        let stored = TransactionService::new(Arc::new(reopened)).list_transactions("u").await.unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[2].name, "t2");
    }
}
