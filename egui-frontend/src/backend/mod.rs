//! # Backend Module
//!
//! Contains all non-UI logic for the GoFinances app.
//!
//! ```text
//! UI Layer (egui screens)
//!     ↓
//! Domain Layer (form schema, transaction service, auth session)
//!     ↓
//! Storage Layer (key-value store)
//! ```
//!
//! The backend owns a small tokio runtime so the UI thread can drive the
//! async store calls one at a time with [`Backend::block_on`].

pub mod config;
pub mod domain;
pub mod storage;

use anyhow::{Context, Result};
use log::info;
use std::future::Future;
use std::sync::Arc;

pub use config::AppConfig;
pub use domain::{AuthSession, TransactionService};
use storage::{JsonFileStore, KeyValueStore};

pub struct Backend {
    pub auth: AuthSession,
    pub transaction_service: TransactionService,
    runtime: tokio::runtime::Runtime,
}

impl Backend {
    /// Set up the backend on the file store in the configured data directory
    pub fn new(config: AppConfig) -> Result<Self> {
        info!("Setting up storage in {}", config.data_directory.display());
        let store = JsonFileStore::new(&config.data_directory)
            .with_context(|| format!("Failed to open data directory {}", config.data_directory.display()))?;
        Self::with_store(config, Arc::new(store))
    }

    /// Set up the backend on an arbitrary store; the in-memory store keeps nothing across runs
    pub fn with_store(config: AppConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;

        info!("Setting up domain services");
        let auth = AuthSession::new(config.user);
        let transaction_service = TransactionService::new(store);

        Ok(Self {
            auth,
            transaction_service,
            runtime,
        })
    }

    /// Run a future to completion on the backend runtime
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}
