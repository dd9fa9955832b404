//! # Storage Module
//!
//! Key-value persistence for the GoFinances app.
//!
//! The domain layer only talks to the [`KeyValueStore`] trait, mirroring the
//! get/set contract of on-device async storage. Values are opaque strings; the
//! transaction service decides what is serialized into them.
//!
//! ## Backends
//!
//! - [`JsonFileStore`]: the whole key space in one JSON file under the data directory
//! - [`MemoryStore`]: process-local map for tests and [`Backend::with_store`](crate::backend::Backend::with_store)

pub mod error;
pub mod traits;
pub mod json_file_store;
pub mod memory_store;

#[cfg(test)]
pub mod test_utils;

pub use error::StorageError;
pub use traits::KeyValueStore;
pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
