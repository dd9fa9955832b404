//! # Domain Module
//!
//! Business rules of the register flow, independent of egui:
//! - `register_form`: the validation schema for the name/amount form
//! - `transaction_service`: read-append-write of the per-user transaction list
//! - `auth`: the signed-in user that namespaces storage

pub mod auth;
pub mod register_form;
pub mod transaction_service;

pub use auth::AuthSession;
pub use register_form::{FieldErrors, FormData, FormField, RegisterFormSchema, ValidatedForm};
pub use transaction_service::{TransactionService, TransactionServiceError};
