//! # Register Screen State
//!
//! Controller behind the "Cadastro" screen. It owns the form fields, the
//! income/outcome toggle, the chosen category and the category picker
//! visibility, and runs the submit flow:
//!
//! 0. Ignore the submit while an alert or the category picker is open.
//! 1. Validate the form; field errors block silently.
//! 2. Require a transaction type, then a category; each missing selection
//!    raises an alert and stops.
//! 3. Build the record, append it to the user's stored list.
//! 4. Only after the write succeeds: reset everything and go to "Listagem".
//!
//! A failed read or write is logged and reported with a generic alert; the
//! form keeps its contents so the user can retry.

use log::{debug, error, info};
use shared::{Category, Route, Transaction, TransactionType};

use super::alert_state::{AlertState, SAVE_FAILED, SELECT_CATEGORY, SELECT_TRANSACTION_TYPE};
use super::navigation_state::NavigationState;
use crate::backend::domain::{FieldErrors, FormData, FormField, RegisterFormSchema, TransactionService};

/// Which branch a submit attempt ended in
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved(Transaction),
    /// An alert or the category picker is still open
    Blocked,
    Invalid,
    MissingTransactionType,
    MissingCategory,
    StorageFailed,
}

#[derive(Debug, Default)]
pub struct RegisterScreen {
    pub form: FormData,
    pub errors: FieldErrors,
    transaction_type: Option<TransactionType>,
    category_modal_open: bool,
    category: Category,
    schema: RegisterFormSchema,
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transaction_type(&self) -> Option<TransactionType> {
        self.transaction_type
    }

    /// Last selection wins
    pub fn select_transaction_type(&mut self, transaction_type: TransactionType) {
        self.transaction_type = Some(transaction_type);
    }

    /// Whether the toggle for `transaction_type` renders as pressed
    pub fn is_type_active(&self, transaction_type: TransactionType) -> bool {
        self.transaction_type == Some(transaction_type)
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Setter handed to the category picker
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn is_category_modal_open(&self) -> bool {
        self.category_modal_open
    }

    pub fn open_category_modal(&mut self) {
        self.category_modal_open = true;
    }

    pub fn close_category_modal(&mut self) {
        self.category_modal_open = false;
    }

    /// Whether the form accepts input given the alerts on screen
    pub fn is_interactive(&self, alerts: &AlertState) -> bool {
        alerts.is_empty() && !self.category_modal_open
    }

    pub fn field_error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Back to the initial state: empty fields, no type, unselected category
    pub fn reset(&mut self) {
        self.form.clear();
        self.errors.clear();
        self.transaction_type = None;
        self.category = Category::unselected();
    }

    /// Run the submit flow for `user_id`
    pub async fn submit(
        &mut self,
        service: &TransactionService,
        user_id: &str,
        navigation: &mut NavigationState,
        alerts: &mut AlertState,
    ) -> SubmitOutcome {
        if !self.is_interactive(alerts) {
            debug!("Submit ignored while a dialog is open");
            return SubmitOutcome::Blocked;
        }

        let validated = match self.schema.validate(&self.form) {
            Ok(validated) => {
                self.errors.clear();
                validated
            }
            Err(errors) => {
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };

        let Some(transaction_type) = self.transaction_type else {
            alerts.show(SELECT_TRANSACTION_TYPE);
            return SubmitOutcome::MissingTransactionType;
        };

        if !self.category.is_selected() {
            alerts.show(SELECT_CATEGORY);
            return SubmitOutcome::MissingCategory;
        }

        let transaction = Transaction::new(
            validated.name,
            validated.amount_text,
            transaction_type,
            self.category.key.clone(),
        );

        match service.append_transaction(user_id, transaction.clone()).await {
            Ok(_) => {
                info!("✅ Registered {} {} in {}", transaction.transaction_type, transaction.amount, transaction.category);
                self.reset();
                navigation.navigate(Route::Listing);
                SubmitOutcome::Saved(transaction)
            }
            Err(e) => {
                error!("Failed to save transaction: {}", e);
                alerts.show(SAVE_FAILED);
                SubmitOutcome::StorageFailed
            }
        }
    }
}
