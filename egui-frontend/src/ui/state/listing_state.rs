//! # Listing State
//!
//! Cached transactions for the "Listagem" screen. The cache is marked stale
//! whenever a new transaction is saved and reloaded the next time the screen
//! is shown.

use shared::{find_category, Transaction, TransactionType};

#[derive(Debug)]
pub struct ListingState {
    pub transactions: Vec<Transaction>,
    pub error_message: Option<String>,
    stale: bool,
}

impl ListingState {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            error_message: None,
            stale: true,
        }
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    pub fn set_loaded(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
        self.error_message = None;
        self.stale = false;
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.stale = false;
    }
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new()
    }
}

/// Amount as shown in the listing, e.g. `- R$ 10,50`
pub fn format_listing_amount(transaction: &Transaction) -> String {
    let sign = match transaction.transaction_type {
        TransactionType::Positive => "",
        TransactionType::Negative => "- ",
    };
    match transaction.signed_amount() {
        Some(value) => format!("{}R$ {}", sign, format!("{:.2}", value.abs()).replace('.', ",")),
        None => format!("{}R$ {}", sign, transaction.amount),
    }
}

/// Display name of the transaction's category, falling back to its key
pub fn category_display_name(transaction: &Transaction) -> &str {
    find_category(&transaction.category)
        .map(|category| category.name)
        .unwrap_or(transaction.category.as_str())
}
