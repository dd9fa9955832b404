use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix of the per-user key the transaction collection is stored under
pub const TRANSACTIONS_KEY_PREFIX: &str = "@gofinances:transactions_user:";

/// Key marking a category as "not selected yet"
pub const UNSELECTED_CATEGORY_KEY: &str = "category";

/// Build the storage key holding the transaction list of a user
pub fn transactions_storage_key(user_id: &str) -> String {
    format!("{}{}", TRANSACTIONS_KEY_PREFIX, user_id)
}

/// A single income or expense entry, immutable once created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// UUID v4
    pub id: String,
    pub name: String,
    /// Decimal text with a period separator, e.g. `10.50`
    pub amount: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Category key, see [`CATEGORIES`]
    pub category: String,
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction with a fresh UUID stamped with the current time
    pub fn new(name: String, amount: String, transaction_type: TransactionType, category: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            amount,
            transaction_type,
            category,
            date: Utc::now(),
        }
    }

    /// Numeric amount with the sign of the transaction type applied
    pub fn signed_amount(&self) -> Option<f64> {
        parse_amount(&self.amount).map(|value| match self.transaction_type {
            TransactionType::Positive => value,
            TransactionType::Negative => -value,
        })
    }
}

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Income
    Positive,
    /// Expense
    Negative,
}

impl TransactionType {
    /// Button title shown on the toggle
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Positive => "Income",
            TransactionType::Negative => "Outcome",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Positive => "positive",
            TransactionType::Negative => "negative",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category chosen for a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub name: String,
}

impl Category {
    /// Placeholder shown before the user picks a category
    pub fn unselected() -> Self {
        Self {
            key: UNSELECTED_CATEGORY_KEY.to_string(),
            name: "Categoria".to_string(),
        }
    }

    pub fn is_selected(&self) -> bool {
        self.key != UNSELECTED_CATEGORY_KEY
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::unselected()
    }
}

impl From<&CategoryInfo> for Category {
    fn from(info: &CategoryInfo) -> Self {
        Self {
            key: info.key.to_string(),
            name: info.name.to_string(),
        }
    }
}

/// Catalogue entry offered by the category picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// RGB colour
    pub color: (u8, u8, u8),
}

pub static CATEGORIES: [CategoryInfo; 6] = [
    CategoryInfo { key: "purchases", name: "Compras", icon: "shopping-bag", color: (0x56, 0x36, 0xD3) },
    CategoryInfo { key: "food", name: "Alimentação", icon: "coffee", color: (0xFF, 0x87, 0x2C) },
    CategoryInfo { key: "salary", name: "Salário", icon: "dollar-sign", color: (0x12, 0xA4, 0x54) },
    CategoryInfo { key: "car", name: "Carro", icon: "crosshair", color: (0xE8, 0x3F, 0x5B) },
    CategoryInfo { key: "leisure", name: "Lazer", icon: "heart", color: (0x26, 0x19, 0x5C) },
    CategoryInfo { key: "studies", name: "Estudos", icon: "book", color: (0x9C, 0x00, 0x1A) },
];

/// Look up a catalogue entry by key
pub fn find_category(key: &str) -> Option<&'static CategoryInfo> {
    CATEGORIES.iter().find(|category| category.key == key)
}

/// Rewrite a locale decimal such as ` 10,50 ` as `10.50`.
///
/// Only the first comma is treated as the decimal separator.
pub fn normalize_amount(input: &str) -> String {
    input.trim().replacen(',', ".", 1)
}

/// Parse a locale decimal such as `10,50` or `10.50`.
///
/// Returns `None` for anything that is not a finite number.
pub fn parse_amount(input: &str) -> Option<f64> {
    let normalized = normalize_amount(input);
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Screens reachable through navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Register,
    Listing,
}

impl Route {
    /// Route name as registered with the navigator
    pub fn name(&self) -> &'static str {
        match self {
            Route::Register => "Cadastro",
            Route::Listing => "Listagem",
        }
    }
}

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_is_namespaced_by_user() {
        assert_eq!(transactions_storage_key("42"), "@gofinances:transactions_user:42");
    }

    #[test]
    fn test_transaction_serializes_with_app_field_names() {
        let transaction = Transaction::new(
            "Salary".to_string(),
            "1500.00".to_string(),
            TransactionType::Positive,
            "salary".to_string(),
        );

        let value = serde_json::to_value(&transaction).unwrap();
        assert_eq!(value["type"], "positive");
        assert_eq!(value["category"], "salary");
        assert_eq!(value["amount"], "1500.00");
        assert!(value["date"].is_string());
        assert!(Uuid::parse_str(value["id"].as_str().unwrap()).is_ok());

        let back: Transaction = serde_json::from_value(value).unwrap();
        assert_eq!(back, transaction);
    }

    #[test]
    fn test_new_transactions_get_distinct_ids() {
        let a = Transaction::new("a".into(), "1".into(), TransactionType::Negative, "food".into());
        let b = Transaction::new("a".into(), "1".into(), TransactionType::Negative, "food".into());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10,50"), Some(10.50));
        assert_eq!(parse_amount(" 10.50 "), Some(10.50));
        assert_eq!(parse_amount("-5"), Some(-5.0));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("1,234,5"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_normalize_amount() {
        assert_eq!(normalize_amount(" 10,50 "), "10.50");
        assert_eq!(normalize_amount("10.50"), "10.50");
        assert_eq!(normalize_amount("1,234,5"), "1.234,5");
    }

    #[test]
    fn test_signed_amount() {
        let mut transaction = Transaction::new("Lunch".into(), "12.5".into(), TransactionType::Negative, "food".into());
        assert_eq!(transaction.signed_amount(), Some(-12.5));

        transaction.transaction_type = TransactionType::Positive;
        assert_eq!(transaction.signed_amount(), Some(12.5));
    }

    #[test]
    fn test_category_sentinel() {
        let category = Category::default();
        assert_eq!(category.key, "category");
        assert_eq!(category.name, "Categoria");
        assert!(!category.is_selected());

        let food = Category::from(find_category("food").unwrap());
        assert!(food.is_selected());
        assert_eq!(food.name, "Alimentação");
        assert!(find_category("unknown").is_none());
    }

    #[test]
    fn test_route_names() {
        assert_eq!(Route::Listing.name(), "Listagem");
        assert_eq!(Route::Register.name(), "Cadastro");
    }
}
