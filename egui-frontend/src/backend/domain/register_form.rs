//! Validation schema for the register form.
//!
//! The form has two text fields. `name` is required and kept as typed.
//! `amount` is a locale decimal: the first comma is read as the decimal
//! separator and the result must be a positive finite number. Each failure
//! attaches one message to its field; all fields are checked on every run.

use shared::{normalize_amount, parse_amount};

pub const NAME_REQUIRED: &str = "Nome é obrigatório";
pub const AMOUNT_REQUIRED: &str = "Valor obrigatório";
pub const AMOUNT_NOT_A_NUMBER: &str = "Informe um valor númerico";
pub const AMOUNT_NOT_POSITIVE: &str = "O valor não pode ser negativo";

/// Raw text of the form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub amount: String,
}

impl FormData {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.amount.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Amount,
}

/// Per-field error messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub amount: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.amount.is_none()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::Amount => self.amount.as_deref(),
        }
    }

    pub fn clear(&mut self) {
        self.name = None;
        self.amount = None;
    }
}

/// Form values that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForm {
    pub name: String,
    /// Amount text with a period separator, e.g. `10.50`
    pub amount_text: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterFormSchema;

impl RegisterFormSchema {
    pub fn new() -> Self {
        Self
    }

    /// Validate every field, collecting one message per failing field
    pub fn validate(&self, form: &FormData) -> Result<ValidatedForm, FieldErrors> {
        let mut errors = FieldErrors::default();

        if form.name.is_empty() {
            errors.name = Some(NAME_REQUIRED.to_string());
        }

        let amount = match self.validate_amount(&form.amount) {
            Ok(amount) => Some(amount),
            Err(message) => {
                errors.amount = Some(message.to_string());
                None
            }
        };

        match amount {
            Some(amount) if errors.is_empty() => Ok(ValidatedForm {
                name: form.name.clone(),
                amount_text: normalize_amount(&form.amount),
                amount,
            }),
            _ => Err(errors),
        }
    }

    /// Validate only the amount field, returning the parsed value
    pub fn validate_amount(&self, input: &str) -> Result<f64, &'static str> {
        if input.trim().is_empty() {
            return Err(AMOUNT_REQUIRED);
        }
        match parse_amount(input) {
            None => Err(AMOUNT_NOT_A_NUMBER),
            Some(value) if value <= 0.0 => Err(AMOUNT_NOT_POSITIVE),
            Some(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(name: &str, amount: &str) -> Result<ValidatedForm, FieldErrors> {
        RegisterFormSchema::new().validate(&FormData::new(name, amount))
    }

    #[test]
    fn test_valid_form() {
        let form = validate("Salary", "1500").unwrap();
        assert_eq!(form.name, "Salary");
        assert_eq!(form.amount_text, "1500");
        assert_eq!(form.amount, 1500.0);
    }

    #[test]
    fn test_comma_decimal_separator_is_normalized() {
        let form = validate("Lunch", "10,50").unwrap();
        assert_eq!(form.amount, 10.50);
        assert_eq!(form.amount_text, "10.50");
    }

    #[test]
    fn test_negative_amount_rejected() {
        let errors = validate("Lunch", "-5").unwrap_err();
        assert_eq!(errors.get(FormField::Amount), Some(AMOUNT_NOT_POSITIVE));
        assert_eq!(errors.get(FormField::Name), None);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let errors = validate("Lunch", "0").unwrap_err();
        assert_eq!(errors.amount.as_deref(), Some(AMOUNT_NOT_POSITIVE));
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let errors = validate("Lunch", "abc").unwrap_err();
        assert_eq!(errors.amount.as_deref(), Some(AMOUNT_NOT_A_NUMBER));
    }

    #[test]
    fn test_empty_fields_report_both_errors() {
        let errors = validate("", "").unwrap_err();
        assert_eq!(errors.name.as_deref(), Some(NAME_REQUIRED));
        assert_eq!(errors.amount.as_deref(), Some(AMOUNT_REQUIRED));
    }

    #[test]
    fn test_name_is_kept_as_typed() {
        let form = validate("  Lunch ", " 12,30 ").unwrap();
        assert_eq!(form.name, "  Lunch ");
        assert_eq!(form.amount_text, "12.30");

        assert_eq!(validate("   ", "1").unwrap().name, "   ");
    }

    #[test]
    fn test_name_error_alone_blocks_submission() {
        let errors = validate("", "10").unwrap_err();
        assert_eq!(errors.name.as_deref(), Some(NAME_REQUIRED));
        assert!(errors.amount.is_none());
    }

    #[test]
    fn test_only_first_comma_is_a_separator() {
        let errors = validate("Rent", "1,234,5").unwrap_err();
        assert_eq!(errors.amount.as_deref(), Some(AMOUNT_NOT_A_NUMBER));
    }

    #[test]
    fn test_field_errors_clear() {
        let mut errors = validate("", "").unwrap_err();
        assert!(!errors.is_empty());
        errors.clear();
        assert!(errors.is_empty());
    }
}
