//! Whole-form validation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::email::validate_email;
use crate::error::FieldError;
use crate::field::FormField;
use crate::string::{validate_message, validate_name, validate_subject};

/// Raw values of the four fields, as read from the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormValues {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }
}

/// Run the rule belonging to `field`
pub fn validate_field(field: FormField, value: &str) -> Result<(), FieldError> {
    match field {
        FormField::Name => validate_name(value),
        FormField::Email => validate_email(value),
        FormField::Subject => validate_subject(value),
        FormField::Message => validate_message(value),
    }
}

/// Result of one validation pass over the whole form
///
/// Every field has an entry; `None` means the field passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub fields: BTreeMap<FormField, Option<FieldError>>,
}

impl ValidationResult {
    /// Build from per-field outcomes; validity is the AND over all of them
    pub fn from_outcomes(
        outcomes: impl IntoIterator<Item = (FormField, Result<(), FieldError>)>,
    ) -> Self {
        let fields: BTreeMap<_, _> = outcomes
            .into_iter()
            .map(|(field, outcome)| (field, outcome.err()))
            .collect();
        let is_valid = fields.values().all(Option::is_none);
        Self { is_valid, fields }
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.is_valid
    }

    pub fn is_field_valid(&self, field: FormField) -> bool {
        matches!(self.fields.get(&field), Some(None))
    }

    /// Get the error for a specific field
    pub fn error(&self, field: FormField) -> Option<&FieldError> {
        self.fields.get(&field).and_then(Option::as_ref)
    }

    /// First failing field in validation order
    pub fn first_invalid(&self) -> Option<FormField> {
        self.fields
            .iter()
            .find_map(|(field, error)| error.as_ref().map(|_| *field))
    }

    /// Per-field validity flags
    pub fn validity(&self) -> BTreeMap<FormField, bool> {
        self.fields
            .iter()
            .map(|(field, error)| (*field, error.is_none()))
            .collect()
    }
}

/// Validate all four fields in order. Every rule runs, even after a failure.
pub fn validate_all(values: &ContactFormValues) -> ValidationResult {
    ValidationResult::from_outcomes(
        FormField::ALL
            .iter()
            .map(|&field| (field, validate_field(field, values.get(field)))),
    )
}
