//! Validation errors
//!
//! The only error kind the contact form knows: a missing or malformed
//! field value. `Display` is the exact text written beside the field.

use crate::field::FormField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{} is required.", .0.label())]
    Required(FormField),

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Message must be at least {min} characters long.")]
    TooShort { min: usize },
}

impl FieldError {
    /// The user-facing message, owned
    pub fn message(&self) -> String {
        self.to_string()
    }
}
