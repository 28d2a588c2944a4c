//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FieldError;
use crate::field::FormField;
use crate::string::{is_blank, trim_value};

// local@domain.tld: no whitespace, BOM or '@' in any segment, a '.' after the '@'
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is a valid regex")
});

/// Validates basic email format
///
/// Checks for:
/// - At least one character before the '@'
/// - Exactly one '@' symbol
/// - A '.' in the domain part with characters on both sides
/// - No whitespace anywhere
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Email field rule: required, then format.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if is_blank(value) {
        return Err(FieldError::Required(FormField::Email));
    }
    if !is_valid_email(trim_value(value)) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}
