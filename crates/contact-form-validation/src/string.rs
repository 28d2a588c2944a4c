//! String validation functions

use crate::error::FieldError;
use crate::field::FormField;

/// Minimum trimmed length of the message body
pub const MIN_MESSAGE_LENGTH: usize = 10;

/// Strip leading and trailing whitespace the way a browser's `trim()` does.
///
/// `str::trim` keeps U+FEFF (byte order mark); browsers strip it.
pub fn trim_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// True when the value is empty after trimming
pub fn is_blank(value: &str) -> bool {
    trim_value(value).is_empty()
}

/// Required check shared by every field
pub fn validate_required(field: FormField, value: &str) -> Result<(), FieldError> {
    if is_blank(value) {
        Err(FieldError::Required(field))
    } else {
        Ok(())
    }
}

/// Trimmed length in UTF-16 code units, as a browser measures `value.length`
pub fn validate_min_length(value: &str, min: usize) -> Result<(), FieldError> {
    if trim_value(value).encode_utf16().count() >= min {
        Ok(())
    } else {
        Err(FieldError::TooShort { min })
    }
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    validate_required(FormField::Name, value)
}

pub fn validate_subject(value: &str) -> Result<(), FieldError> {
    validate_required(FormField::Subject, value)
}

/// Message field rule: required, then at least [`MIN_MESSAGE_LENGTH`] characters.
pub fn validate_message(value: &str) -> Result<(), FieldError> {
    validate_required(FormField::Message, value)?;
    validate_min_length(value, MIN_MESSAGE_LENGTH)
}
