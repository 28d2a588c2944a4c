//! The four contact-form fields

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four required contact-form inputs.
///
/// Declaration order is the validation order: name, email, subject, message.
/// `Ord` follows it, so a `BTreeMap<FormField, _>` iterates in that order too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    /// All fields in validation order
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// Lowercase key, as used in JS objects and element ids
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    /// Human-readable label used in "required" messages
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    /// Position in [`FormField::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names none of the four fields
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct ParseFieldError(pub String);

impl FromStr for FormField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "subject" => Ok(FormField::Subject),
            "message" => Ok(FormField::Message),
            _ => Err(ParseFieldError(s.to_string())),
        }
    }
}
