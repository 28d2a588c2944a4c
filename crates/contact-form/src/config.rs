// File: src/config.rs
// Purpose: Element lookups and user-facing text, loadable from contact-form.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use contact_form_validation::FormField;

/// Controller configuration
///
/// Keys are camelCase (`nameInput`, `successAlert`) so a JS object maps
/// onto it directly; TOML files may use the snake_case spelling as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    #[serde(default)]
    pub elements: ElementsConfig,

    #[serde(default)]
    pub messages: MessagesConfig,
}

/// How one element is located on the page
///
/// Each key is tried as an element id, then as a `data-testid`;
/// `base` first, then every fallback in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementLookup {
    pub base: String,

    #[serde(default)]
    pub fallbacks: Vec<String>,
}

impl ElementLookup {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            fallbacks: Vec::new(),
        }
    }

    pub fn with_fallback(mut self, key: impl Into<String>) -> Self {
        self.fallbacks.push(key.into());
        self
    }

    /// Keys in the order they are tried
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.base.as_str()).chain(self.fallbacks.iter().map(String::as_str))
    }
}

/// Where the form, its inputs, error displays and success region live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementsConfig {
    #[serde(default = "default_form")]
    pub form: ElementLookup,

    #[serde(default = "default_name_input", alias = "name_input")]
    pub name_input: ElementLookup,

    #[serde(default = "default_email_input", alias = "email_input")]
    pub email_input: ElementLookup,

    #[serde(default = "default_subject_input", alias = "subject_input")]
    pub subject_input: ElementLookup,

    #[serde(default = "default_message_input", alias = "message_input")]
    pub message_input: ElementLookup,

    #[serde(default = "default_name_error", alias = "name_error")]
    pub name_error: ElementLookup,

    #[serde(default = "default_email_error", alias = "email_error")]
    pub email_error: ElementLookup,

    #[serde(default = "default_subject_error", alias = "subject_error")]
    pub subject_error: ElementLookup,

    #[serde(default = "default_message_error", alias = "message_error")]
    pub message_error: ElementLookup,

    #[serde(default = "default_success")]
    pub success: ElementLookup,
}

impl ElementsConfig {
    pub fn input(&self, field: FormField) -> &ElementLookup {
        match field {
            FormField::Name => &self.name_input,
            FormField::Email => &self.email_input,
            FormField::Subject => &self.subject_input,
            FormField::Message => &self.message_input,
        }
    }

    pub fn error(&self, field: FormField) -> &ElementLookup {
        match field {
            FormField::Name => &self.name_error,
            FormField::Email => &self.email_error,
            FormField::Subject => &self.subject_error,
            FormField::Message => &self.message_error,
        }
    }
}

/// Text shown after a valid submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesConfig {
    /// Written into the success region
    #[serde(default = "default_success_message")]
    pub success: String,

    /// Shown as an alert when the page has no success region
    #[serde(default = "default_alert_message", alias = "success_alert")]
    pub success_alert: String,
}

// Default values
fn default_form() -> ElementLookup {
    ElementLookup::new("contact-form")
}

fn default_name_input() -> ElementLookup {
    ElementLookup::new("contact-name")
}

fn default_email_input() -> ElementLookup {
    ElementLookup::new("contact-email")
}

fn default_subject_input() -> ElementLookup {
    ElementLookup::new("contact-subject")
}

fn default_message_input() -> ElementLookup {
    ElementLookup::new("contact-message")
}

fn default_name_error() -> ElementLookup {
    ElementLookup::new("test-contact-error-name").with_fallback("error-name")
}

fn default_email_error() -> ElementLookup {
    ElementLookup::new("test-contact-error-email").with_fallback("error-email")
}

fn default_subject_error() -> ElementLookup {
    ElementLookup::new("test-contact-error-subject").with_fallback("error-subject")
}

fn default_message_error() -> ElementLookup {
    ElementLookup::new("test-contact-error-message").with_fallback("error-message")
}

fn default_success() -> ElementLookup {
    ElementLookup::new("test-contact-success").with_fallback("contact-success")
}

fn default_success_message() -> String {
    "✅ Thanks — your message was sent!".to_string()
}

fn default_alert_message() -> String {
    "Thanks — your message was sent!".to_string()
}

// Default implementations
impl Default for ElementsConfig {
    fn default() -> Self {
        Self {
            form: default_form(),
            name_input: default_name_input(),
            email_input: default_email_input(),
            subject_input: default_subject_input(),
            message_input: default_message_input(),
            name_error: default_name_error(),
            email_error: default_email_error(),
            subject_error: default_subject_error(),
            message_error: default_message_error(),
            success: default_success(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            success: default_success_message(),
            success_alert: default_alert_message(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse configuration from TOML text; blank text yields the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from default path (./contact-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("contact-form.toml")
    }
}
