//! # contact-form
//!
//! Client-side validation for a four-field contact form (name, email,
//! subject, message).
//!
//! ## Quick Start
//!
//! ```rust
//! use contact_form::{FormConfig, FormField, FormValidationController, MemoryDom};
//!
//! let controller = FormValidationController::bind(MemoryDom::contact_page(), &FormConfig::default())
//!     .expect("page has a contact form");
//!
//! let result = controller.on_submit();
//! assert!(!result.is_valid);
//! assert_eq!(result.first_invalid(), Some(FormField::Name));
//! ```
//!
//! ## Architecture
//!
//! - **`contact-form-validation`** - pure rules, re-exported here
//! - **[`FormDom`]** - the trait a document implements (`web_sys` in the
//!   browser, [`MemoryDom`] natively)
//! - **[`FormValidationController`]** - event handlers and feedback

pub mod config;
pub mod controller;
pub mod dom;
pub mod memory;

pub use config::{ElementLookup, ElementsConfig, FormConfig, MessagesConfig};
pub use controller::{FieldState, FormValidationController};
pub use dom::{find_element, FormDom};
pub use memory::{MemoryDom, NodeId};

pub use contact_form_validation as validation;
pub use contact_form_validation::{
    validate_all, validate_field, ContactFormValues, FieldError, FormField, ValidationResult,
};
