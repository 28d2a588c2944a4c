//! Contact Form Validation
//!
//! Pure validation rules for the four contact-form fields.
//! Nothing here touches the DOM: every rule maps a string value to
//! `Ok(())` or a [`FieldError`] carrying the text shown to the user.
//! Used by the native controller and the WASM client alike.

pub mod email;
pub mod error;
pub mod field;
pub mod form;
pub mod string;

// Re-export all validators
pub use email::*;
pub use error::FieldError;
pub use field::{FormField, ParseFieldError};
pub use form::*;
pub use string::*;
