//! Contact Form WASM
//!
//! WebAssembly entry point for the contact form. On load it binds the
//! validation controller to `#contact-form` (if the page has one) and
//! exports the pure rules for scripts that want them directly.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use contact_form::validation::{self as rules, ContactFormValues, FormField};
use contact_form::{FormConfig, FormValidationController};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

pub mod logging;
pub mod web_dom;

pub use web_dom::WebDom;

thread_local! {
    static BOUND: Cell<bool> = const { Cell::new(false) };
}

/// Set panic hook and logging, then bind the default form
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    logging::init(level);

    bind(&FormConfig::default());
}

/// Bind the contact form using a custom element/message configuration
///
/// Keys are the camelCase names of `FormConfig` (`nameInput`,
/// `successAlert`, ...); anything omitted keeps its default. Returns `false` when no form was found or a form is
/// already bound on this page.
///
/// # Example (JavaScript)
/// ```javascript
/// bindContactForm({
///     elements: { form: { base: 'feedback-form' }, nameInput: { base: 'full-name' } },
///     messages: { success: 'Thanks!', successAlert: 'Thanks!' }
/// });
/// ```
#[wasm_bindgen(js_name = bindContactForm)]
pub fn bind_contact_form(config: JsValue) -> Result<bool, JsValue> {
    let config: FormConfig = if config.is_undefined() || config.is_null() {
        FormConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
    };
    Ok(bind(&config))
}

fn bind(config: &FormConfig) -> bool {
    if BOUND.with(Cell::get) {
        tracing::debug!("Contact form already bound");
        return false;
    }
    let Some(dom) = WebDom::current() else {
        return false;
    };
    let Some(controller) = FormValidationController::bind(dom, config) else {
        return false;
    };

    attach_listeners(Rc::new(controller));
    BOUND.with(|bound| bound.set(true));
    true
}

/// Wire `submit`, `input` and `blur`. Listeners live as long as the page.
fn attach_listeners(controller: Rc<FormValidationController<WebDom>>) {
    let submit = Rc::clone(&controller);
    listen(controller.form(), "submit", move |event| {
        event.prevent_default();
        submit.on_submit();
    });

    for field in FormField::ALL {
        let Some(input) = controller.input(field) else {
            continue;
        };

        let on_input = Rc::clone(&controller);
        listen(input, "input", move |_| on_input.on_field_input(field));

        let on_blur = Rc::clone(&controller);
        listen(input, "blur", move |_| on_blur.on_field_blur(field));
    }
}

fn listen(target: &Element, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!(event, "Could not attach listener");
    }
    closure.forget();
}

/// Outcome of one field, as returned to JavaScript
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    pub valid: bool,
    pub message: Option<String>,
}

/// Outcome of a whole-form check, as returned to JavaScript
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    pub is_valid: bool,
    pub fields: BTreeMap<FormField, FieldReport>,
}

impl From<rules::ValidationResult> for FormReport {
    fn from(result: rules::ValidationResult) -> Self {
        let fields = result
            .fields
            .iter()
            .map(|(field, error)| {
                let report = FieldReport {
                    valid: error.is_none(),
                    message: error.as_ref().map(|e| e.message()),
                };
                (*field, report)
            })
            .collect();
        Self {
            is_valid: result.is_valid,
            fields,
        }
    }
}

/// Validate a single field value
///
/// # Returns
/// The error message, or `undefined` when the value is valid
///
/// # Example (JavaScript)
/// ```javascript
/// const error = validateField('email', 'user@example');
/// // "Please enter a valid email address."
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field: &str, value: &str) -> Result<Option<String>, JsValue> {
    let field: FormField = field
        .parse()
        .map_err(|e: rules::ParseFieldError| JsValue::from_str(&e.to_string()))?;
    Ok(rules::validate_field(field, value).err().map(|e| e.message()))
}

/// Validate all four fields at once
///
/// # Example (JavaScript)
/// ```javascript
/// const report = validateForm({ name: '', email: 'x@x.com', subject: 'Hi', message: 'short' });
/// // report.isValid === false, report.fields.message.message === "Message must be ..."
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue) -> Result<JsValue, JsValue> {
    let values: ContactFormValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;
    let report = FormReport::from(rules::validate_all(&values));
    // Plain objects rather than ES2015 Maps for `fields`
    Ok(report.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Quick email validation (the pattern alone; the value is not trimmed)
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    rules::is_valid_email(email)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_email_validation() {
        assert!(is_valid_email_js("user@example.com"));
        assert!(!is_valid_email_js("a@b"));
        assert!(!is_valid_email_js(" user@example.com "));
    }

    #[wasm_bindgen_test]
    fn test_validate_field_messages() {
        assert_eq!(validate_field("name", "Ada").unwrap(), None);
        assert_eq!(
            validate_field("message", "short").unwrap().as_deref(),
            Some("Message must be at least 10 characters long.")
        );
        assert!(validate_field("phone", "123").is_err());
    }

    #[wasm_bindgen_test]
    fn test_form_report() {
        let values = ContactFormValues {
            name: String::new(),
            email: "x@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "short".to_string(),
        };
        let report = FormReport::from(rules::validate_all(&values));
        assert!(!report.is_valid);
        assert!(!report.fields[&FormField::Name].valid);
        assert!(report.fields[&FormField::Email].valid);
        assert_eq!(report.fields[&FormField::Subject].message, None);
    }
}
