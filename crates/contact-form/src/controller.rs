// File: src/controller.rs
// Purpose: Binds the validation rules to one contact form on a page

use std::cell::Cell;

use contact_form_validation::{is_blank, validate_field, FieldError, FormField, ValidationResult};
use tracing::{debug, info, warn};

use crate::config::{FormConfig, MessagesConfig};
use crate::dom::{find_element, reference_token, FormDom};

/// Where a field stands between submits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Untouched,
    Invalid,
    Valid,
}

/// The elements belonging to one field; either may be missing from the page
#[derive(Debug, Clone)]
struct FieldBinding<E> {
    input: Option<E>,
    error: Option<E>,
}

/// Validation and feedback for a single contact form.
///
/// Created once per page load by [`FormValidationController::bind`]. All
/// handlers take `&self` so the browser binding can share one controller
/// between event listeners; field states sit in `Cell`s because a focus
/// change inside one handler may synchronously run another.
pub struct FormValidationController<D: FormDom> {
    dom: D,
    messages: MessagesConfig,
    form: D::Element,
    fields: [FieldBinding<D::Element>; 4],
    success: Option<D::Element>,
    states: [Cell<FieldState>; 4],
}

impl<D: FormDom> FormValidationController<D> {
    /// Resolve every element and prepare accessibility attributes.
    ///
    /// Returns `None` when the page has no form; every other missing
    /// element only disables the operations that touch it.
    pub fn bind(dom: D, config: &FormConfig) -> Option<Self> {
        let elements = &config.elements;
        let Some(form) = find_element(&dom, &elements.form) else {
            debug!(form = %elements.form.base, "No contact form on this page");
            return None;
        };

        let fields = FormField::ALL.map(|field| {
            let input = find_element(&dom, elements.input(field));
            let error = find_element(&dom, elements.error(field));
            if input.is_none() {
                warn!(%field, lookup = %elements.input(field).base, "Input element not found");
            }
            if error.is_none() {
                warn!(%field, lookup = %elements.error(field).base, "Error element not found");
            }
            FieldBinding { input, error }
        });

        let success = find_element(&dom, &elements.success);
        if success.is_none() {
            debug!("No success region, falling back to alert");
        }

        let controller = Self {
            dom,
            messages: config.messages.clone(),
            form,
            fields,
            success,
            states: Default::default(),
        };
        controller.prepare_accessibility();

        info!("Contact form bound");
        Some(controller)
    }

    fn prepare_accessibility(&self) {
        for binding in &self.fields {
            let Some(error) = &binding.error else { continue };
            self.dom.set_attribute(error, "role", "alert");

            let token = reference_token(&self.dom, error);
            if let (Some(input), Some(token)) = (&binding.input, token) {
                self.dom.set_attribute(input, "aria-describedby", &token);
            }
        }
        if let Some(success) = &self.success {
            self.dom.set_attribute(success, "role", "alert");
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn form(&self) -> &D::Element {
        &self.form
    }

    pub fn input(&self, field: FormField) -> Option<&D::Element> {
        self.fields[field.index()].input.as_ref()
    }

    pub fn field_state(&self, field: FormField) -> FieldState {
        self.states[field.index()].get()
    }

    /// Trimmed by the rules, not here; a missing input reads as empty
    fn read_value(&self, field: FormField) -> String {
        self.input(field)
            .map(|input| self.dom.value(input))
            .unwrap_or_default()
    }

    fn set_state(&self, field: FormField, state: FieldState) {
        self.states[field.index()].set(state);
    }

    /// Error text and `aria-invalid` always change together
    fn show_error(&self, field: FormField, error: &FieldError) {
        let binding = &self.fields[field.index()];
        if let Some(display) = &binding.error {
            self.dom.set_text(display, &error.message());
        }
        if let Some(input) = &binding.input {
            self.dom.set_attribute(input, "aria-invalid", "true");
        }
        self.set_state(field, FieldState::Invalid);
    }

    fn clear_error(&self, field: FormField) {
        let binding = &self.fields[field.index()];
        if let Some(display) = &binding.error {
            self.dom.set_text(display, "");
        }
        if let Some(input) = &binding.input {
            self.dom.remove_attribute(input, "aria-invalid");
        }
    }

    /// Run one field's rule and reflect the outcome on the page
    fn check(&self, field: FormField) -> Result<(), FieldError> {
        let outcome = validate_field(field, &self.read_value(field));
        match &outcome {
            Ok(()) => {
                self.clear_error(field);
                self.set_state(field, FieldState::Valid);
            }
            Err(error) => {
                debug!(%field, %error, "Field invalid");
                self.show_error(field, error);
            }
        }
        outcome
    }

    pub fn validate_name(&self) -> bool {
        self.check(FormField::Name).is_ok()
    }

    pub fn validate_email(&self) -> bool {
        self.check(FormField::Email).is_ok()
    }

    pub fn validate_subject(&self) -> bool {
        self.check(FormField::Subject).is_ok()
    }

    pub fn validate_message(&self) -> bool {
        self.check(FormField::Message).is_ok()
    }

    /// Validate all four fields in order; no rule is skipped after a failure.
    pub fn validate_all(&self) -> ValidationResult {
        self.hide_success();
        ValidationResult::from_outcomes(
            FormField::ALL
                .iter()
                .map(|&field| (field, self.check(field))),
        )
    }

    /// Handle a submit attempt. The caller cancels the native submission.
    pub fn on_submit(&self) -> ValidationResult {
        let result = self.validate_all();

        if result.is_valid {
            info!("Contact form submitted");
            self.show_success();
        } else if let Some(field) = result.first_invalid() {
            debug!(%field, "Submit rejected, focusing first invalid field");
            if let Some(input) = self.input(field) {
                self.dom.focus(input);
            }
        }

        result
    }

    /// Clear the field's error as soon as its value passes. Typing never
    /// raises a new error.
    pub fn on_field_input(&self, field: FormField) {
        if validate_field(field, &self.read_value(field)).is_ok() {
            self.clear_error(field);
            self.set_state(field, FieldState::Valid);
        }
    }

    /// Re-check the field when focus leaves it.
    ///
    /// A blank field nobody has been told about yet stays untouched, so
    /// tabbing through the form (or losing focus right after a reset)
    /// does not flag anything.
    pub fn on_field_blur(&self, field: FormField) {
        if self.field_state(field) == FieldState::Untouched && is_blank(&self.read_value(field)) {
            return;
        }
        let valid = self.check(field).is_ok();
        debug!(%field, valid, "Field re-checked on blur");
    }

    fn hide_success(&self) {
        if let Some(success) = &self.success {
            self.dom.set_text(success, "");
            self.dom.set_hidden(success, true);
        }
    }

    fn show_success(&self) {
        match &self.success {
            Some(success) => {
                self.dom.set_text(success, &self.messages.success);
                self.dom.set_hidden(success, false);
            }
            None => self.dom.alert(&self.messages.success_alert),
        }

        self.dom.reset(&self.form);
        for field in FormField::ALL {
            self.clear_error(field);
            self.set_state(field, FieldState::Untouched);
        }

        if let Some(success) = &self.success {
            self.dom.set_attribute(success, "tabindex", "-1");
            self.dom.focus(success);
        }
    }
}
