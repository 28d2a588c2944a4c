/// Behaviour of the contact form controller against an in-memory page:
/// submit, reactive clearing, focus movement and tolerance of partial markup.

use contact_form::{
    FieldState, FormConfig, FormDom, FormField, FormValidationController, MemoryDom,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn page() -> FormValidationController<MemoryDom> {
    FormValidationController::bind(MemoryDom::contact_page(), &FormConfig::default())
        .expect("contact page has a form")
}

fn fill(controller: &FormValidationController<MemoryDom>, name: &str, email: &str, subject: &str, message: &str) {
    let dom = controller.dom();
    dom.set_value(dom.get("contact-name"), name);
    dom.set_value(dom.get("contact-email"), email);
    dom.set_value(dom.get("contact-subject"), subject);
    dom.set_value(dom.get("contact-message"), message);
}

fn error_text(controller: &FormValidationController<MemoryDom>, field: &str) -> String {
    let dom = controller.dom();
    dom.text(dom.get(&format!("error-{field}")))
}

fn is_marked_invalid(controller: &FormValidationController<MemoryDom>, field: &str) -> bool {
    let dom = controller.dom();
    dom.attribute(&dom.get(&format!("contact-{field}")), "aria-invalid")
        .as_deref()
        == Some("true")
}

#[rstest]
#[case("name", "Full name is required.")]
#[case("email", "Email is required.")]
#[case("subject", "Subject is required.")]
#[case("message", "Message is required.")]
fn test_empty_field_shows_required_message(#[case] field: &str, #[case] expected: &str) {
    let controller = page();
    fill(&controller, "Ada", "ada@example.com", "Hello", "A long enough message");
    let dom = controller.dom();
    dom.set_value(dom.get(&format!("contact-{field}")), "");

    let result = controller.on_submit();

    assert!(!result.is_valid);
    assert_eq!(error_text(&controller, field), expected);
    assert!(is_marked_invalid(&controller, field));
}

#[test]
fn test_end_to_end_mixed_submission() {
    let controller = page();
    fill(&controller, "", "x@x.com", "Hi", "short");

    let result = controller.on_submit();

    assert!(!result.is_valid);
    assert_eq!(error_text(&controller, "name"), "Full name is required.");
    assert_eq!(error_text(&controller, "email"), "");
    assert_eq!(error_text(&controller, "subject"), "");
    assert_eq!(
        error_text(&controller, "message"),
        "Message must be at least 10 characters long."
    );
    assert!(is_marked_invalid(&controller, "name"));
    assert!(!is_marked_invalid(&controller, "email"));
    assert!(!is_marked_invalid(&controller, "subject"));
    assert!(is_marked_invalid(&controller, "message"));

    let dom = controller.dom();
    assert_eq!(dom.focused(), Some(dom.get("contact-name")));
}

#[test]
fn test_focus_lands_on_first_invalid_in_order() {
    let controller = page();
    fill(&controller, "Ada", "not-an-email", "", "short");

    controller.on_submit();

    let dom = controller.dom();
    assert_eq!(dom.focused(), Some(dom.get("contact-email")));
}

#[test]
fn test_valid_submission_shows_success_and_resets() {
    let controller = page();
    fill(&controller, "Ada", "ada@example.com", "Hello", "A long enough message");

    let result = controller.on_submit();
    assert!(result.is_valid);

    let dom = controller.dom();
    let success = dom.get("contact-success");
    assert_eq!(dom.text(success), "✅ Thanks — your message was sent!");
    assert!(!dom.is_hidden(success));
    assert_eq!(dom.attribute(&success, "tabindex").as_deref(), Some("-1"));
    assert_eq!(dom.focused(), Some(success));

    for field in ["name", "email", "subject", "message"] {
        assert_eq!(error_text(&controller, field), "");
        assert!(!is_marked_invalid(&controller, field));
        assert_eq!(dom.value(&dom.get(&format!("contact-{field}"))), "");
    }
    for field in FormField::ALL {
        assert_eq!(controller.field_state(field), FieldState::Untouched);
    }
    assert!(dom.alerts().is_empty());
}

#[test]
fn test_next_submit_hides_previous_success() {
    let controller = page();
    fill(&controller, "Ada", "ada@example.com", "Hello", "A long enough message");
    controller.on_submit();

    let result = controller.on_submit();
    assert!(!result.is_valid);

    let dom = controller.dom();
    let success = dom.get("contact-success");
    assert_eq!(dom.text(success), "");
    assert!(dom.is_hidden(success));
}

#[test]
fn test_repeat_submits_do_not_duplicate_errors() {
    let controller = page();
    fill(&controller, "", "a@b", "", "tiny");

    let first = controller.on_submit();
    let texts: Vec<String> = ["name", "email", "subject", "message"]
        .iter()
        .map(|f| error_text(&controller, f))
        .collect();

    let second = controller.on_submit();
    let again: Vec<String> = ["name", "email", "subject", "message"]
        .iter()
        .map(|f| error_text(&controller, f))
        .collect();

    assert_eq!(first, second);
    assert_eq!(texts, again);
    assert_eq!(texts[1], "Please enter a valid email address.");
}

#[test]
fn test_input_clears_only_that_field() {
    let controller = page();
    controller.on_submit();
    let dom = controller.dom();

    dom.set_value(dom.get("contact-name"), "Ada");
    controller.on_field_input(FormField::Name);

    assert_eq!(error_text(&controller, "name"), "");
    assert!(!is_marked_invalid(&controller, "name"));
    assert_eq!(controller.field_state(FormField::Name), FieldState::Valid);

    assert_eq!(error_text(&controller, "email"), "Email is required.");
    assert!(is_marked_invalid(&controller, "subject"));
    assert_eq!(controller.field_state(FormField::Message), FieldState::Invalid);
}

#[test]
fn test_email_clears_only_once_it_matches() {
    let controller = page();
    controller.on_submit();
    let dom = controller.dom();
    let email = dom.get("contact-email");

    dom.set_value(email, "ada@");
    controller.on_field_input(FormField::Email);
    assert_eq!(error_text(&controller, "email"), "Email is required.");

    dom.set_value(email, "ada@example.com");
    controller.on_field_input(FormField::Email);
    assert_eq!(error_text(&controller, "email"), "");
    assert!(!is_marked_invalid(&controller, "email"));
}

#[test]
fn test_message_clears_at_ten_characters() {
    let controller = page();
    let dom = controller.dom();
    let message = dom.get("contact-message");
    dom.set_value(message, "short");
    controller.on_submit();

    dom.set_value(message, "123456789");
    controller.on_field_input(FormField::Message);
    assert!(is_marked_invalid(&controller, "message"));

    dom.set_value(message, "1234567890");
    controller.on_field_input(FormField::Message);
    assert!(!is_marked_invalid(&controller, "message"));
    assert_eq!(error_text(&controller, "message"), "");
}

#[test]
fn test_blur_clears_corrected_field() {
    let controller = page();
    controller.on_submit();
    let dom = controller.dom();

    dom.set_value(dom.get("contact-subject"), "Hello");
    controller.on_field_blur(FormField::Subject);

    assert_eq!(error_text(&controller, "subject"), "");
    assert_eq!(controller.field_state(FormField::Subject), FieldState::Valid);
    assert_eq!(error_text(&controller, "name"), "Full name is required.");
}

#[test]
fn test_valid_field_regresses_on_submit() {
    let controller = page();
    let dom = controller.dom();
    dom.set_value(dom.get("contact-name"), "Ada");
    controller.on_field_input(FormField::Name);
    assert_eq!(controller.field_state(FormField::Name), FieldState::Valid);

    dom.set_value(dom.get("contact-name"), "   ");
    controller.on_submit();
    assert_eq!(controller.field_state(FormField::Name), FieldState::Invalid);
}

#[test]
fn test_error_text_and_marker_stay_in_step() {
    let controller = page();
    fill(&controller, "", "bad", "Hi", "");
    controller.on_submit();

    for field in ["name", "email", "subject", "message"] {
        assert_eq!(
            !error_text(&controller, field).is_empty(),
            is_marked_invalid(&controller, field),
            "field {field}"
        );
    }
}

#[test]
fn test_missing_success_region_falls_back_to_alert() {
    let dom = MemoryDom::contact_page();
    dom.remove("contact-success");
    let controller = FormValidationController::bind(dom, &FormConfig::default()).unwrap();
    fill(&controller, "Ada", "ada@example.com", "Hello", "A long enough message");

    assert!(controller.on_submit().is_valid);
    assert_eq!(
        controller.dom().alerts(),
        vec!["Thanks — your message was sent!".to_string()]
    );
    assert_eq!(controller.dom().value(&controller.dom().get("contact-name")), "");
}

#[test]
fn test_missing_error_elements_are_tolerated() {
    let dom = MemoryDom::contact_page();
    dom.remove("error-email");
    dom.remove("error-message");
    let controller = FormValidationController::bind(dom, &FormConfig::default()).unwrap();

    let result = controller.on_submit();
    assert!(!result.is_valid);
    assert!(is_marked_invalid(&controller, "email"));
    assert_eq!(error_text(&controller, "name"), "Full name is required.");
}

#[test]
fn test_missing_input_reads_as_empty() {
    let dom = MemoryDom::contact_page();
    dom.remove("contact-subject");
    let controller = FormValidationController::bind(dom, &FormConfig::default()).unwrap();
    fill_present(&controller);

    let result = controller.on_submit();
    assert!(!result.is_valid);
    assert_eq!(result.first_invalid(), Some(FormField::Subject));
    assert_eq!(error_text(&controller, "subject"), "Subject is required.");
    // nothing to focus
    assert_eq!(controller.dom().focused(), None);
}

fn fill_present(controller: &FormValidationController<MemoryDom>) {
    let dom = controller.dom();
    dom.set_value(dom.get("contact-name"), "Ada");
    dom.set_value(dom.get("contact-email"), "ada@example.com");
    dom.set_value(dom.get("contact-message"), "A long enough message");
}

#[test]
fn test_test_id_only_markup_with_custom_config() {
    let dom = MemoryDom::new();
    let form = dom.create_element("form", Some("feedback"), None);
    dom.create_control(form, "input", "contact-name");
    dom.create_control(form, "input", "contact-email");
    dom.create_control(form, "input", "contact-subject");
    dom.create_control(form, "textarea", "contact-message");
    let name_error = dom.create_element("span", None, Some("test-contact-error-name"));
    let thanks = dom.create_element("div", None, Some("thanks"));

    let config = FormConfig::from_toml_str(
        r#"
        [elements.form]
        base = "feedback"

        [elements.success]
        base = "thanks"
        "#,
    )
    .unwrap();
    let controller = FormValidationController::bind(dom, &config).unwrap();
    let dom = controller.dom();

    assert_eq!(
        dom.attribute(&dom.get("contact-name"), "aria-describedby").as_deref(),
        Some("test-contact-error-name")
    );

    controller.on_submit();
    assert_eq!(dom.text(name_error), "Full name is required.");

    fill(&controller, "Ada", "ada@example.com", "Hello", "A long enough message");
    controller.on_submit();
    assert_eq!(dom.focused(), Some(thanks));
}
