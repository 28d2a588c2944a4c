//! `FormDom` over the live browser document

use contact_form::FormDom;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

#[derive(Debug, Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The window's document, if there is a window
    pub fn current() -> Option<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
    }
}

impl FormDom for WebDom {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn element_by_test_id(&self, test_id: &str) -> Option<Element> {
        let selector = format!("[data-testid=\"{}\"]", test_id.replace('"', "\\\""));
        self.document.query_selector(&selector).ok().flatten()
    }

    fn value(&self, element: &Element) -> String {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        if element.set_attribute(name, value).is_err() {
            tracing::warn!(name, "Could not set attribute");
        }
    }

    fn remove_attribute(&self, element: &Element, name: &str) {
        let _ = element.remove_attribute(name);
    }

    fn set_hidden(&self, element: &Element, hidden: bool) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            html.set_hidden(hidden);
        }
    }

    fn focus(&self, element: &Element) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let _ = html.focus();
        }
    }

    fn reset(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
