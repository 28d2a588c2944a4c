// File: src/dom.rs
// Purpose: The boundary between the controller and a document

use crate::config::ElementLookup;

/// The few DOM capabilities the controller needs.
///
/// Implemented over `web_sys` in the browser and by [`MemoryDom`](crate::memory::MemoryDom)
/// for native tests. Every method is infallible: an operation the
/// document cannot perform is simply skipped.
pub trait FormDom {
    /// Handle to a node in the document
    type Element: Clone;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Element carrying `data-testid="<test_id>"`
    fn element_by_test_id(&self, test_id: &str) -> Option<Self::Element>;

    /// Current value of an input, textarea or select; empty for anything else
    fn value(&self, element: &Self::Element) -> String;

    fn set_text(&self, element: &Self::Element, text: &str);

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    fn remove_attribute(&self, element: &Self::Element, name: &str);

    fn set_hidden(&self, element: &Self::Element, hidden: bool);

    fn focus(&self, element: &Self::Element);

    /// Restore every control of a form to its initial value
    fn reset(&self, form: &Self::Element);

    fn alert(&self, message: &str);
}

/// Resolve a lookup: each key as an id, then as a test id, in order.
pub fn find_element<D: FormDom>(dom: &D, lookup: &ElementLookup) -> Option<D::Element> {
    lookup.keys().find_map(|key| {
        dom.element_by_id(key)
            .or_else(|| dom.element_by_test_id(key))
    })
}

/// The token other elements use to reference this one (`id`, else `data-testid`)
pub fn reference_token<D: FormDom>(dom: &D, element: &D::Element) -> Option<String> {
    ["id", "data-testid"]
        .iter()
        .filter_map(|name| dom.attribute(element, name))
        .find(|token| !token.is_empty())
}
