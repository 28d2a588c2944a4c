// File: src/memory.rs
// Purpose: In-memory document for driving the controller without a browser

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::dom::FormDom;

/// Index of a node inside a [`MemoryDom`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct MemoryNode {
    tag: String,
    attributes: BTreeMap<String, String>,
    text: String,
    value: String,
    hidden: bool,
    form: Option<NodeId>,
}

/// A flat, single-threaded stand-in for a browser document.
///
/// Nodes live in insertion order; id and test-id lookups return the
/// first match, like `getElementById` does.
#[derive(Debug, Default)]
pub struct MemoryDom {
    nodes: RefCell<Vec<MemoryNode>>,
    focused: Cell<Option<NodeId>>,
    alerts: RefCell<Vec<String>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// The markup the controller expects by default: a form with four
    /// controls, an error paragraph per field and a hidden success region.
    pub fn contact_page() -> Self {
        let dom = Self::new();
        let form = dom.create_element("form", Some("contact-form"), None);
        for field in ["name", "email", "subject"] {
            dom.create_control(form, "input", &format!("contact-{field}"));
        }
        dom.create_control(form, "textarea", "contact-message");
        for field in ["name", "email", "subject", "message"] {
            dom.create_element(
                "p",
                Some(&format!("error-{field}")),
                Some(&format!("test-contact-error-{field}")),
            );
        }
        let success = dom.create_element("p", Some("contact-success"), Some("test-contact-success"));
        dom.set_hidden(&success, true);
        dom
    }

    /// Append an element with optional `id` and `data-testid`
    pub fn create_element(&self, tag: &str, id: Option<&str>, test_id: Option<&str>) -> NodeId {
        let mut node = MemoryNode {
            tag: tag.to_string(),
            ..MemoryNode::default()
        };
        if let Some(id) = id {
            node.attributes.insert("id".to_string(), id.to_string());
        }
        if let Some(test_id) = test_id {
            node.attributes
                .insert("data-testid".to_string(), test_id.to_string());
        }

        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        NodeId(nodes.len() - 1)
    }

    /// Append a form control owned by `form`
    pub fn create_control(&self, form: NodeId, tag: &str, id: &str) -> NodeId {
        let control = self.create_element(tag, Some(id), None);
        self.with_node(control, |node| node.form = Some(form));
        control
    }

    /// Detach an element so lookups no longer find it
    pub fn remove(&self, id: &str) {
        if let Some(node) = self.element_by_id(id) {
            self.with_node(node, |node| node.attributes.clear());
        }
    }

    /// Type into a control
    pub fn set_value(&self, element: NodeId, value: &str) {
        self.with_node(element, |node| node.value = value.to_string());
    }

    pub fn text(&self, element: NodeId) -> String {
        self.read_node(element, |node| node.text.clone())
            .unwrap_or_default()
    }

    pub fn is_hidden(&self, element: NodeId) -> bool {
        self.read_node(element, |node| node.hidden).unwrap_or(false)
    }

    pub fn tag(&self, element: NodeId) -> String {
        self.read_node(element, |node| node.tag.clone())
            .unwrap_or_default()
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused.get()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    /// Element with the given id; panics if absent
    pub fn get(&self, id: &str) -> NodeId {
        match self.element_by_id(id) {
            Some(node) => node,
            None => panic!("no element with id {id:?}"),
        }
    }

    fn find(&self, name: &str, value: &str) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .position(|node| node.attributes.get(name).map(String::as_str) == Some(value))
            .map(NodeId)
    }

    fn with_node(&self, element: NodeId, f: impl FnOnce(&mut MemoryNode)) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(element.0) {
            f(node);
        }
    }

    fn read_node<T>(&self, element: NodeId, f: impl FnOnce(&MemoryNode) -> T) -> Option<T> {
        self.nodes.borrow().get(element.0).map(f)
    }
}

impl FormDom for MemoryDom {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find("id", id)
    }

    fn element_by_test_id(&self, test_id: &str) -> Option<NodeId> {
        self.find("data-testid", test_id)
    }

    fn value(&self, element: &NodeId) -> String {
        self.read_node(*element, |node| match node.tag.as_str() {
            "input" | "textarea" | "select" => node.value.clone(),
            _ => String::new(),
        })
        .unwrap_or_default()
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        self.with_node(*element, |node| node.text = text.to_string());
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.read_node(*element, |node| node.attributes.get(name).cloned())
            .flatten()
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
        self.with_node(*element, |node| {
            node.attributes.insert(name.to_string(), value.to_string());
        });
    }

    fn remove_attribute(&self, element: &NodeId, name: &str) {
        self.with_node(*element, |node| {
            node.attributes.remove(name);
        });
    }

    fn set_hidden(&self, element: &NodeId, hidden: bool) {
        self.with_node(*element, |node| node.hidden = hidden);
    }

    fn focus(&self, element: &NodeId) {
        self.focused.set(Some(*element));
    }

    fn reset(&self, form: &NodeId) {
        for node in self.nodes.borrow_mut().iter_mut() {
            if node.form == Some(*form) {
                node.value.clear();
            }
        }
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
