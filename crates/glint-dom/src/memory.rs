//! In-memory reference host
//!
//! A self-contained [`NodeOps`] implementation for tests and examples. The
//! capability toggles let a single type stand in for hosts with and without
//! a native token list, and for hosts that do or do not reflect boolean
//! properties as attributes.

use std::collections::HashMap;

use crate::node::{Handler, NodeKind, NodeOps};

/// Minimal host element backed by plain collections.
///
/// Attributes keep insertion order (Vec plus by-name index). An attribute
/// write counter makes idempotence observable from tests.
#[derive(Debug, Default)]
pub struct MemoryElement {
    tag: String,
    text: String,
    kind: Option<NodeKind>,
    attrs: Vec<(String, String)>,
    by_name: HashMap<String, usize>,
    bool_props: HashMap<String, bool>,
    reflect_bool_props: bool,
    native_token_list: bool,
    children: Vec<MemoryElement>,
    listeners: Vec<(String, Handler, bool)>,
    attr_writes: u32,
}

impl MemoryElement {
    /// Create an element node.
    pub fn element(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            kind: Some(NodeKind::Element),
            ..Default::default()
        }
    }

    /// Create a text node.
    pub fn text(content: &str) -> Self {
        Self {
            text: content.to_string(),
            kind: Some(NodeKind::Text),
            ..Default::default()
        }
    }

    /// Create a document node.
    pub fn document() -> Self {
        Self {
            kind: Some(NodeKind::Document),
            ..Default::default()
        }
    }

    /// Toggle the native class token list capability.
    pub fn with_native_token_list(mut self, enabled: bool) -> Self {
        self.native_token_list = enabled;
        self
    }

    /// Toggle whether boolean properties surface as real attributes.
    pub fn with_reflected_bool_props(mut self, enabled: bool) -> Self {
        self.reflect_bool_props = enabled;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn text_content(&self) -> &str {
        &self.text
    }

    pub fn push_child(&mut self, child: MemoryElement) {
        self.children.push(child);
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Number of listeners registered for an event type.
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners.iter().filter(|(t, _, _)| t == event_type).count()
    }

    /// Total attribute writes performed on this node.
    pub fn attr_writes(&self) -> u32 {
        self.attr_writes
    }

    /// Boolean property value, if one was ever assigned.
    pub fn bool_property(&self, name: &str) -> Option<bool> {
        self.bool_props.get(name).copied()
    }

    fn class_tokens(&self) -> Vec<String> {
        self.attribute("class")
            .map(|v| v.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl NodeOps for MemoryElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .and_then(|&i| self.attrs.get(i))
            .map(|(_, v)| v.as_str())
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        tracing::trace!("<{}> set {}={:?}", self.tag, name, value);
        self.attr_writes += 1;
        if let Some(&index) = self.by_name.get(name) {
            self.attrs[index].1 = value.to_string();
        } else {
            self.by_name.insert(name.to_string(), self.attrs.len());
            self.attrs.push((name.to_string(), value.to_string()));
        }
    }

    fn remove_attribute(&mut self, name: &str) {
        if let Some(&index) = self.by_name.get(name) {
            self.by_name.remove(name);
            // Fix up indices for entries after the removed one
            for (_, idx) in self.by_name.iter_mut() {
                if *idx > index {
                    *idx -= 1;
                }
            }
            self.attrs.remove(index);
        }
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    fn set_bool_property(&mut self, name: &str, value: bool) {
        self.bool_props.insert(name.to_string(), value);
        if self.reflect_bool_props {
            if value {
                self.set_attribute(name, "");
            } else {
                self.remove_attribute(name);
            }
        }
    }

    fn kind(&self) -> NodeKind {
        self.kind.unwrap_or(NodeKind::Element)
    }

    fn remove_first_child(&mut self) -> bool {
        if self.children.is_empty() {
            false
        } else {
            self.children.remove(0);
            true
        }
    }

    fn has_token_list(&self) -> bool {
        self.native_token_list
    }

    fn token_contains(&self, token: &str) -> bool {
        self.class_tokens().iter().any(|t| t == token)
    }

    fn token_add(&mut self, token: &str) {
        let mut tokens = self.class_tokens();
        if tokens.iter().any(|t| t == token) {
            return;
        }
        tokens.push(token.to_string());
        self.set_attribute("class", &tokens.join(" "));
    }

    fn token_remove(&mut self, token: &str) {
        let tokens: Vec<String> =
            self.class_tokens().into_iter().filter(|t| t != token).collect();
        // A native list leaves an empty attribute behind; cleanup is the
        // utility layer's contract, not the host's
        self.set_attribute("class", &tokens.join(" "));
    }

    fn add_listener(&mut self, event_type: &str, handler: &Handler, capture: bool) {
        self.listeners.push((event_type.to_string(), handler.clone(), capture));
    }

    fn remove_listener(&mut self, event_type: &str, handler: &Handler, capture: bool) {
        self.listeners
            .retain(|(t, h, c)| !(t == event_type && h.same(handler) && *c == capture));
    }
}
