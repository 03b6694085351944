//! Node capability surface
//!
//! The host environment owns the element tree; this module defines the
//! operations a node handle must expose and the thin wrappers built on them.

use std::fmt;
use std::rc::Rc;

/// Kind tag of a host node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element,
    Text,
    Comment,
}

/// Registered event callback.
///
/// Cheap to clone; removal under the standard listener tier matches by
/// pointer identity, so keep the original `Handler` around to unregister.
#[derive(Clone)]
pub struct Handler(Rc<dyn Fn()>);

impl Handler {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the callback. Dispatch is host business; this exists for
    /// reference hosts and tests.
    pub fn invoke(&self) {
        (self.0)()
    }

    /// Identity comparison (same registration, not same code).
    pub fn same(&self, other: &Handler) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// Operations a host node handle exposes.
///
/// Attribute methods are mandatory. The token-list methods model an optional
/// native class-list capability: `has_token_list` is the probe, and the
/// defaults stand for "capability absent". No method validates its inputs;
/// a malformed handle fails however the host fails.
pub trait NodeOps {
    /// Attribute value, if the attribute is present.
    fn attribute(&self, name: &str) -> Option<&str>;

    fn set_attribute(&mut self, name: &str, value: &str);

    fn remove_attribute(&mut self, name: &str);

    fn has_attribute(&self, name: &str) -> bool;

    /// Assign a boolean property on the node object itself. Hosts differ on
    /// whether this surfaces as a real attribute; `set_attr` compensates.
    fn set_bool_property(&mut self, name: &str, value: bool);

    fn kind(&self) -> NodeKind;

    /// Remove the node's first child. Returns false once there is none.
    fn remove_first_child(&mut self) -> bool;

    /// Probe for a native class token list.
    fn has_token_list(&self) -> bool {
        false
    }

    fn token_contains(&self, token: &str) -> bool {
        let _ = token;
        false
    }

    fn token_add(&mut self, token: &str) {
        let _ = token;
    }

    fn token_remove(&mut self, token: &str) {
        let _ = token;
    }

    /// Standard listener registration, capture flag included.
    fn add_listener(&mut self, event_type: &str, handler: &Handler, capture: bool);

    /// Standard listener removal; must receive the registered `Handler`.
    fn remove_listener(&mut self, event_type: &str, handler: &Handler, capture: bool);
}

/// Is this an element node?
pub fn is_element(node: &impl NodeOps) -> bool {
    node.kind() == NodeKind::Element
}

/// Is this a text node?
pub fn is_text(node: &impl NodeOps) -> bool {
    node.kind() == NodeKind::Text
}

/// Remove every child of the node.
pub fn empty(node: &mut impl NodeOps) {
    while node.remove_first_child() {}
}

/// Register a listener through the standard capability. No fallback here;
/// the event crate carries the legacy chain.
pub fn add_event(node: &mut impl NodeOps, event_type: &str, handler: &Handler, capture: bool) {
    node.add_listener(event_type, handler, capture);
}

/// Remove a listener registered with [`add_event`].
pub fn remove_event(node: &mut impl NodeOps, event_type: &str, handler: &Handler, capture: bool) {
    node.remove_listener(event_type, handler, capture);
}
