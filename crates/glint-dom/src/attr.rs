//! Attribute access
//!
//! Attribute manipulation: get, set, remove, has.

use crate::node::NodeOps;

/// Value accepted by [`set_attr`].
///
/// Mirrors the loose host convention: absent/false removes the attribute,
/// true marks boolean presence, anything else is a plain string write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Remove the attribute.
    Remove,
    /// Boolean presence marker.
    Flag,
    /// Plain string value.
    Text(String),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        if value { AttrValue::Flag } else { AttrValue::Remove }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<Option<&str>> for AttrValue {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(s) => AttrValue::Text(s.to_string()),
            None => AttrValue::Remove,
        }
    }
}

/// Attribute value, or `""` when absent. Never a sentinel.
pub fn get_attr(node: &impl NodeOps, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}

/// Is the attribute present?
pub fn has_attr(node: &impl NodeOps, name: &str) -> bool {
    node.has_attribute(name)
}

/// Remove the attribute.
pub fn remove_attr(node: &mut impl NodeOps, name: &str) {
    node.remove_attribute(name);
}

/// Set an attribute.
///
/// `Remove` drops the attribute. `Flag` assigns a boolean property and, if
/// the host did not surface it as a real attribute, force-writes an
/// empty-string attribute so presence stays queryable. `Text` writes only
/// when the value actually changes.
pub fn set_attr(node: &mut impl NodeOps, name: &str, value: impl Into<AttrValue>) {
    match value.into() {
        AttrValue::Remove => remove_attr(node, name),
        AttrValue::Flag => {
            node.set_bool_property(name, true);

            if !has_attr(node, name) {
                tracing::debug!("boolean property {} not surfaced, writing empty marker", name);
                node.set_attribute(name, "");
            }
        }
        AttrValue::Text(value) => {
            if value != get_attr(node, name) {
                node.set_attribute(name, &value);
            }
        }
    }
}
