//! Class token set
//!
//! Treats the `class` attribute as a set of whitespace-delimited tokens.
//! Uses the host's native token list when the probe succeeds; otherwise
//! falls back to string-level search with space padding, so a token never
//! matches inside a longer token.

use crate::attr::{get_attr, remove_attr, set_attr};
use crate::node::NodeOps;

fn padded(token: &str) -> String {
    format!(" {} ", token)
}

/// Does the node carry `token` in its class set?
pub fn has_class(node: &impl NodeOps, token: &str) -> bool {
    if node.has_token_list() {
        return node.token_contains(token);
    }

    padded(&get_attr(node, "class")).contains(&padded(token))
}

/// Add `token` to the class set. Empty tokens and duplicates are no-ops.
pub fn add_class(node: &mut impl NodeOps, token: &str) {
    if token.is_empty() || has_class(node, token) {
        return;
    }

    if node.has_token_list() {
        node.token_add(token);
        return;
    }

    let current = padded(&get_attr(node, "class"));
    if !current.contains(&padded(token)) {
        let mut next = current;
        next.push_str(token);
        set_attr(node, "class", next.trim());
    }
}

/// Remove `token` from the class set. Empty or absent tokens are no-ops.
/// When the last token goes, the `class` attribute goes with it.
pub fn remove_class(node: &mut impl NodeOps, token: &str) {
    if token.is_empty() || !has_class(node, token) {
        return;
    }

    if node.has_token_list() {
        node.token_remove(token);
    } else {
        let target = padded(token);
        let mut current = padded(&get_attr(node, "class"));

        // Loop covers accidental duplicate tokens
        while current.contains(&target) {
            current = current.replace(&target, " ");
        }

        set_attr(node, "class", current.trim());
    }

    if get_attr(node, "class").is_empty() {
        tracing::trace!("class set empty, dropping attribute");
        remove_attr(node, "class");
    }
}
