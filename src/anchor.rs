//! Hyperlink ancestry detection.

use dom_query::NodeRef;

use crate::tag::{tag_of, Tag};

/// Whether any strict ancestor of `node` is an `<a>` element.
///
/// Walks parent links up to the root. Relies on the tree being acyclic.
#[must_use]
pub fn is_in_anchor(node: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if tag_of(&parent) == Some(Tag::A) {
            return true;
        }
        current = parent.parent();
    }
    false
}
