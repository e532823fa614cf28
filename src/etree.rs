//! Element Tree (etree) view over `dom_query` nodes.
//!
//! The scoring model reasons about elements using the lxml text/tail model:
//! - **Text**: text content BEFORE the first child element
//! - **Tail**: text content AFTER the element's closing tag, up to the next
//!   element sibling
//!
//! ```html
//! <div>
//!   TEXT HERE          <!-- This is div's "text" -->
//!   <span>inner</span>
//!   TAIL HERE          <!-- This is span's "tail" -->
//! </div>
//! ```
//!
//! In the DOM, text and tail are ordinary text-node siblings, so detaching
//! an element node leaves its tail in place. Removal through [`drop_tree`]
//! therefore always keeps the tail attached to the preceding sibling or the
//! parent, matching lxml `drop_tree` semantics.

use dom_query::NodeRef;

/// Lowercase tag name of an element node, `None` for text, comments and
/// other non-element nodes.
#[must_use]
pub fn tag(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|name| name.to_ascii_lowercase())
}

/// Text preceding the first child element.
///
/// Comment nodes are skipped; their content is never part of the text.
#[must_use]
pub fn text(node: &NodeRef) -> String {
    let mut out = String::new();
    for child in node.children() {
        if child.is_element() {
            break;
        }
        if child.is_text() {
            out.push_str(&child.text());
        }
    }
    out
}

/// Text following the element, up to its next element sibling.
#[must_use]
pub fn tail(node: &NodeRef) -> String {
    let mut out = String::new();
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            break;
        }
        if s.is_text() {
            out.push_str(&s.text());
        }
        sibling = s.next_sibling();
    }
    out
}

/// Element children in document order.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

/// Detach an element and its subtree, keeping its tail text in the tree.
pub fn drop_tree(node: &NodeRef) {
    node.remove_from_parent();
}

/// Maximum element nesting below `root` (the root itself is depth 0).
#[must_use]
pub fn max_depth(root: &NodeRef) -> usize {
    let mut deepest = 0;
    let mut stack = vec![(*root, 0_usize)];
    while let Some((node, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        for child in element_children(&node) {
            stack.push((child, depth + 1));
        }
    }
    deepest
}
