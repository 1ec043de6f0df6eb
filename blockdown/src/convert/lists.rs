//! The list nesting transform.
//!
//! The one place in the converter where recursion and depth-sensitive
//! decisions occur. The two sides represent nesting differently:
//!
//! - block side: an item is either a bare string, or an object whose
//!   optional `items` array holds the sub-list;
//! - tree side: an item is always a `listItem` node holding one paragraph
//!   for its own text, followed by at most one nested `list` node.
//!
//! Going block → tree, the top-level list's style flag is stamped on every
//! nested `list` node the recursion produces; nested levels have no flag of
//! their own on the block side. Going tree → block, only the top `list`
//! node's flag can be kept (the block model stores style once), so nested
//! flags do not survive the trip. The asymmetry is deliberate and pinned by
//! tests.

use crate::convert::text::text_content;
use crate::model::blocks::{ListItem, NestedItem};
use crate::model::mdast::Node;

/// Build a `list` tree node from block-side items.
///
/// `ordered` is the top-level list's style flag, threaded unchanged through
/// every recursion level.
pub fn items_to_list(items: &[ListItem], ordered: bool) -> Node {
    Node::List {
        ordered,
        children: items
            .iter()
            .map(|item| item_to_list_item(item, ordered))
            .collect(),
    }
}

fn item_to_list_item(item: &ListItem, ordered: bool) -> Node {
    // An empty content string still gets its paragraph with an empty text
    // leaf; an empty or absent `items` array never produces a list node.
    let mut children = vec![Node::paragraph(item.content())];
    if let Some(nested) = item.nested() {
        children.push(items_to_list(nested, ordered));
    }
    Node::ListItem { children }
}

/// Rebuild block-side items from a `list` node's children.
pub fn items_from_list_children(children: &[Node]) -> Vec<ListItem> {
    children.iter().map(item_from_node).collect()
}

fn item_from_node(node: &Node) -> ListItem {
    let children = node.children().unwrap_or(&[]);
    match children {
        [] => ListItem::Text(String::new()),
        // Exactly one child: a leaf item, emitted as a bare string.
        [only] => ListItem::Text(text_content(only)),
        [first, rest @ ..] => {
            let nested = rest.iter().find_map(|child| match child {
                Node::List { children, .. } => Some(children),
                _ => None,
            });
            match nested {
                Some(nested) => ListItem::Nested(NestedItem {
                    content: text_content(first),
                    items: items_from_list_children(nested),
                }),
                // Multiple children but no sub-list: keep all the text so
                // nothing is silently lost, still as a leaf item.
                None => ListItem::Text(text_content(node)),
            }
        }
    }
}
