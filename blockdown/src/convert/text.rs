//! Text extraction shared by the flat rewrite rules and the list transform.

use crate::model::mdast::Node;
use serde_json::{Map, Value};

/// Collect the plain text of a node: a text leaf's own value, else the
/// in-order concatenation (no separator) of its children's text, else the
/// node's own `value` if it has one, else the empty string.
///
/// Pure depth-first fold; order-preserving; no side effects.
pub fn text_content(node: &Node) -> String {
    if let Node::Text { value } = node {
        return value.clone();
    }
    if let Node::Other(map) = node {
        return raw_text(map);
    }
    match node.children() {
        Some(children) if !children.is_empty() => children.iter().map(text_content).collect(),
        _ => node.value().unwrap_or_default().to_string(),
    }
}

/// Same fold over the raw object shape of an unrecognized node.
fn raw_text(map: &Map<String, Value>) -> String {
    if map.get("type").and_then(Value::as_str) == Some("text") {
        return map
            .get("value")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
    }
    if let Some(children) = map.get("children").and_then(Value::as_array) {
        if !children.is_empty() {
            return children
                .iter()
                .filter_map(Value::as_object)
                .map(raw_text)
                .collect();
        }
    }
    map.get("value")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
