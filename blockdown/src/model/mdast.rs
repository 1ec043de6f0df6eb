//! The markdown tree model.
//!
//! A value-tree mirror of the mdast JSON shape: every node is an object with
//! a `type` tag, container nodes own an ordered `children` array, leaves
//! carry a `value` string, and a handful of tags add their own fields
//! (`depth`, `ordered`, `lang`, `url`, `alt`, `title`). The root node always
//! has fixed type `root` and never appears below the top.
//!
//! Like the block side, the wire tag is open but the in-memory union is
//! closed: unknown tags parse into [`Node::Other`] with their raw object
//! kept intact, so a tree containing them still serializes losslessly.
//! Serde goes through [`Node::from_value`] / [`Node::to_value`] so missing
//! fields can take the documented defaults (`depth` 1, `ordered` false,
//! `children` empty) instead of failing the whole tree.
//!
//! Trees are plain owned values. Parents exclusively own children; there is
//! no sharing and no cycles, so `Clone`/`PartialEq` behave structurally.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};

/// The fixed-type root of a markdown tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Root {
    pub children: Vec<Node>,
}

/// One node in the markdown tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Root(Root),
    Paragraph {
        children: Vec<Node>,
    },
    Heading {
        depth: u8,
        children: Vec<Node>,
    },
    Text {
        value: String,
    },
    List {
        ordered: bool,
        children: Vec<Node>,
    },
    ListItem {
        children: Vec<Node>,
    },
    Code {
        lang: Option<String>,
        value: String,
    },
    Image {
        url: String,
        alt: String,
        title: String,
    },
    Blockquote {
        children: Vec<Node>,
    },
    ThematicBreak,
    /// A node with a tag this crate has no typed representation for; the
    /// raw object (including its `type` key) is kept verbatim.
    Other(Map<String, Value>),
}

impl Node {
    /// Convenience constructor for a text leaf.
    pub fn text(value: impl Into<String>) -> Node {
        Node::Text {
            value: value.into(),
        }
    }

    /// Convenience constructor for a paragraph wrapping a single text leaf.
    pub fn paragraph(text: impl Into<String>) -> Node {
        Node::Paragraph {
            children: vec![Node::text(text)],
        }
    }

    /// The wire `type` tag of this node.
    pub fn type_name(&self) -> &str {
        match self {
            Node::Root(_) => "root",
            Node::Paragraph { .. } => "paragraph",
            Node::Heading { .. } => "heading",
            Node::Text { .. } => "text",
            Node::List { .. } => "list",
            Node::ListItem { .. } => "listItem",
            Node::Code { .. } => "code",
            Node::Image { .. } => "image",
            Node::Blockquote { .. } => "blockquote",
            Node::ThematicBreak => "thematicBreak",
            Node::Other(map) => map
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("unknown"),
        }
    }

    /// This node's children, for the container variants.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(root) => Some(&root.children),
            Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Blockquote { children } => Some(children),
            _ => None,
        }
    }

    /// This node's own `value` string, for the leaf variants that carry one.
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Text { value } | Node::Code { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Decode a node from its JSON object shape.
    pub fn from_value(value: Value) -> Result<Node, String> {
        let map = match value {
            Value::Object(map) => map,
            other => return Err(format!("expected a node object, got {other}")),
        };
        let tag = map
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| "node is missing a string `type` tag".to_string())?;

        let node = match tag {
            "root" => Node::Root(Root {
                children: children_from(&map)?,
            }),
            "paragraph" => Node::Paragraph {
                children: children_from(&map)?,
            },
            "heading" => Node::Heading {
                depth: map.get("depth").and_then(Value::as_u64).unwrap_or(1) as u8,
                children: children_from(&map)?,
            },
            "text" => Node::Text {
                value: string_field(&map, "value"),
            },
            "list" => Node::List {
                ordered: map.get("ordered").and_then(Value::as_bool).unwrap_or(false),
                children: children_from(&map)?,
            },
            "listItem" => Node::ListItem {
                children: children_from(&map)?,
            },
            "code" => Node::Code {
                lang: map
                    .get("lang")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                value: string_field(&map, "value"),
            },
            "image" => Node::Image {
                url: string_field(&map, "url"),
                alt: string_field(&map, "alt"),
                title: string_field(&map, "title"),
            },
            "blockquote" => Node::Blockquote {
                children: children_from(&map)?,
            },
            "thematicBreak" => Node::ThematicBreak,
            _ => Node::Other(map),
        };
        Ok(node)
    }

    /// Encode this node into its JSON object shape.
    pub fn to_value(&self) -> Value {
        match self {
            Node::Root(root) => root.to_value(),
            Node::Paragraph { children } => json!({
                "type": "paragraph",
                "children": children_to(children),
            }),
            Node::Heading { depth, children } => json!({
                "type": "heading",
                "depth": depth,
                "children": children_to(children),
            }),
            Node::Text { value } => json!({ "type": "text", "value": value }),
            Node::List { ordered, children } => json!({
                "type": "list",
                "ordered": ordered,
                "children": children_to(children),
            }),
            Node::ListItem { children } => json!({
                "type": "listItem",
                "children": children_to(children),
            }),
            Node::Code { lang, value } => json!({
                "type": "code",
                "lang": lang,
                "value": value,
            }),
            Node::Image { url, alt, title } => json!({
                "type": "image",
                "url": url,
                "alt": alt,
                "title": title,
            }),
            Node::Blockquote { children } => json!({
                "type": "blockquote",
                "children": children_to(children),
            }),
            Node::ThematicBreak => json!({ "type": "thematicBreak" }),
            Node::Other(map) => Value::Object(map.clone()),
        }
    }
}

impl Root {
    pub fn to_value(&self) -> Value {
        json!({ "type": "root", "children": children_to(&self.children) })
    }
}

fn children_from(map: &Map<String, Value>) -> Result<Vec<Node>, String> {
    match map.get("children") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| Node::from_value(item.clone()))
            .collect(),
        Some(other) => Err(format!("`children` must be an array, got {other}")),
    }
}

fn children_to(children: &[Node]) -> Vec<Value> {
    children.iter().map(Node::to_value).collect()
}

fn string_field(map: &Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Node::from_value(value).map_err(D::Error::custom)
    }
}

impl Serialize for Root {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Root {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match Node::from_value(value).map_err(D::Error::custom)? {
            Node::Root(root) => Ok(root),
            other => Err(D::Error::custom(format!(
                "expected a `root` node, got `{}`",
                other.type_name()
            ))),
        }
    }
}
