//! Whole-pipeline tests through the format layer: Editor.js JSON ⇄ the
//! tree ⇄ markdown text, driven via the registry the way the CLI drives it.

use blockdown::model::mdast::Node;
use blockdown::{Format, FormatRegistry};

const KITCHEN_SINK: &str = r#"{
  "time": 1625756954764,
  "blocks": [
    { "id": "1", "type": "header", "data": { "text": "Editor.js to MDAST Example", "level": 1 } },
    { "id": "2", "type": "paragraph", "data": { "text": "A simple example document." } },
    {
      "id": "3",
      "type": "list",
      "data": {
        "style": "unordered",
        "items": [
          "It works with paragraphs",
          { "content": "And nested lists", "items": ["like this one"] }
        ]
      }
    },
    { "id": "4", "type": "code", "data": { "code": "let x = 1;", "language": "javascript" } },
    { "id": "5", "type": "quote", "data": { "text": "It works!", "caption": "Happy Developer" } },
    { "id": "6", "type": "delimiter", "data": {} },
    { "id": "7", "type": "paragraph", "data": { "text": "The end." } }
  ],
  "version": "2.22.2"
}"#;

#[test]
fn editorjs_to_markdown_renders_every_block() {
    let registry = FormatRegistry::default();
    let tree = registry.parse(KITCHEN_SINK, "editorjs").unwrap();
    let markdown = registry.serialize(&tree, "markdown").unwrap();

    assert!(markdown.contains("# Editor.js to MDAST Example"));
    assert!(markdown.contains("A simple example document."));
    assert!(markdown.contains("- It works with paragraphs"));
    assert!(markdown.contains("And nested lists"));
    assert!(markdown.contains("like this one"));
    assert!(markdown.contains("```javascript"));
    assert!(markdown.contains("> It works!"));
    assert!(markdown.contains("— Happy Developer"));
    assert!(markdown.contains("The end."));
}

#[test]
fn markdown_to_editorjs_recovers_block_types() {
    let registry = FormatRegistry::default();
    let markdown = "\
# Title

Intro paragraph.

- one
- two
  - two point one

```rust
fn main() {}
```

> A quote
>
> — Author

---
";

    let tree = registry.parse(markdown, "markdown").unwrap();
    let json = registry.serialize(&tree, "editorjs").unwrap();
    let saved: serde_json::Value = serde_json::from_str(&json).unwrap();

    let kinds: Vec<&str> = saved["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|block| block["type"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec!["header", "paragraph", "list", "code", "quote", "delimiter"]
    );

    let list = &saved["blocks"][2]["data"];
    assert_eq!(list["style"], "unordered");
    assert_eq!(list["items"][0], "one");
    assert_eq!(list["items"][1]["content"], "two");
    assert_eq!(list["items"][1]["items"][0], "two point one");

    let quote = &saved["blocks"][4]["data"];
    assert_eq!(quote["text"], "A quote");
    assert_eq!(quote["caption"], "Author");
}

#[test]
fn markdown_text_survives_a_full_trip_through_blocks() {
    let registry = FormatRegistry::default();

    let tree = registry.parse(KITCHEN_SINK, "editorjs").unwrap();
    let markdown = registry.serialize(&tree, "markdown").unwrap();

    // Back through the other side of the pipeline.
    let reparsed = registry.parse(&markdown, "markdown").unwrap();
    let json = registry.serialize(&reparsed, "editorjs").unwrap();
    let saved: serde_json::Value = serde_json::from_str(&json).unwrap();

    let blocks = saved["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 7);
    assert_eq!(blocks[0]["data"]["text"], "Editor.js to MDAST Example");
    assert_eq!(blocks[2]["data"]["items"][1]["content"], "And nested lists");
    assert_eq!(blocks[4]["data"]["caption"], "Happy Developer");
}

#[test]
fn mdast_format_bridges_to_external_tooling_shape() {
    let format = blockdown::formats::MdastFormat;
    let registry = FormatRegistry::default();

    let tree = registry.parse("## Section\n\ntext\n", "markdown").unwrap();
    let json = format.serialize(&tree).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["type"], "root");
    assert_eq!(value["children"][0]["type"], "heading");
    assert_eq!(value["children"][0]["depth"], 2);
    assert_eq!(value["children"][1]["children"][0]["value"], "text");

    let back = format.parse(&json).unwrap();
    assert_eq!(
        back.children[1],
        Node::paragraph("text")
    );
}
