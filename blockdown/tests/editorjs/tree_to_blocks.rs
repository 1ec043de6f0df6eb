//! Tree → block conversion, with the impure collaborators pinned.

use crate::common::{convert_children, FIXED_TIME};
use blockdown::mdast_to_editorjs;
use blockdown::model::blocks::Block;
use blockdown::model::mdast::{Node, Root};
use blockdown::{ConvertError, EDITOR_VERSION};
use serde_json::json;

#[test]
fn converts_a_paragraph_node() {
    let (doc, _) = convert_children(vec![Node::paragraph("Hello, world!")]);

    assert_eq!(doc.time, FIXED_TIME);
    assert_eq!(doc.version, EDITOR_VERSION);
    assert_eq!(
        serde_json::to_value(&doc.blocks).unwrap(),
        json!([
            { "id": "test-id-1", "type": "paragraph", "data": { "text": "Hello, world!" } }
        ])
    );
}

#[test]
fn converts_a_heading_node() {
    let (doc, _) = convert_children(vec![Node::Heading {
        depth: 2,
        children: vec![Node::text("This is a heading")],
    }]);

    assert_eq!(
        serde_json::to_value(&doc.blocks).unwrap(),
        json!([
            {
                "id": "test-id-1",
                "type": "header",
                "data": { "text": "This is a heading", "level": 2 }
            }
        ])
    );
}

#[test]
fn converts_a_flat_list_node_to_string_items() {
    let (doc, _) = convert_children(vec![Node::List {
        ordered: true,
        children: vec![
            Node::ListItem {
                children: vec![Node::paragraph("First item")],
            },
            Node::ListItem {
                children: vec![Node::paragraph("Second item")],
            },
        ],
    }]);

    assert_eq!(
        serde_json::to_value(&doc.blocks).unwrap(),
        json!([
            {
                "id": "test-id-1",
                "type": "list",
                "data": { "style": "ordered", "items": ["First item", "Second item"] }
            }
        ])
    );
}

#[test]
fn converts_code_image_and_thematic_break() {
    let (doc, _) = convert_children(vec![
        Node::Code {
            lang: Some("javascript".to_string()),
            value: "let x = 1;".to_string(),
        },
        Node::Image {
            url: "https://a/img.png".to_string(),
            alt: "cap".to_string(),
            title: "title".to_string(),
        },
        Node::ThematicBreak,
    ]);

    assert_eq!(
        serde_json::to_value(&doc.blocks).unwrap(),
        json!([
            {
                "id": "test-id-1",
                "type": "code",
                "data": { "code": "let x = 1;", "language": "javascript" }
            },
            {
                "id": "test-id-2",
                "type": "image",
                "data": {
                    "url": "https://a/img.png",
                    "caption": "cap",
                    "withBorder": false,
                    "withBackground": false,
                    "stretched": false
                }
            },
            { "id": "test-id-3", "type": "delimiter", "data": {} }
        ])
    );
}

#[test]
fn recovers_quote_text_and_caption_exactly() {
    let (doc, _) = convert_children(vec![Node::Blockquote {
        children: vec![Node::paragraph("A quote"), Node::paragraph("— Author")],
    }]);

    assert_eq!(
        serde_json::to_value(&doc.blocks).unwrap(),
        json!([
            {
                "id": "test-id-1",
                "type": "quote",
                "data": { "text": "A quote", "caption": "Author", "alignment": "left" }
            }
        ])
    );
}

#[test]
fn rejects_a_non_root_tree() {
    let result = mdast_to_editorjs(&Node::Paragraph { children: vec![] });
    assert!(matches!(result, Err(ConvertError::InvalidInput(_))));
}

#[test]
fn drops_unknown_node_types_without_error() {
    let html: Node = serde_json::from_value(json!({ "type": "html", "value": "<hr>" })).unwrap();
    let (doc, diagnostics) = convert_children(vec![Node::paragraph("kept"), html]);

    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn header_round_trips_through_both_engines() {
    // {type:"header", data:{text:"Hi", level:2}} → heading depth 2 → back again,
    // id and time elided from the comparison.
    let original: Block = serde_json::from_value(json!({
        "id": "1",
        "type": "header",
        "data": { "text": "Hi", "level": 2 }
    }))
    .unwrap();

    let tree = blockdown::editorjs_to_mdast(&blockdown::model::blocks::BlockDocument {
        time: FIXED_TIME,
        blocks: vec![original.clone()],
        version: "2.22.2".to_string(),
    });
    assert_eq!(
        tree.children,
        vec![Node::Heading {
            depth: 2,
            children: vec![Node::text("Hi")],
        }]
    );

    let (back, _) = convert_children(tree.children);
    assert_eq!(back.blocks[0].data, original.data);
}

#[test]
fn quote_round_trips_caption_through_both_engines() {
    let quote: Block = serde_json::from_value(json!({
        "id": "1",
        "type": "quote",
        "data": { "text": "A quote", "caption": "Author", "alignment": "left" }
    }))
    .unwrap();

    let tree = blockdown::editorjs_to_mdast(&blockdown::model::blocks::BlockDocument {
        time: FIXED_TIME,
        blocks: vec![quote.clone()],
        version: "2.22.2".to_string(),
    });
    let (back, _) = convert_children(tree.children);

    assert_eq!(back.blocks[0].data, quote.data);
}

#[test]
fn empty_root_produces_empty_blocks() {
    let (doc, diagnostics) = convert_children(vec![]);
    assert!(doc.blocks.is_empty());
    assert!(diagnostics.is_empty());

    let doc = mdast_to_editorjs(&Node::Root(Root::default())).unwrap();
    assert!(doc.blocks.is_empty());
}
