//! Nested lists: the scenarios that exercise the recursive transform at
//! depth, ported against real saved-data shapes.

use crate::common::convert_children;
use blockdown::editorjs_to_mdast;
use blockdown::model::blocks::BlockDocument;
use blockdown::model::mdast::Node;
use serde_json::{json, Value};

fn list_doc(data: Value) -> BlockDocument {
    serde_json::from_value(json!({
        "time": 1625756954764u64,
        "blocks": [ { "id": "1", "type": "list", "data": data } ],
        "version": "2.22.2"
    }))
    .expect("fixture document deserializes")
}

/// Walk one level down: the sub-list of the item at `index`.
fn sub_list(list: &Node, index: usize) -> &Node {
    let Node::List { children, .. } = list else {
        panic!("expected list, got {}", list.type_name());
    };
    let Node::ListItem { children: item } = &children[index] else {
        panic!("expected listItem");
    };
    assert_eq!(item.len(), 2, "item should carry a paragraph and a sub-list");
    assert_eq!(item[0].type_name(), "paragraph");
    &item[1]
}

#[test]
fn converts_deeply_nested_lists_level_by_level() {
    let tree = editorjs_to_mdast(&list_doc(json!({
        "style": "unordered",
        "items": [
            "Level 1 - Item 1",
            {
                "content": "Level 1 - Item 2 with nested list",
                "items": [
                    { "content": "Level 2 - Item 1" },
                    {
                        "content": "Level 2 - Item 2 with deeper nesting",
                        "items": [
                            { "content": "Level 3 - Item 1" },
                            {
                                "content": "Level 3 - Item 2 with deepest nesting",
                                "items": [
                                    { "content": "Level 4 - Item 1" },
                                    { "content": "Level 4 - Item 2" }
                                ]
                            },
                            { "content": "Level 3 - Item 3" }
                        ]
                    },
                    { "content": "Level 2 - Item 3" }
                ]
            },
            "Level 1 - Item 3"
        ]
    })));

    assert_eq!(tree.children.len(), 1);
    let main_list = &tree.children[0];
    let Node::List { ordered, children } = main_list else {
        panic!("expected list");
    };
    assert!(!*ordered);
    assert_eq!(children.len(), 3);

    let level2 = sub_list(main_list, 1);
    let Node::List { children, .. } = level2 else {
        panic!("expected list");
    };
    assert_eq!(children.len(), 3);

    let level3 = sub_list(level2, 1);
    let Node::List { children, .. } = level3 else {
        panic!("expected list");
    };
    assert_eq!(children.len(), 3);

    let level4 = sub_list(level3, 1);
    let Node::List { children, .. } = level4 else {
        panic!("expected list");
    };
    assert_eq!(children.len(), 2);
}

#[test]
fn nested_lists_inherit_the_top_level_style() {
    let tree = editorjs_to_mdast(&list_doc(json!({
        "style": "ordered",
        "items": [
            "First ordered item",
            {
                "content": "Second ordered item with sublist",
                "items": [
                    { "content": "Subitem 1" },
                    {
                        "content": "Subitem 2 with sub-sublist",
                        "items": [ { "content": "Sub-subitem" } ]
                    }
                ]
            }
        ]
    })));

    let main_list = &tree.children[0];
    let Node::List { ordered, .. } = main_list else {
        panic!("expected list");
    };
    assert!(*ordered);

    // Every nesting level carries the original top-level flag.
    let level2 = sub_list(main_list, 1);
    assert!(matches!(level2, Node::List { ordered: true, .. }));
    let level3 = sub_list(level2, 1);
    assert!(matches!(level3, Node::List { ordered: true, .. }));
}

#[test]
fn handles_multiple_consecutive_nested_lists() {
    let tree = editorjs_to_mdast(&list_doc(json!({
        "style": "unordered",
        "items": [
            "Simple item",
            {
                "content": "Item with nested list 1",
                "items": [ { "content": "Nested item 1.1" }, { "content": "Nested item 1.2" } ]
            },
            {
                "content": "Item with nested list 2",
                "items": [ { "content": "Nested item 2.1" }, { "content": "Nested item 2.2" } ]
            },
            "Another simple item"
        ]
    })));

    let main_list = &tree.children[0];
    let Node::List { children, .. } = main_list else {
        panic!("expected list");
    };
    assert_eq!(children.len(), 4);

    for index in [1, 2] {
        let nested = sub_list(main_list, index);
        let Node::List { children, .. } = nested else {
            panic!("expected list");
        };
        assert_eq!(children.len(), 2);
    }
}

#[test]
fn empty_nested_items_produce_no_list_node() {
    let tree = editorjs_to_mdast(&list_doc(json!({
        "style": "unordered",
        "items": [
            "Plain item",
            { "content": "Item with empty nested list", "items": [] },
            {
                "content": "Item with nested list containing empty item",
                "items": [ { "content": "" } ]
            }
        ]
    })));

    let Node::List { children, .. } = &tree.children[0] else {
        panic!("expected list");
    };
    assert_eq!(children.len(), 3);

    // items: [] means no second child at all.
    let Node::ListItem { children: item } = &children[1] else {
        panic!("expected listItem");
    };
    assert_eq!(item.len(), 1);

    // An empty content string still yields a paragraph with an empty leaf.
    let nested = sub_list(&tree.children[0], 2);
    let Node::List { children: nested_items, .. } = nested else {
        panic!("expected list");
    };
    assert_eq!(
        nested_items[0],
        Node::ListItem {
            children: vec![Node::paragraph("")],
        }
    );
}

#[test]
fn rebuilds_deeply_nested_object_chain_from_a_tree() {
    fn item(text: &str) -> Node {
        Node::ListItem {
            children: vec![Node::paragraph(text)],
        }
    }

    fn item_with_list(text: &str, ordered: bool, children: Vec<Node>) -> Node {
        Node::ListItem {
            children: vec![Node::paragraph(text), Node::List { ordered, children }],
        }
    }

    let (doc, _) = convert_children(vec![Node::List {
        ordered: false,
        children: vec![
            item("Level 1 - Item 1"),
            item_with_list(
                "Level 1 - Item 2 with nested list",
                true,
                vec![
                    item("Level 2 - Item 1"),
                    item_with_list(
                        "Level 2 - Item 2 with deeper nesting",
                        false,
                        vec![
                            item("Level 3 - Item 1"),
                            item_with_list(
                                "Level 3 - Item 2 with deepest nesting",
                                true,
                                vec![item("Level 4 - Item 1"), item("Level 4 - Item 2")],
                            ),
                        ],
                    ),
                ],
            ),
            item("Level 1 - Item 3"),
        ],
    }]);

    let data = serde_json::to_value(&doc.blocks[0]).unwrap()["data"].clone();
    assert_eq!(data["style"], "unordered");

    let items = data["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    // Leaf items come back as bare strings.
    assert_eq!(items[0], json!("Level 1 - Item 1"));
    assert_eq!(items[2], json!("Level 1 - Item 3"));

    let level2 = &items[1];
    assert_eq!(level2["content"], "Level 1 - Item 2 with nested list");
    assert_eq!(level2["items"][0], json!("Level 2 - Item 1"));
    let level3 = &level2["items"][1];
    assert_eq!(level3["content"], "Level 2 - Item 2 with deeper nesting");
    let level4 = &level3["items"][1];
    assert_eq!(level4["content"], "Level 3 - Item 2 with deepest nesting");
    // The one-child rule applies at every depth, so leaf items come back as
    // bare strings here too.
    assert_eq!(
        level4["items"],
        json!(["Level 4 - Item 1", "Level 4 - Item 2"])
    );
}

#[test]
fn alternating_styles_collapse_to_the_top_level_flag() {
    // Tree side alternates ordered/unordered across levels; the block model
    // stores one flag, so only the top list node's value survives.
    let (doc, _) = convert_children(vec![Node::List {
        ordered: true,
        children: vec![Node::ListItem {
            children: vec![
                Node::paragraph("outer"),
                Node::List {
                    ordered: false,
                    children: vec![Node::ListItem {
                        children: vec![Node::paragraph("inner")],
                    }],
                },
            ],
        }],
    }]);

    let data = serde_json::to_value(&doc.blocks[0]).unwrap()["data"].clone();
    assert_eq!(data["style"], "ordered");
    assert_eq!(
        data["items"],
        json!([ { "content": "outer", "items": ["inner"] } ])
    );
}

#[test]
fn complex_nested_lists_round_trip() {
    // Leaf items as bare strings at every level: the shape the reverse
    // direction produces, so the trip is an exact identity.
    let original = list_doc(json!({
        "style": "ordered",
        "items": [
            "Top level ordered item 1",
            {
                "content": "Top level ordered item 2 with sublist",
                "items": [
                    "Subitem 1",
                    {
                        "content": "Subitem 2 with sub-sublist",
                        "items": [
                            "Sub-subitem 1",
                            {
                                "content": "Sub-subitem 2 with deepest list",
                                "items": [ "Deepest item 1", "Deepest item 2" ]
                            }
                        ]
                    },
                    "Subitem 3"
                ]
            },
            "Top level ordered item 3"
        ]
    }));

    let tree = editorjs_to_mdast(&original);
    let (back, diagnostics) = convert_children(tree.children);

    assert!(diagnostics.is_empty());
    assert_eq!(back.blocks.len(), 1);
    assert_eq!(back.blocks[0].data, original.blocks[0].data);
}
