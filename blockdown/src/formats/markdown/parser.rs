//! Markdown parsing (Markdown text → tree import)
//!
//! Pipeline: Markdown string → comrak AST → tree

use crate::convert::diagnostics::Diagnostic;
use crate::error::ConvertError;
use crate::model::mdast::{Node, Root};
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

/// Parse Markdown text into a tree, reporting skipped constructs.
pub fn parse_markdown(source: &str) -> Result<(Root, Vec<Diagnostic>), ConvertError> {
    let arena = Arena::new();
    let options = ComrakOptions::default();
    let root = parse_document(&arena, source, &options);

    let mut diagnostics = Vec::new();
    let children = root
        .children()
        .filter_map(|child| block_node(child, &mut diagnostics))
        .collect();

    Ok((Root { children }, diagnostics))
}

/// Convert one block-level comrak node.
fn block_node<'a>(node: &'a AstNode<'a>, diagnostics: &mut Vec<Diagnostic>) -> Option<Node> {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Paragraph => Some(paragraph_node(node)),

        NodeValue::Heading(heading) => Some(Node::Heading {
            depth: heading.level,
            children: vec![Node::text(collect_text(node))],
        }),

        NodeValue::List(list) => {
            let ordered = matches!(list.list_type, ListType::Ordered);
            Some(list_node(node, ordered, diagnostics))
        }

        NodeValue::CodeBlock(code_block) => {
            let lang = if code_block.info.is_empty() {
                None
            } else {
                Some(code_block.info.clone())
            };
            let value = code_block
                .literal
                .strip_suffix('\n')
                .unwrap_or(&code_block.literal)
                .to_string();
            Some(Node::Code { lang, value })
        }

        NodeValue::BlockQuote => Some(Node::Blockquote {
            children: node
                .children()
                .filter_map(|child| block_node(child, diagnostics))
                .collect(),
        }),

        NodeValue::ThematicBreak => Some(Node::ThematicBreak),

        _ => {
            diagnostics.push(Diagnostic::new(
                "markdown construct with no tree representation skipped",
            ));
            None
        }
    }
}

/// A paragraph usually becomes a paragraph with one text leaf; a paragraph
/// holding nothing but an image becomes an image node, matching the block
/// editor's notion of an image as standalone content.
fn paragraph_node<'a>(node: &'a AstNode<'a>) -> Node {
    let children: Vec<_> = node.children().collect();
    if children.len() == 1 {
        if let NodeValue::Image(link) = &children[0].data.borrow().value {
            return Node::Image {
                url: link.url.clone(),
                alt: collect_text(children[0]),
                title: link.title.clone(),
            };
        }
    }
    Node::paragraph(collect_text(node))
}

fn list_node<'a>(node: &'a AstNode<'a>, ordered: bool, diagnostics: &mut Vec<Diagnostic>) -> Node {
    Node::List {
        ordered,
        children: node
            .children()
            .map(|item| list_item_node(item, diagnostics))
            .collect(),
    }
}

fn list_item_node<'a>(node: &'a AstNode<'a>, diagnostics: &mut Vec<Diagnostic>) -> Node {
    let mut children = Vec::new();
    for child in node.children() {
        let child_data = child.data.borrow();
        match &child_data.value {
            NodeValue::Paragraph => children.push(Node::paragraph(collect_text(child))),
            NodeValue::List(list) => {
                let ordered = matches!(list.list_type, ListType::Ordered);
                children.push(list_node(child, ordered, diagnostics));
            }
            _ => {
                let text = collect_text(child);
                if !text.is_empty() {
                    children.push(Node::paragraph(text));
                }
            }
        }
    }
    Node::ListItem { children }
}

/// Collect the plain text of a comrak subtree, flattening inline formatting.
fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut output = String::new();
    collect_text_into(node, &mut output);
    output
}

fn collect_text_into<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => output.push_str(text),
        NodeValue::Code(code) => output.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => output.push(' '),
        _ => {
            for child in node.children() {
                collect_text_into(child, output);
            }
        }
    }
}
