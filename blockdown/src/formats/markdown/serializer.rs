//! Markdown serialization (tree → Markdown text export)
//!
//! Pipeline: tree → comrak AST → Markdown string

use crate::convert::diagnostics::Diagnostic;
use crate::convert::text::text_content;
use crate::error::ConvertError;
use crate::model::mdast::{Node, Root};
use comrak::nodes::{
    Ast, AstNode, ListDelimType, ListType, NodeCodeBlock, NodeHeading, NodeLink, NodeList,
    NodeValue,
};
use comrak::{format_commonmark, Arena, ComrakOptions};
use std::cell::RefCell;

/// Serialize a tree to Markdown text, reporting skipped nodes.
pub fn serialize_markdown(
    tree: &Root,
    width: usize,
) -> Result<(String, Vec<Diagnostic>), ConvertError> {
    let arena = Arena::new();
    let root = ast(&arena, NodeValue::Document);

    let mut diagnostics = Vec::new();
    for child in &tree.children {
        append_block(&arena, root, child, &mut diagnostics);
    }

    let mut options = ComrakOptions::default();
    options.render.width = width;

    let mut output = Vec::new();
    format_commonmark(root, &options, &mut output)
        .map_err(|e| ConvertError::SerializationError(format!("comrak failed: {e}")))?;

    let markdown = String::from_utf8(output)
        .map_err(|e| ConvertError::SerializationError(format!("UTF-8 conversion failed: {e}")))?;

    Ok((markdown, diagnostics))
}

fn ast<'a>(arena: &'a Arena<AstNode<'a>>, value: NodeValue) -> &'a AstNode<'a> {
    arena.alloc(AstNode::new(RefCell::new(Ast::new(value, (0, 0).into()))))
}

fn append_block<'a>(
    arena: &'a Arena<AstNode<'a>>,
    parent: &'a AstNode<'a>,
    node: &Node,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match node {
        Node::Paragraph { children } => {
            let paragraph = ast(arena, NodeValue::Paragraph);
            parent.append(paragraph);
            for child in children {
                paragraph.append(ast(arena, NodeValue::Text(text_content(child))));
            }
        }

        Node::Heading { depth, children } => {
            let heading = ast(
                arena,
                NodeValue::Heading(NodeHeading {
                    level: (*depth).clamp(1, 6),
                    setext: false,
                }),
            );
            parent.append(heading);
            for child in children {
                heading.append(ast(arena, NodeValue::Text(text_content(child))));
            }
        }

        Node::Text { value } => {
            let paragraph = ast(arena, NodeValue::Paragraph);
            parent.append(paragraph);
            paragraph.append(ast(arena, NodeValue::Text(value.clone())));
        }

        Node::List { ordered, children } => {
            append_list(arena, parent, *ordered, children, diagnostics);
        }

        Node::Code { lang, value } => {
            let mut literal = value.clone();
            if !literal.ends_with('\n') {
                literal.push('\n');
            }
            let code = ast(
                arena,
                NodeValue::CodeBlock(NodeCodeBlock {
                    fenced: true,
                    fence_char: b'`',
                    fence_length: 3,
                    fence_offset: 0,
                    info: lang.clone().unwrap_or_default(),
                    literal,
                }),
            );
            parent.append(code);
        }

        Node::Image { url, alt, title } => {
            let paragraph = ast(arena, NodeValue::Paragraph);
            parent.append(paragraph);
            let image = ast(
                arena,
                NodeValue::Image(NodeLink {
                    url: url.clone(),
                    title: title.clone(),
                }),
            );
            paragraph.append(image);
            image.append(ast(arena, NodeValue::Text(alt.clone())));
        }

        Node::Blockquote { children } => {
            let quote = ast(arena, NodeValue::BlockQuote);
            parent.append(quote);
            for child in children {
                append_block(arena, quote, child, diagnostics);
            }
        }

        Node::ThematicBreak => {
            parent.append(ast(arena, NodeValue::ThematicBreak));
        }

        Node::Root(_) | Node::ListItem { .. } | Node::Other(_) => {
            diagnostics.push(Diagnostic::new(format!(
                "node type `{}` has no markdown rendering; node skipped",
                node.type_name()
            )));
        }
    }
}

fn append_list<'a>(
    arena: &'a Arena<AstNode<'a>>,
    parent: &'a AstNode<'a>,
    ordered: bool,
    children: &[Node],
    diagnostics: &mut Vec<Diagnostic>,
) {
    let list = ast(arena, NodeValue::List(list_attrs(ordered)));
    parent.append(list);

    for child in children {
        let item = ast(arena, NodeValue::Item(list_attrs(ordered)));
        list.append(item);

        let item_children = child.children().unwrap_or(&[]);
        for grandchild in item_children {
            match grandchild {
                Node::List {
                    ordered: nested_ordered,
                    children: nested,
                } => append_list(arena, item, *nested_ordered, nested, diagnostics),
                other => append_block(arena, item, other, diagnostics),
            }
        }
    }
}

fn list_attrs(ordered: bool) -> NodeList {
    NodeList {
        list_type: if ordered {
            ListType::Ordered
        } else {
            ListType::Bullet
        },
        marker_offset: 0,
        padding: 0,
        start: 1,
        delimiter: ListDelimType::Period,
        bullet_char: b'-',
        tight: true,
    }
}
