//! Block → tree engine.
//!
//! Walks the flat block list in order, rewrites each block through the
//! per-type rule for its tag, and assembles the results under a fresh root.
//! The conversion is total: a block with no rewrite rule is dropped with a
//! diagnostic, never an error, and an all-dropped (or empty) input still
//! yields a valid root with empty children.

use crate::convert::diagnostics::Diagnostic;
use crate::convert::lists::items_to_list;
use crate::model::blocks::{
    Block, BlockData, BlockDocument, CodeData, HeaderData, ImageData, QuoteData,
};
use crate::model::mdast::{Node, Root};

/// Convert an Editor.js document to a markdown tree.
///
/// Never fails; unconvertible blocks are silently omitted. Use
/// [`editorjs_to_mdast_with_diagnostics`] when the dropped-block accounting
/// matters.
pub fn editorjs_to_mdast(doc: &BlockDocument) -> Root {
    editorjs_to_mdast_with_diagnostics(doc).0
}

/// Convert an Editor.js document to a markdown tree, returning one
/// [`Diagnostic`] per dropped block.
pub fn editorjs_to_mdast_with_diagnostics(doc: &BlockDocument) -> (Root, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let children = doc
        .blocks
        .iter()
        .filter_map(|block| convert_block(block, &mut diagnostics))
        .collect();
    (Root { children }, diagnostics)
}

fn convert_block(block: &Block, diagnostics: &mut Vec<Diagnostic>) -> Option<Node> {
    match &block.data {
        BlockData::Paragraph(data) => Some(Node::paragraph(&data.text)),
        BlockData::Header(data) => Some(header_node(data)),
        BlockData::List(data) => Some(items_to_list(&data.items, data.style.is_ordered())),
        BlockData::Code(data) => Some(code_node(data)),
        BlockData::Image(data) => Some(image_node(data)),
        BlockData::Quote(data) => Some(quote_node(data)),
        BlockData::Delimiter => Some(Node::ThematicBreak),
        BlockData::Unrecognized { tag, .. } => {
            diagnostics.push(Diagnostic::new(format!(
                "no rewrite rule for block type `{tag}`; block dropped"
            )));
            None
        }
    }
}

fn header_node(data: &HeaderData) -> Node {
    Node::Heading {
        depth: data.level,
        children: vec![Node::text(&data.text)],
    }
}

fn code_node(data: &CodeData) -> Node {
    Node::Code {
        lang: if data.language.is_empty() {
            None
        } else {
            Some(data.language.clone())
        },
        value: data.code.clone(),
    }
}

fn image_node(data: &ImageData) -> Node {
    Node::Image {
        url: data.source_url().to_string(),
        alt: data.caption.clone(),
        title: data.caption.clone(),
    }
}

fn quote_node(data: &QuoteData) -> Node {
    let mut children = Vec::new();
    if !data.text.is_empty() {
        children.push(Node::paragraph(&data.text));
    }
    if !data.caption.is_empty() {
        children.push(Node::paragraph(format!("— {}", data.caption)));
    }
    Node::Blockquote { children }
}
