//! Tree → block engine.
//!
//! Walks a root node's top-level children in order, rewrites each through
//! the per-type rule for its tag, and assembles a fresh block document.
//! The one hard precondition in the whole converter lives here: the entry
//! node must be a `root`. Everything below it degrades gracefully, with
//! unconvertible nodes dropped one at a time under a diagnostic.
//!
//! Synthesizing a document needs two impure inputs, the save timestamp and
//! one identifier per block. Both sit behind traits ([`Clock`],
//! [`IdSource`]) so tests can pin them; production code uses the wall clock
//! and random v4 identifiers.

use crate::convert::diagnostics::Diagnostic;
use crate::convert::lists::items_from_list_children;
use crate::convert::text::text_content;
use crate::error::ConvertError;
use crate::model::blocks::{
    Block, BlockData, BlockDocument, CodeData, HeaderData, ImageData, ListData, ListStyle,
    ParagraphData, QuoteData, EDITOR_VERSION,
};
use crate::model::mdast::{Node, Root};
use time::OffsetDateTime;
use uuid::Uuid;

/// Identifier source for synthesized blocks, one call per block.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Production source: random v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Timestamp source for synthesized documents.
pub trait Clock {
    /// Unix timestamp in milliseconds.
    fn now_millis(&self) -> i64;
}

/// Production clock: wall-clock UTC now.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
    }
}

/// Knobs for synthesized block documents.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Version string stamped into the output document.
    pub version: String,
    /// Alignment stamped into quote payloads.
    pub quote_alignment: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            version: EDITOR_VERSION.to_string(),
            quote_alignment: "left".to_string(),
        }
    }
}

/// Convert a markdown tree to an Editor.js document.
///
/// Fails with [`ConvertError::InvalidInput`] unless `tree` is a `root`
/// node; any other anomaly is a per-node drop, never an error.
pub fn mdast_to_editorjs(tree: &Node) -> Result<BlockDocument, ConvertError> {
    mdast_to_editorjs_with_diagnostics(tree).map(|(doc, _)| doc)
}

/// Convert a markdown tree to an Editor.js document, returning one
/// [`Diagnostic`] per dropped node.
pub fn mdast_to_editorjs_with_diagnostics(
    tree: &Node,
) -> Result<(BlockDocument, Vec<Diagnostic>), ConvertError> {
    convert_tree(
        tree,
        &ConvertOptions::default(),
        &mut UuidIdSource,
        &SystemClock,
    )
}

/// Low-level entry with injected collaborators.
pub fn convert_tree(
    tree: &Node,
    options: &ConvertOptions,
    ids: &mut dyn IdSource,
    clock: &dyn Clock,
) -> Result<(BlockDocument, Vec<Diagnostic>), ConvertError> {
    match tree {
        Node::Root(root) => Ok(convert_root(root, options, ids, clock)),
        other => Err(ConvertError::InvalidInput(format!(
            "expected a `root` node, got `{}`",
            other.type_name()
        ))),
    }
}

/// Same as [`convert_tree`] for callers already holding a typed root.
pub fn convert_root(
    root: &Root,
    options: &ConvertOptions,
    ids: &mut dyn IdSource,
    clock: &dyn Clock,
) -> (BlockDocument, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let blocks = root
        .children
        .iter()
        .filter_map(|node| convert_node(node, options, ids, &mut diagnostics))
        .collect();
    let doc = BlockDocument {
        time: clock.now_millis(),
        blocks,
        version: options.version.clone(),
    };
    (doc, diagnostics)
}

fn convert_node(
    node: &Node,
    options: &ConvertOptions,
    ids: &mut dyn IdSource,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Block> {
    let data = match node {
        Node::Paragraph { .. } => BlockData::Paragraph(ParagraphData {
            text: text_content(node),
        }),
        Node::Heading { depth, .. } => BlockData::Header(HeaderData {
            text: text_content(node),
            level: *depth,
        }),
        Node::List { ordered, children } => BlockData::List(ListData {
            style: ListStyle::from_ordered(*ordered),
            items: items_from_list_children(children),
        }),
        Node::Code { lang, value } => BlockData::Code(CodeData {
            code: value.clone(),
            language: lang.clone().unwrap_or_default(),
        }),
        Node::Image { url, alt, .. } => BlockData::Image(ImageData {
            url: url.clone(),
            caption: alt.clone(),
            ..ImageData::default()
        }),
        Node::Blockquote { children } => BlockData::Quote(quote_data(children, options)),
        Node::ThematicBreak => BlockData::Delimiter,
        Node::Root(_) | Node::Text { .. } | Node::ListItem { .. } | Node::Other(_) => {
            diagnostics.push(Diagnostic::new(format!(
                "no rewrite rule for node type `{}`; node dropped",
                node.type_name()
            )));
            return None;
        }
    };
    Some(Block {
        id: ids.next_id(),
        data,
    })
}

fn quote_data(children: &[Node], options: &ConvertOptions) -> QuoteData {
    let mut text = String::new();
    let mut caption = String::new();

    if let Some(first) = children.first() {
        text = text_content(first);
        if let Some(second) = children.get(1) {
            let second_text = text_content(second);
            match strip_caption_marker(&second_text) {
                Some(stripped) => caption = stripped.to_string(),
                None => {
                    // Part of the quote; join with the literal escape
                    // sequence the editor uses for a blank line.
                    text.push_str("\\n\\n");
                    text.push_str(&second_text);
                }
            }
        }
    }

    QuoteData {
        text,
        caption,
        alignment: options.quote_alignment.clone(),
    }
}

/// A second blockquote paragraph is treated as an attribution line when it
/// opens with a dash marker. This is a textual sniff, not a structural
/// marker; it lives behind this predicate so a structural convention can
/// replace it.
fn looks_like_caption(text: &str) -> bool {
    text.starts_with('—') || text.starts_with('-')
}

fn strip_caption_marker(text: &str) -> Option<&str> {
    if !looks_like_caption(text) {
        return None;
    }
    let rest = text
        .strip_prefix('—')
        .or_else(|| text.strip_prefix('-'))?;
    Some(rest.trim_start())
}
