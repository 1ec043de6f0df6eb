//! Markdown format implementation
//!
//! This module implements bidirectional conversion between the pivot tree
//! and CommonMark Markdown text.
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing and serialization. The
//! tree shape this crate pivots on is a value tree, while comrak's AST is
//! arena-allocated, so each direction is a thin adapter walk; comrak owns
//! all actual text handling. This choice is based on:
//! - Single crate for both parsing and serialization
//! - CommonMark compliance
//! - Robust and well-maintained
//!
//! # Element Mapping Table
//!
//! | Tree node      | Markdown             | Import Notes                        | Export Notes                   |
//! |----------------|----------------------|-------------------------------------|--------------------------------|
//! | paragraph      | Paragraph            | Inline formatting flattened to text | Single text leaf per paragraph |
//! | heading        | Heading (# ## ###)   | Level → depth                       | Depth clamped to 1..=6         |
//! | list/listItem  | List (- or 1. 2. 3.) | Nesting preserved                   | Nesting preserved, tight lists |
//! | code           | Code block (```)     | Info string → lang                  | lang → info string             |
//! | image          | ![alt](url "title")  | Image-only paragraphs promoted      | Wrapped in its own paragraph   |
//! | blockquote     | > quote              | Child paragraphs kept               | Child paragraphs kept          |
//! | thematicBreak  | ---                  | Direct                              | Direct                         |
//!
//! # Lossy Conversions
//!
//! - Bold/italic/links/inline code are flattened to their plain text on
//!   import; the tree model carries text leaves only.
//! - Tables, HTML blocks, and footnotes have no tree representation and
//!   are skipped on import (reported as diagnostics).
//! - Markdown formatting details (marker style, indentation, blank-line
//!   runs) are normalized by comrak on export.

pub mod parser;
pub mod serializer;

use crate::convert::diagnostics::Diagnostic;
use crate::error::ConvertError;
use crate::format::Format;
use crate::model::mdast::Root;

/// Format implementation for Markdown
pub struct MarkdownFormat {
    /// Output wrap width; 0 disables wrapping.
    width: usize,
}

impl MarkdownFormat {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Default for MarkdownFormat {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown format"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Root, ConvertError> {
        parser::parse_markdown(source).map(|(tree, _)| tree)
    }

    fn serialize(&self, tree: &Root) -> Result<String, ConvertError> {
        serializer::serialize_markdown(tree, self.width).map(|(text, _)| text)
    }

    fn parse_with_diagnostics(
        &self,
        source: &str,
    ) -> Result<(Root, Vec<Diagnostic>), ConvertError> {
        parser::parse_markdown(source)
    }

    fn serialize_with_diagnostics(
        &self,
        tree: &Root,
    ) -> Result<(String, Vec<Diagnostic>), ConvertError> {
        serializer::serialize_markdown(tree, self.width)
    }
}
