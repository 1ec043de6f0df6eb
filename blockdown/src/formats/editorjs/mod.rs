//! Editor.js format implementation
//!
//! This module treats the Editor.js block document (its saved JSON shape)
//! as just another format in the system: parsing runs the block → tree
//! engine, serializing runs the tree → block engine. This creates a uniform
//! API where Editor.js data can be converted to/from other formats through
//! the same interface.
//!
//! # Element Mapping Table
//!
//! | Block type  | Tree node      | Notes                                       |
//! |-------------|----------------|---------------------------------------------|
//! | paragraph   | paragraph      | Single text leaf both ways                  |
//! | header      | heading        | `level` ⇄ `depth`, default 1                |
//! | list        | list/listItem  | Recursive nesting transform                 |
//! | code        | code           | `language` ⇄ `lang` (empty ⇄ null)          |
//! | image       | image          | `file.url` preferred; caption → alt/title   |
//! | quote       | blockquote     | Caption as trailing em-dash paragraph       |
//! | delimiter   | thematicBreak  | Both directions carry no payload            |
//!
//! # Lossy Conversions
//!
//! - Block ids, the save timestamp, and the editor version are not
//!   representable in the tree; serializing mints fresh ones.
//! - Nested lists carry one style flag on the block side, so per-level
//!   flags in a tree collapse on the way in and are stamped uniformly on
//!   the way out.
//! - Unknown block types and node types are dropped (reported through the
//!   diagnostics variants, see [`crate::format::Format`]).

use crate::convert::diagnostics::Diagnostic;
use crate::convert::to_blocks::{convert_root, ConvertOptions, SystemClock, UuidIdSource};
use crate::convert::to_mdast::editorjs_to_mdast_with_diagnostics;
use crate::error::ConvertError;
use crate::format::Format;
use crate::model::blocks::BlockDocument;
use crate::model::mdast::Root;

/// Format implementation for Editor.js saved data.
#[derive(Default)]
pub struct EditorJsFormat {
    options: ConvertOptions,
}

impl EditorJsFormat {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }
}

impl Format for EditorJsFormat {
    fn name(&self) -> &str {
        "editorjs"
    }

    fn description(&self) -> &str {
        "Editor.js block document (JSON)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Root, ConvertError> {
        self.parse_with_diagnostics(source).map(|(tree, _)| tree)
    }

    fn serialize(&self, tree: &Root) -> Result<String, ConvertError> {
        self.serialize_with_diagnostics(tree).map(|(text, _)| text)
    }

    fn parse_with_diagnostics(
        &self,
        source: &str,
    ) -> Result<(Root, Vec<Diagnostic>), ConvertError> {
        let doc: BlockDocument = serde_json::from_str(source)
            .map_err(|e| ConvertError::ParseError(format!("invalid Editor.js JSON: {e}")))?;
        Ok(editorjs_to_mdast_with_diagnostics(&doc))
    }

    fn serialize_with_diagnostics(
        &self,
        tree: &Root,
    ) -> Result<(String, Vec<Diagnostic>), ConvertError> {
        let (doc, diagnostics) =
            convert_root(tree, &self.options, &mut UuidIdSource, &SystemClock);
        let json = serde_json::to_string_pretty(&doc)
            .map_err(|e| ConvertError::SerializationError(e.to_string()))?;
        Ok((json, diagnostics))
    }
}
