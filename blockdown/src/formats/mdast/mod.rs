//! mdast JSON format
//!
//! Serializes the pivot tree itself, in the JSON shape used by the
//! unist/mdast tooling ecosystem. Useful for handing trees to external
//! markdown utilities and for inspecting conversions.

use crate::error::ConvertError;
use crate::format::Format;
use crate::model::mdast::Root;

/// Format implementation for mdast JSON
pub struct MdastFormat;

impl Format for MdastFormat {
    fn name(&self) -> &str {
        "mdast"
    }

    fn description(&self) -> &str {
        "Markdown abstract syntax tree (JSON)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["mdast"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Root, ConvertError> {
        serde_json::from_str(source)
            .map_err(|e| ConvertError::ParseError(format!("invalid mdast JSON: {e}")))
    }

    fn serialize(&self, tree: &Root) -> Result<String, ConvertError> {
        serde_json::to_string_pretty(tree)
            .map_err(|e| ConvertError::SerializationError(e.to_string()))
    }
}
