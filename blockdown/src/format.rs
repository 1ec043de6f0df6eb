//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations
//! must implement. The trait provides a uniform interface for parsing source
//! text into the pivot markdown tree and serializing the tree back out.

use crate::convert::diagnostics::Diagnostic;
use crate::error::ConvertError;
use crate::model::mdast::Root;

/// Trait for document formats
///
/// Implementors provide bidirectional conversion between a string
/// representation and the markdown tree. Formats can support parsing,
/// serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<Root, ConvertError> {
///         // Parse source to a tree
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "editorjs", "markdown", "mdast")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → tree)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (tree → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a markdown tree
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support parsing should override this method.
    fn parse(&self, _source: &str) -> Result<Root, ConvertError> {
        Err(ConvertError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a markdown tree into source text
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support serialization should override this method.
    fn serialize(&self, _tree: &Root) -> Result<String, ConvertError> {
        Err(ConvertError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Parse source text, also returning per-item drop warnings.
    ///
    /// Formats whose parsing can lose items (e.g. unrecognized block types)
    /// should override this; the default delegates to [`Format::parse`] and
    /// reports no warnings.
    fn parse_with_diagnostics(
        &self,
        source: &str,
    ) -> Result<(Root, Vec<Diagnostic>), ConvertError> {
        self.parse(source).map(|tree| (tree, Vec::new()))
    }

    /// Serialize a tree, also returning per-item drop warnings.
    ///
    /// Same contract as [`Format::parse_with_diagnostics`], for the
    /// serialization direction.
    fn serialize_with_diagnostics(
        &self,
        tree: &Root,
    ) -> Result<(String, Vec<Diagnostic>), ConvertError> {
        self.serialize(tree).map(|text| (text, Vec::new()))
    }
}
