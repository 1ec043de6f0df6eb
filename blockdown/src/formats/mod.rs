//! Format implementations
//!
//! This module contains all format implementations that convert between
//! the pivot markdown tree and various text representations.

pub mod editorjs;
pub mod markdown;
pub mod mdast;

pub use editorjs::EditorJsFormat;
pub use markdown::MarkdownFormat;
pub use mdast::MdastFormat;
