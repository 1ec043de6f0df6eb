//! Structural conversion between Editor.js block documents and markdown trees
//!
//!     This crate translates between two tree-shaped document representations:
//!     the Editor.js saved-data model (a flat, ordered list of typed blocks, each
//!     carrying a type-specific payload) and the mdast shape used by markdown
//!     tooling (a rooted tree of typed nodes). The translation is structural,
//!     lossy by design, and best-effort: items neither side can express are
//!     dropped one at a time with a diagnostic, never by failing the whole
//!     conversion.
//!
//!     TLDR for integrators:
//!         - `editorjs_to_mdast` and `mdast_to_editorjs` are the two entry points.
//!         - The first is total; the second has exactly one failure mode (the
//!           input tree's entry node must have type `root`).
//!         - Use the `_with_diagnostics` variants when you need to know what was
//!           dropped; the plain ones discard the accounting.
//!         - Markdown *text* never appears in the core: parsing and rendering it
//!           is comrak's job, wired up in `formats/markdown`.
//!
//! Architecture
//!
//!     The pivot representation is the markdown tree (`model/mdast.rs`). The
//!     block document model lives in `model/blocks.rs`. Both models close their
//!     wire-level open `type` tags into tagged unions, each reserving one
//!     variant that carries the raw payload of unknown tags so that parsing
//!     stays lossless; only the converters drop those, visibly.
//!
//!     The conversion core in `convert/` is two independent, symmetric engines
//!     sharing a dispatch pattern: an exhaustive match over the closed union
//!     replaces a tag-keyed table of rewrite functions, with the unknown-tag arm
//!     reproducing drop-and-log. Everything per-type is a flat, stateless field
//!     remap except the list-nesting transform (`convert/lists.rs`), which is
//!     the only genuinely recursive piece.
//!
//!     This is a pure lib: it powers the blockdown CLI but is shell agnostic,
//!     that is no code here may suppose a shell environment, be it std print,
//!     env vars etc. Dropped-item reporting is returned as values; the two
//!     impure inputs the tree → block direction needs (wall-clock time for the
//!     save timestamp, fresh identifiers for blocks) are injected behind the
//!     `Clock` and `IdSource` traits so tests can pin them.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── editorjs            # Editor.js JSON ⇄ tree (wraps the core)
//!     │   ├── markdown            # Markdown text ⇄ tree (delegates to comrak)
//!     │   └── mdast               # Tree JSON passthrough
//!     ├── model                   # The two data models
//!     ├── convert                 # The two engines + list transform
//!     └── lib.rs
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait:
//!     parse() and/or serialize() against the pivot tree, a name and file
//!     extensions. The FormatRegistry provides centralized discovery and
//!     selection, including detection from filenames. Editor.js data is itself
//!     exposed as a format, which keeps the API homogeneous: converting
//!     Editor.js JSON to markdown text is just parse-with-one-format,
//!     serialize-with-another.
//!
//! Library Choices
//!
//!     The core only ever rewrites trees. Everything text-shaped is offloaded
//!     to specialized crates: comrak parses and renders markdown, serde_json
//!     handles both JSON wire shapes, uuid mints block identifiers, time reads
//!     the wall clock. We never hand-roll a markdown serializer; we build
//!     comrak's AST and let it render.

pub mod convert;
pub mod error;
pub mod format;
pub mod formats;
pub mod model;
pub mod registry;

pub use convert::diagnostics::Diagnostic;
pub use convert::to_blocks::{
    convert_root, convert_tree, mdast_to_editorjs, mdast_to_editorjs_with_diagnostics, Clock,
    ConvertOptions, IdSource, SystemClock, UuidIdSource,
};
pub use convert::to_mdast::{editorjs_to_mdast, editorjs_to_mdast_with_diagnostics};
pub use error::ConvertError;
pub use format::Format;
pub use model::blocks::{Block, BlockData, BlockDocument, EDITOR_VERSION};
pub use model::mdast::{Node, Root};
pub use registry::FormatRegistry;
