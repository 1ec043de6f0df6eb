//! The two tree-rewriting engines and their shared pieces.
//!
//! `to_mdast` walks the flat block list into a markdown tree; `to_blocks`
//! walks a tree's top-level children back into blocks. Each engine is an
//! exhaustive match over its side's closed union; unrecognized items are
//! dropped with a [`diagnostics::Diagnostic`] and the aggregate conversion
//! carries on. `lists` holds the one genuinely recursive transform,
//! `text` the depth-first text-extraction fold both engines share.

pub mod diagnostics;
pub mod lists;
pub mod text;
pub mod to_blocks;
pub mod to_mdast;
