//! # Tag markup parsing
//!
//! Converts flat translated text containing lightweight inline tags
//! (`Text with <Bold>tags</Bold>`) into an ordered tree of text fragments
//! and named elements.
//!
//! ## Architecture
//!
//! Parsing is a single left-to-right scan over the input. An explicit stack
//! of open-tag frames carries the nesting structure; plain text accumulates
//! between tag boundaries and is flushed into the innermost open frame
//! exactly when a boundary is reached. No recursion, no backtracking.
//!
//! ## Modules
//!
//! - **`types`**: `Node` enum (Text, Element)
//! - **`tag`**: delimiter constants, tag-name validation, the `KnownTags`
//!   lookup capability and its `TagSet`/`AllTags` implementations
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`error`**: `ParseError` with offset-tagged payloads
//! - **`parser`**: `parse()` main entry point
//!
//! ## Failure model
//!
//! Malformed markup is a hard error: the first structural defect aborts the
//! parse with a typed [`ParseError`] carrying the byte offset where it was
//! detected. There is no partial output and no recovery.

pub mod cursor;
pub mod error;
pub mod parser;
pub mod tag;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use parser::parse;
pub use tag::{AllTags, KnownTags, TagSet};
pub use types::Node;
