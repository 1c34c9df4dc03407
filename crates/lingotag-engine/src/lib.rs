pub mod catalog;
pub mod parsing;
pub mod render;
pub mod translate;

// Re-export key types for easier usage
pub use catalog::{Catalog, CatalogError, interpolate};
pub use parsing::{AllTags, KnownTags, Node, ParseError, TagSet, parse};
pub use render::{ComponentMap, html_components, render_text, render_to_html, render_tree};
pub use translate::{FallbackPolicy, Translator};
