use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use super::types::Node;

/// Markup delimiters.
pub struct Tag;

impl Tag {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';
    pub const SLASH: u8 = b'/';
}

/// Returns true if `name` is a well-formed tag identifier: an ASCII letter
/// followed by zero or more word characters. Applied identically to opening
/// and closing tags.
pub fn is_valid_name(name: &str) -> bool {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = NAME_REGEX
        .get_or_init(|| Regex::new(r"^[A-Za-z]\w*$").expect("Invalid tag name regex"));
    re.is_match(name)
}

/// A tag that has been opened but not yet closed, accumulating the children
/// parsed so far. The frame's children transfer to its parent exactly once,
/// when the matching closing tag is scanned.
#[derive(Debug)]
pub(crate) struct OpenTag {
    pub name: String,
    pub children: Vec<Node>,
}

impl OpenTag {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }
}

/// Membership capability for the set of tag names a caller can turn into
/// renderable output.
///
/// The parser only ever asks "is this name known?"; what a name maps to is
/// the caller's business. [`TagSet`] answers from a plain set of names;
/// [`crate::render::ComponentMap`] answers from its registered constructors,
/// so the same value can drive both parsing and rendering.
pub trait KnownTags {
    fn is_known(&self, name: &str) -> bool;
}

impl<T: KnownTags + ?Sized> KnownTags for &T {
    fn is_known(&self, name: &str) -> bool {
        (**self).is_known(name)
    }
}

/// A plain set of known tag names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    names: HashSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl KnownTags for TagSet {
    fn is_known(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Accepts every tag name. Validates structure alone, for callers with no
/// component inventory (e.g. linting templates before components exist).
#[derive(Debug, Clone, Copy, Default)]
pub struct AllTags;

impl KnownTags for AllTags {
    fn is_known(&self, _name: &str) -> bool {
        true
    }
}
