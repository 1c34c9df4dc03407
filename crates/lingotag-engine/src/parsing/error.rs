use thiserror::Error;

/// A structural defect found while parsing tag markup.
///
/// Every variant carries the 0-based byte offset at which the defect was
/// detected. Parsing stops at the first defect; there is never a partial
/// tree alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `<` was scanned but its tag never reached a `>`.
    #[error("incomplete tag at offset {position}")]
    TagIsIncomplete {
        position: usize,
        /// The partially-read tag text (delimiters stripped), when scanning
        /// got that far.
        tag: Option<String>,
    },

    /// A tag name failed the identifier pattern (ASCII letter followed by
    /// word characters).
    #[error("invalid tag name `{name}` at offset {position}")]
    TagNameIsInvalid { position: usize, name: String },

    /// A closing tag's name differs from the innermost open tag.
    #[error("closing tag `{name}` at offset {position} does not match the innermost open tag")]
    ClosingTagDoesNotMatchOpeningTag {
        position: usize,
        name: String,
        /// Names of the tags still open after the mismatch, innermost first.
        open_tags: Vec<String>,
    },

    /// Input ended while tags were still open.
    #[error("input ended with unclosed tags: {}", .open_tags.join(", "))]
    NotAllTagsWereClosed {
        position: usize,
        /// Names of the unclosed tags, innermost first.
        open_tags: Vec<String>,
    },

    /// A well-formed, correctly matched tag has no entry in the caller's
    /// component inventory.
    #[error("unknown tag `{name}` at offset {position}")]
    TagIsNotKnown { position: usize, name: String },
}

impl ParseError {
    /// Byte offset at which the defect was detected.
    pub fn position(&self) -> usize {
        match self {
            ParseError::TagIsIncomplete { position, .. }
            | ParseError::TagNameIsInvalid { position, .. }
            | ParseError::ClosingTagDoesNotMatchOpeningTag { position, .. }
            | ParseError::NotAllTagsWereClosed { position, .. }
            | ParseError::TagIsNotKnown { position, .. } => *position,
        }
    }
}
