//! Block kinds recognised by the converter.

use serde::{Deserialize, Serialize};

/// The block-level construct a rule produces.
///
/// Every driver step reports which kind handled the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// `#` to `######` header line
    Heading,
    /// Run of `*` lines
    UnorderedList,
    /// Fallback for any line no other rule claims
    Paragraph,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Heading => write!(f, "heading"),
            BlockKind::UnorderedList => write!(f, "unordered_list"),
            BlockKind::Paragraph => write!(f, "paragraph"),
        }
    }
}
