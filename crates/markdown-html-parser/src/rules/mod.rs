//! Block rules.
//!
//! A block rule recognises a construct at the current line and, when it
//! applies, consumes one or more lines and writes their HTML. Rules are
//! stateless; everything mutable lives in the [`ParseState`] passed in.
//!
//! The driver evaluates rules in a fixed priority order and falls back to
//! [`ParagraphRule`] when none applies.

pub mod heading;
pub mod list;
pub mod paragraph;

pub use heading::{HeadingRule, MAX_HEADING_LEVEL, heading_level};
pub use list::{UnorderedListRule, strip_list_marker};
pub use paragraph::ParagraphRule;

use markdown_html_core::{BlockKind, ParseState};

/// A block construct recogniser paired with its renderer.
pub trait BlockRule: Send + Sync + std::fmt::Debug {
    /// The construct this rule produces.
    fn kind(&self) -> BlockKind;

    /// Whether the rule claims the current line.
    ///
    /// Must return false once the input is exhausted.
    fn can_apply(&self, state: &ParseState) -> bool;

    /// Consume at least one line and write its HTML.
    ///
    /// Only called after [`can_apply`](Self::can_apply) returned true.
    fn apply(&self, state: &mut ParseState);
}

/// Rules in priority order: heading, then unordered list.
pub fn default_rules() -> Vec<Box<dyn BlockRule>> {
    vec![Box::new(HeadingRule), Box::new(UnorderedListRule)]
}
