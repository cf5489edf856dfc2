//! Error types for markdown-html

use thiserror::Error;

/// Main error type for markdown-html operations.
///
/// Malformed markdown is never an error: any line that no block rule
/// claims is rendered as a paragraph. The only failure is a rule set that
/// stops making progress, which is a bug in the rules rather than the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkdownError {
    /// A driver step finished without moving the line cursor
    #[error("Internal parser error. Line '{line}' would have caused an infinite loop.")]
    InternalParser {
        /// Text of the line the parser stalled on
        line: String,
    },
}

impl MarkdownError {
    /// Build an [`MarkdownError::InternalParser`] for the given stalled line.
    pub fn internal_parser(line: impl Into<String>) -> Self {
        MarkdownError::InternalParser { line: line.into() }
    }
}

/// Result type alias for markdown-html operations
pub type Result<T> = std::result::Result<T, MarkdownError>;
