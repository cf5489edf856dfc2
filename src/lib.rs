//! markdown-html - convert a small markdown subset to HTML.
//!
//! Supported constructs:
//! - headers, `#` through `######`
//! - unordered lists, lines starting with `*`
//! - paragraphs, for every other line
//! - `_emphasis_` and `__strong__` inside paragraphs and list items
//!
//! Output is the concatenated HTML fragments with no document wrapper,
//! no whitespace between elements, and no escaping of the input text.
//!
//! # Example
//!
//! ```
//! let html = markdown_html::markdown_to_html("# Title\n_hello_").unwrap();
//! assert_eq!(html, "<h1>Title</h1><p><em>hello</em></p>");
//! ```

pub use markdown_html_core::{
    BlockKind, HtmlSink, LineCursor, MarkdownError, ParseState, Result,
};
pub use markdown_html_parser::{
    BlockRule, HeadingRule, ParagraphRule, Parser, ProgressGuard, UnorderedListRule,
    default_rules, render_inline,
};

/// Convert `markdown` to HTML with the default rules.
///
/// Builds a fresh [`Parser`]; reuse one directly when converting many
/// documents.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Parser::new().parse(markdown)
}
