//! markdown-html Parser
//!
//! A line-oriented markdown to HTML converter for a small markdown subset:
//! headers (`#` to `######`), unordered lists (`*`), paragraphs, and the
//! inline `_emphasis_` and `__strong__` markers.
//!
//! # Overview
//!
//! The input is split into lines. On each step the driver asks the block
//! rules, in priority order, whether they claim the current line; the first
//! that does consumes one or more lines and writes HTML. Lines no rule
//! claims become paragraphs, so every input converts.
//!
//! # Example
//!
//! ```
//! use markdown_html_parser::Parser;
//!
//! let mut parser = Parser::new();
//! let html = parser.parse("# Title\n* a\n* b\nplain").unwrap();
//! assert_eq!(html, "<h1>Title</h1><ul><li>a</li><li>b</li></ul><p>plain</p>");
//! ```

pub mod guard;
pub mod inline;
pub mod rules;

pub use guard::ProgressGuard;
pub use inline::render_inline;
pub use rules::{BlockRule, HeadingRule, ParagraphRule, UnorderedListRule, default_rules};

use log::{debug, error, trace};
use markdown_html_core::{BlockKind, ParseState, Result};

// =============================================================================
// Parser
// =============================================================================

/// Markdown to HTML driver.
///
/// Rules are stateless and reused across calls; the per-call cursor and
/// sink are reset at the start of every [`parse`](Self::parse). A parser
/// is not meant to be shared between threads mid-parse: `parse` takes
/// `&mut self`.
#[derive(Debug)]
pub struct Parser {
    rules: Vec<Box<dyn BlockRule>>,
    paragraph: ParagraphRule,
    state: ParseState,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with the heading and unordered list rules.
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Create a parser with a custom rule list.
    ///
    /// Rules are tried in the given order. The paragraph fallback always
    /// runs last and is not part of the list.
    pub fn with_rules(rules: Vec<Box<dyn BlockRule>>) -> Self {
        Self {
            rules,
            paragraph: ParagraphRule,
            state: ParseState::default(),
        }
    }

    /// Kinds of the installed rules, in priority order.
    pub fn rule_kinds(&self) -> Vec<BlockKind> {
        self.rules.iter().map(|rule| rule.kind()).collect()
    }

    /// Convert `markdown` to HTML.
    ///
    /// Fails only with [`MarkdownError::InternalParser`] when a rule
    /// leaves the cursor in place, which the built-in rules never do.
    ///
    /// [`MarkdownError::InternalParser`]: markdown_html_core::MarkdownError::InternalParser
    pub fn parse(&mut self, markdown: &str) -> Result<String> {
        let mut state = std::mem::take(&mut self.state);
        state.load(markdown);
        debug!("Parsing {} lines", state.cursor.line_count());

        let result = self.run(&mut state);
        let html = state.take_html();
        // Keep the buffers around for the next call.
        self.state = state;

        result?;
        debug!("Produced {} bytes of HTML", html.len());
        Ok(html)
    }

    fn run(&self, state: &mut ParseState) -> Result<()> {
        while self.step(state)?.is_some() {}
        Ok(())
    }

    /// Run one driver step against `state`.
    ///
    /// Applies the first rule that claims the current line, or the
    /// paragraph fallback, and returns the kind that ran. Returns `None`
    /// once the input is exhausted.
    pub fn step(&self, state: &mut ParseState) -> Result<Option<BlockKind>> {
        if !state.current_line_exists() {
            return Ok(None);
        }

        let mut guard = ProgressGuard::new();
        guard.save(&state.cursor);

        let rule: &dyn BlockRule = self
            .rules
            .iter()
            .map(|rule| &**rule)
            .find(|rule| rule.can_apply(&*state))
            .unwrap_or(&self.paragraph as &dyn BlockRule);
        let kind = rule.kind();
        trace!("Line {}: {}", state.cursor.index(), kind);
        rule.apply(state);

        let stalled = state.current_line().unwrap_or_default();
        if let Err(e) = guard.check(&state.cursor, stalled) {
            error!("Rule {} did not advance: {}", kind, e);
            return Err(e);
        }
        Ok(Some(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdown_html_core::MarkdownError;

    /// Claims lines starting with `!` but never consumes them.
    #[derive(Debug)]
    struct StallingRule;

    impl BlockRule for StallingRule {
        fn kind(&self) -> BlockKind {
            BlockKind::Paragraph
        }

        fn can_apply(&self, state: &ParseState) -> bool {
            state
                .current_line()
                .map(|line| line.starts_with('!'))
                .unwrap_or(false)
        }

        fn apply(&self, state: &mut ParseState) {
            state.sink.write("<!-- stuck -->");
        }
    }

    #[test]
    fn test_parse_heading() {
        let mut parser = Parser::new();
        assert_eq!(parser.parse("# Header").unwrap(), "<h1>Header</h1>");
    }

    #[test]
    fn test_parse_list() {
        let mut parser = Parser::new();
        assert_eq!(
            parser.parse("* a\n* b").unwrap(),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn test_parse_empty_input() {
        let mut parser = Parser::new();
        assert_eq!(parser.parse("").unwrap(), "<p></p>");
    }

    #[test]
    fn test_parser_reuse_resets_state() {
        let mut parser = Parser::new();
        assert_eq!(parser.parse("one").unwrap(), "<p>one</p>");
        assert_eq!(parser.parse("two").unwrap(), "<p>two</p>");
    }

    #[test]
    fn test_list_ends_at_heading() {
        let mut parser = Parser::new();
        assert_eq!(
            parser.parse("* a\n# b").unwrap(),
            "<ul><li>a</li></ul><h1>b</h1>"
        );
    }

    #[test]
    fn test_step_reports_kinds() {
        let parser = Parser::new();
        let mut state = ParseState::new("# t\n* a\n* b\ntext");
        assert_eq!(parser.step(&mut state).unwrap(), Some(BlockKind::Heading));
        assert_eq!(
            parser.step(&mut state).unwrap(),
            Some(BlockKind::UnorderedList)
        );
        assert_eq!(state.cursor.index(), 3);
        assert_eq!(parser.step(&mut state).unwrap(), Some(BlockKind::Paragraph));
        assert_eq!(parser.step(&mut state).unwrap(), None);
    }

    #[test]
    fn test_rule_kinds() {
        assert_eq!(
            Parser::new().rule_kinds(),
            vec![BlockKind::Heading, BlockKind::UnorderedList]
        );
        assert!(Parser::with_rules(Vec::new()).rule_kinds().is_empty());
    }

    #[test]
    fn test_without_rules_everything_is_paragraph() {
        let mut parser = Parser::with_rules(Vec::new());
        assert_eq!(
            parser.parse("# a\n* b").unwrap(),
            "<p># a</p><p>* b</p>"
        );
    }

    #[test]
    fn test_stalling_rule_is_internal_error() {
        let mut parser = Parser::with_rules(vec![Box::new(StallingRule)]);
        let err = parser.parse("fine\n! stuck here").unwrap_err();
        assert_eq!(
            err,
            MarkdownError::InternalParser {
                line: "! stuck here".to_string()
            }
        );
    }

    #[test]
    fn test_parser_usable_after_error() {
        let mut parser = Parser::with_rules(vec![Box::new(StallingRule)]);
        assert!(parser.parse("!").is_err());
        assert_eq!(parser.parse("ok").unwrap(), "<p>ok</p>");
    }
}
