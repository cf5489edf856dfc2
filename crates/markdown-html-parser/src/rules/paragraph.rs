//! Paragraph fallback.

use super::BlockRule;
use crate::inline::render_inline;
use markdown_html_core::{BlockKind, ParseState};

/// Renders the current line as `<p>…</p>`.
///
/// Claims any existing line, so the driver evaluates it last.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphRule;

impl BlockRule for ParagraphRule {
    fn kind(&self) -> BlockKind {
        BlockKind::Paragraph
    }

    fn can_apply(&self, state: &ParseState) -> bool {
        state.current_line_exists()
    }

    fn apply(&self, state: &mut ParseState) {
        if let Some(line) = state.current_line() {
            let html = render_inline(line);
            state.sink.write_tag("p", &html);
        }
        state.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line() {
        let mut state = ParseState::new("plain");
        ParagraphRule.apply(&mut state);
        assert_eq!(state.sink.as_str(), "<p>plain</p>");
        assert!(!state.current_line_exists());
    }

    #[test]
    fn test_empty_line() {
        let mut state = ParseState::new("");
        assert!(ParagraphRule.can_apply(&state));
        ParagraphRule.apply(&mut state);
        assert_eq!(state.sink.as_str(), "<p></p>");
    }

    #[test]
    fn test_inline_rendered() {
        let mut state = ParseState::new("a _b_ c");
        ParagraphRule.apply(&mut state);
        assert_eq!(state.sink.as_str(), "<p>a <em>b</em> c</p>");
    }

    #[test]
    fn test_advances_one_line() {
        let mut state = ParseState::new("one\ntwo");
        ParagraphRule.apply(&mut state);
        assert_eq!(state.current_line(), Some("two"));
    }
}
