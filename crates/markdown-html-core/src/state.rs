//! Per-parse mutable state.
//!
//! [`ParseState`] bundles the line cursor and the output sink so a single
//! `&mut` borrow can be handed to each block rule in turn.

use crate::cursor::LineCursor;
use crate::sink::HtmlSink;

/// Cursor and sink for one parse call.
///
/// # Example
///
/// ```
/// use markdown_html_core::ParseState;
///
/// let mut state = ParseState::new("# Title\nbody");
/// assert_eq!(state.current_line(), Some("# Title"));
/// state.sink.write_tag("h1", "Title");
/// state.advance();
/// assert_eq!(state.current_line(), Some("body"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParseState {
    /// Position in the input lines
    pub cursor: LineCursor,
    /// HTML written so far
    pub sink: HtmlSink,
}

impl ParseState {
    /// Fresh state positioned at the first line of `markdown`.
    pub fn new(markdown: &str) -> Self {
        Self {
            cursor: LineCursor::new(markdown),
            sink: HtmlSink::new(),
        }
    }

    /// Reuse this state for a new input: load lines, rewind, clear output.
    pub fn load(&mut self, markdown: &str) {
        self.cursor.load(markdown);
        self.sink.clear();
    }

    pub fn current_line_exists(&self) -> bool {
        self.cursor.current_line_exists()
    }

    pub fn current_line(&self) -> Option<&str> {
        self.cursor.current_line()
    }

    pub fn advance(&mut self) {
        self.cursor.advance();
    }

    /// Take the accumulated HTML, leaving the sink empty.
    pub fn take_html(&mut self) -> String {
        let html = self.sink.to_string();
        self.sink.clear();
        html
    }
}
