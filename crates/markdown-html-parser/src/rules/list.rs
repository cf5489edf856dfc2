//! Unordered lists: consecutive lines starting with `*`.

use super::BlockRule;
use crate::inline::render_inline;
use markdown_html_core::{BlockKind, ParseState};

const LIST_MARKER: char = '*';

/// Item text with the marker and the character after it removed.
///
/// The second character is dropped unconditionally, so `*x` loses its `x`.
pub fn strip_list_marker(line: &str) -> &str {
    let mut chars = line.chars();
    chars.next();
    chars.next();
    chars.as_str()
}

/// Renders a run of `* item` lines as one `<ul>`.
///
/// This is the only rule that consumes more than one line per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnorderedListRule;

impl BlockRule for UnorderedListRule {
    fn kind(&self) -> BlockKind {
        BlockKind::UnorderedList
    }

    fn can_apply(&self, state: &ParseState) -> bool {
        state
            .current_line()
            .map(|line| line.starts_with(LIST_MARKER))
            .unwrap_or(false)
    }

    fn apply(&self, state: &mut ParseState) {
        state.sink.write("<ul>");
        loop {
            let item = match state.current_line() {
                Some(line) => render_inline(strip_list_marker(line)),
                None => break,
            };
            state.sink.write_tag("li", &item);
            state.advance();

            if !self.can_apply(state) {
                break;
            }
        }
        state.sink.write("</ul>");
    }
}
