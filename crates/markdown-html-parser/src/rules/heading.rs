//! Header lines: `#` through `######`.

use super::BlockRule;
use markdown_html_core::{BlockKind, ParseState};

/// Deepest header level; longer `#` runs are not headers.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Number of leading `#` characters in `line`.
pub fn heading_level(line: &str) -> usize {
    line.chars().take_while(|&c| c == '#').count()
}

/// Content after the `#` run and exactly one separator character.
///
/// Nothing else is trimmed, so `#Title` loses its `T`. A line that is only
/// `#` characters has empty content.
fn heading_content(line: &str, level: usize) -> &str {
    let mut rest = line[level..].chars();
    rest.next();
    rest.as_str()
}

/// Renders `# text` as `<h1>text</h1>`, up to `<h6>`.
///
/// Header text is written verbatim, without inline rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingRule;

impl BlockRule for HeadingRule {
    fn kind(&self) -> BlockKind {
        BlockKind::Heading
    }

    fn can_apply(&self, state: &ParseState) -> bool {
        state
            .current_line()
            .map(|line| (1..=MAX_HEADING_LEVEL).contains(&heading_level(line)))
            .unwrap_or(false)
    }

    fn apply(&self, state: &mut ParseState) {
        if let Some(line) = state.current_line() {
            let level = heading_level(line);
            let content = heading_content(line, level).to_string();
            state.sink.write_tag(&format!("h{}", level), &content);
        }
        state.advance();
    }
}
