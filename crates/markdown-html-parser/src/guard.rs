//! Progress guard for the driver loop.

use markdown_html_core::{LineCursor, MarkdownError, Result};

/// Detects driver steps that leave the cursor where it was.
///
/// Every rule must consume at least one line. A rule that does not would
/// make the driver loop forever, so the step is rejected with
/// [`MarkdownError::InternalParser`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressGuard {
    index: usize,
}

impl ProgressGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the cursor position before a step.
    pub fn save(&mut self, cursor: &LineCursor) {
        self.index = cursor.index();
    }

    /// Fail if the cursor has not moved since [`save`](Self::save).
    ///
    /// `stalled_line` is the text of the line the step started on.
    pub fn check(&self, cursor: &LineCursor, stalled_line: &str) -> Result<()> {
        if cursor.index() == self.index {
            return Err(MarkdownError::internal_parser(stalled_line));
        }
        Ok(())
    }
}
