//! Line cursor over the markdown input.
//!
//! Input is split on `\n` only. No trimming happens, so a Windows line
//! ending leaves its `\r` at the end of the line content.

/// Position within the ordered input lines.
///
/// The index always satisfies `0 <= index <= line_count`; an index equal
/// to the line count means the input is exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineCursor {
    lines: Vec<String>,
    index: usize,
}

impl LineCursor {
    /// Split `markdown` into lines and position the cursor on the first one.
    ///
    /// The empty string yields a single empty line.
    pub fn new(markdown: &str) -> Self {
        Self {
            lines: split_lines(markdown),
            index: 0,
        }
    }

    /// Replace the input lines and rewind to the first line.
    pub fn load(&mut self, markdown: &str) {
        self.lines = split_lines(markdown);
        self.reset();
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn current_line_exists(&self) -> bool {
        self.index < self.lines.len()
    }

    /// The line under the cursor, or `None` once the input is exhausted.
    pub fn current_line(&self) -> Option<&str> {
        self.lines.get(self.index).map(String::as_str)
    }

    /// Move to the next line.
    ///
    /// Advancing from the last line leaves the cursor at the end of input,
    /// where [`current_line_exists`](Self::current_line_exists) is false.
    pub fn advance(&mut self) {
        if self.index < self.lines.len() {
            self.index += 1;
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

fn split_lines(markdown: &str) -> Vec<String> {
    markdown.split('\n').map(str::to_string).collect()
}
