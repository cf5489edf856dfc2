//! Append-only HTML output buffer.

/// Accumulates HTML fragments in arrival order.
///
/// Text is written verbatim: nothing is HTML-escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlSink {
    html: String,
}

impl HtmlSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw text.
    pub fn write(&mut self, text: &str) {
        self.html.push_str(text);
    }

    /// Append `<tag>inner</tag>` with no surrounding whitespace.
    pub fn write_tag(&mut self, tag: &str, inner: &str) {
        self.html.reserve(tag.len() * 2 + inner.len() + 5);
        self.html.push('<');
        self.html.push_str(tag);
        self.html.push('>');
        self.html.push_str(inner);
        self.html.push_str("</");
        self.html.push_str(tag);
        self.html.push('>');
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }

    pub fn clear(&mut self) {
        self.html.clear();
    }
}

impl std::fmt::Display for HtmlSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.html)
    }
}
