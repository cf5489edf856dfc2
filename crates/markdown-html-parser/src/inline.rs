//! Inline markdown rendering.
//!
//! Handles the two inline constructs: `__strong__` and `_emphasis_`.
//!
//! Each construct is a single greedy replace pass over the line, strong
//! first. The match runs from the first delimiter to the last one on the
//! line, so `__a__ __b__` becomes one strong span containing `a__ __b`
//! rather than two spans. Underscores cannot be escaped.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for strong: `__text__`
static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.+)__").unwrap());

/// Regex for emphasis: `_text_`
static EMPHASIS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.+)_").unwrap());

/// Replace strong and emphasis delimiters in `text` with HTML tags.
///
/// Strong must run before emphasis, otherwise the emphasis pattern would
/// claim the inner underscores of `__text__`.
///
/// # Example
///
/// ```
/// use markdown_html_parser::render_inline;
///
/// assert_eq!(render_inline("__a__ and _b_"), "<strong>a</strong> and <em>b</em>");
/// assert_eq!(render_inline("_b_"), "<em>b</em>");
/// ```
pub fn render_inline(text: &str) -> String {
    let strong = STRONG_RE.replace_all(text, "<strong>${1}</strong>");
    EMPHASIS_RE
        .replace_all(&strong, "<em>${1}</em>")
        .into_owned()
}
