//! Inline span rewriting.
//!
//! Each pass is a non-greedy substitution over a single line. Passes run in a
//! fixed order and never re-scan their own output, so spans do not nest:
//! bold consumes doubled markers before italic looks at what remains, and
//! link labels are taken as already-rendered text.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static BOLD_UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.*?)__").unwrap());
static ITALIC_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static ITALIC_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.*?)_").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

/// Apply every inline pass in order: bold, italic, links.
pub fn render(text: &str) -> String {
    let text = bold(text);
    let text = italic(&text);
    links(&text)
}

/// `**X**` then `__X__` become `<strong>X</strong>`.
pub fn bold(text: &str) -> String {
    let text = BOLD_STARS.replace_all(text, "<strong>${1}</strong>");
    BOLD_UNDERSCORES
        .replace_all(&text, "<strong>${1}</strong>")
        .into_owned()
}

/// `*X*` then `_X_` become `<em>X</em>`.
pub fn italic(text: &str) -> String {
    let text = ITALIC_STAR.replace_all(text, "<em>${1}</em>");
    ITALIC_UNDERSCORE
        .replace_all(&text, "<em>${1}</em>")
        .into_owned()
}

/// `[label](url)` becomes `<a href="url">label</a>`.
pub fn links(text: &str) -> String {
    LINK.replace_all(text, r#"<a href="${2}">${1}</a>"#)
        .into_owned()
}
