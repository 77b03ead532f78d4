use crate::block::{Block, List};

/// Render blocks as an HTML fragment, one block per line.
pub fn blocks_to_html(blocks: &[Block]) -> String {
    let mut out = String::new();

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        emit_block(block, &mut out);
    }

    out
}

fn emit_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            out.push_str(&format!("<h{level}>{content}</h{level}>"));
        }
        Block::Paragraph { content } => {
            out.push_str("<p>");
            out.push_str(content);
            out.push_str("</p>");
        }
        Block::List(list) => list_to_html(list, out),
        Block::Blank(text) => out.push_str(text),
    }
}

fn list_to_html(list: &List, out: &mut String) {
    out.push_str("<ul>");
    for item in &list.items {
        out.push_str("<li>");
        out.push_str(&item.content);
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

#[cfg(test)]
mod tests {
    use crate::convert;

    #[test]
    fn heading() {
        assert_eq!(convert("# Title"), "<h1>Title</h1>");
    }

    #[test]
    fn heading_precedence() {
        assert_eq!(convert("###### six"), "<h6>six</h6>");
    }

    #[test]
    fn heading_with_inline_spans() {
        assert_eq!(convert("## A **big** deal"), "<h2>A <strong>big</strong> deal</h2>");
    }

    #[test]
    fn paragraph() {
        assert_eq!(convert("Hello world"), "<p>Hello world</p>");
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(
            convert("**bold** and *italic*"),
            "<p><strong>bold</strong> and <em>italic</em></p>"
        );
    }

    #[test]
    fn link() {
        assert_eq!(
            convert("[go](https://go.dev)"),
            r#"<p><a href="https://go.dev">go</a></p>"#
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            convert("- a\n- b\n- c"),
            "<ul><li>a</li><li>b</li><li>c</li></ul>"
        );
    }

    #[test]
    fn list_items_with_inline_spans() {
        assert_eq!(
            convert("- **a**\n+ [b](u)"),
            r#"<ul><li><strong>a</strong></li><li><a href="u">b</a></li></ul>"#
        );
    }

    #[test]
    fn lists_split_by_paragraph() {
        assert_eq!(
            convert("- a\ntext\n- b"),
            "<ul><li>a</li></ul>\n<p>text</p>\n<ul><li>b</li></ul>"
        );
    }

    #[test]
    fn lists_merge_across_blank_lines() {
        assert_eq!(convert("- a\n\n- b"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(
            convert("# T\n\none\n\ntwo\n"),
            "<h1>T</h1>\n\n<p>one</p>\n\n<p>two</p>\n"
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn markup_is_not_escaped() {
        assert_eq!(convert("a < b & c"), "<p>a < b & c</p>");
    }

    #[test]
    fn deterministic() {
        let text = "# T\n\n- a\n- b\n\n**x** _y_ [z](w)";
        assert_eq!(convert(text), convert(text));
    }
}
