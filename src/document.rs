//! Wraps an HTML fragment in a complete standalone document.

use crate::config::Config;

/// Build the embedded stylesheet from presentational settings.
fn stylesheet(config: &Config) -> String {
    let page = &config.page;
    let headings = &config.headings;
    let links = &config.links;
    let decoration = if links.underline { "underline" } else { "none" };

    format!(
        r#"    body {{
      font-family: {font};
      line-height: {line_height};
      color: {text_color};
      background: {background};
      max-width: {max_width};
      margin: 0 auto;
      padding: 2em 1em;
    }}
    h1, h2, h3, h4, h5, h6 {{
      color: {heading_color};
      margin-top: 1.5em;
      margin-bottom: 0.5em;
    }}
    h1, h2 {{
      border-bottom: 1px solid {underline_color};
      padding-bottom: 0.3em;
    }}
    a {{
      color: {link_color};
      text-decoration: {decoration};
    }}
    a:hover {{
      color: {hover_color};
      text-decoration: underline;
    }}
    ul {{
      padding-left: 2em;
    }}
    li {{
      margin-bottom: {item_spacing};
    }}"#,
        font = page.font_family,
        line_height = page.line_height,
        text_color = page.text_color,
        background = page.background,
        max_width = page.max_width,
        heading_color = headings.color,
        underline_color = headings.underline_color,
        link_color = links.color,
        hover_color = links.hover_color,
        item_spacing = config.lists.item_spacing,
    )
}

/// Wrap `body` in a document titled `title`, styled with `config`.
///
/// Neither the title nor the body is escaped.
pub fn wrap_in_document(title: &str, body: &str, config: &Config) -> String {
    let css = stylesheet(config);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
{css}
  </style>
</head>
<body>
{body}
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble;

    #[test]
    fn title_and_body_are_embedded() {
        let html = assemble("Post", "<p>hi</p>");
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<title>Post</title>"));
        assert!(html.contains("<body>\n<p>hi</p>\n</body>"));
    }

    #[test]
    fn single_head_and_body() {
        let html = assemble("Post", "<p>hi</p>");
        assert_eq!(html.matches("<head>").count(), 1);
        assert_eq!(html.matches("</head>").count(), 1);
        assert_eq!(html.matches("<body>").count(), 1);
        assert_eq!(html.matches("</body>").count(), 1);
        assert!(html.find("</head>") < html.find("<body>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn default_styling() {
        let html = assemble("T", "");
        assert!(html.contains("max-width: 800px;"));
        assert!(html.contains("border-bottom: 1px solid #eaecef;"));
        assert!(html.contains("color: #0366d6;"));
        assert!(html.contains("text-decoration: none;"));
        assert!(html.contains("margin-bottom: 0.25em;"));
    }

    #[test]
    fn custom_config() {
        let mut config = Config::compiled_default();
        config.links.color = "#ff0000".to_string();
        config.links.underline = true;
        config.page.max_width = "60ch".to_string();

        let html = wrap_in_document("T", "", &config);
        assert!(html.contains("color: #ff0000;"));
        assert!(html.contains("text-decoration: underline;\n    }\n    a:hover"));
        assert!(html.contains("max-width: 60ch;"));
    }

    #[test]
    fn title_is_not_escaped() {
        let html = assemble("a & <b>", "");
        assert!(html.contains("<title>a & <b></title>"));
    }

    #[test]
    fn deterministic() {
        assert_eq!(assemble("Post", "<p>hi</p>"), assemble("Post", "<p>hi</p>"));
    }
}
