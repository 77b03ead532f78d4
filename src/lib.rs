mod block;
mod config;
mod document;
mod error;
mod html;
mod inline;
mod parser;

pub use block::{Block, Line, LineKind, List, ListItem};
pub use config::{Config, HeadingsConfig, LinksConfig, ListsConfig, PageConfig};
pub use error::Error;

/// Parse markdown text into a vector of blocks.
pub fn parse(markdown: &str) -> Vec<Block> {
    parser::parse(markdown)
}

/// Convert markdown text to an HTML body fragment.
pub fn convert(markdown: &str) -> String {
    let blocks = parse(markdown);
    html::blocks_to_html(&blocks)
}

/// Wrap an HTML fragment in a standalone document using the default styling.
pub fn assemble(title: &str, body: &str) -> String {
    assemble_with_config(title, body, &Config::compiled_default())
}

/// Wrap an HTML fragment in a standalone document with custom styling.
pub fn assemble_with_config(title: &str, body: &str, config: &Config) -> String {
    document::wrap_in_document(title, body, config)
}

/// Convert markdown to a complete HTML document using default config.
pub fn markdown_to_html(title: &str, markdown: &str) -> String {
    markdown_to_html_with_config(title, markdown, &Config::compiled_default())
}

/// Convert markdown to a complete HTML document with custom config.
pub fn markdown_to_html_with_config(title: &str, markdown: &str, config: &Config) -> String {
    assemble_with_config(title, &convert(markdown), config)
}
