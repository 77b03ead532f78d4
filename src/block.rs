/// Classification of a single source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only
    Blank,
    /// `#` through `######` followed by a space
    Heading(u8),
    /// `-`, `*` or `+` marker followed by whitespace
    ListItem,
    Plain,
}

/// A source line tagged with its classification.
///
/// `text` holds the line with any heading or list marker stripped and inline
/// spans already rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

/// A single item of an unordered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub items: Vec<ListItem>,
}

/// Block-level elements, one per output line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, content: String },
    Paragraph { content: String },
    List(List),
    /// A blank source line, kept verbatim
    Blank(String),
}
