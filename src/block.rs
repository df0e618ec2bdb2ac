use serde::Serialize;

/// Inline text spans within a list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Span {
    Plain(String),
    Bold(String),
}

impl Span {
    /// Literal text of the span, without any delimiters.
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Bold(text) => text.as_str(),
        }
    }
}

/// A single list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub spans: Vec<Span>,
}

impl ListItem {
    /// Concatenated span text, i.e. the source text with consumed bold delimiters removed.
    pub fn text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }
}

/// Block-level elements parsed from changelog text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { text: String },
    Separator,
    List { items: Vec<ListItem> },
    Paragraph { text: String },
}

impl Block {
    /// Separators are layout, everything else carries source content.
    pub fn is_content(&self) -> bool {
        !matches!(self, Block::Separator)
    }
}
