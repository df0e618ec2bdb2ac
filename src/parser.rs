use crate::block::{Block, ListItem, Span};

const HEADING_MARKER: &str = "### ";
const LIST_MARKER: &str = "- ";
const BOLD_DELIMITER: &str = "**";
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse changelog text into a list of blocks
pub fn parse(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut list = ListBuilder::default();

    for line in text.lines() {
        process_line(classify(line), &mut list, &mut blocks);
    }
    list.flush(&mut blocks);

    blocks
}

/// A trimmed source line, classified by marker
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Heading(&'a str),
    ListItem(&'a str),
    Paragraph(&'a str),
}

/// Whitespace plus the byte-order mark an editor may leave at the start of a file
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

fn classify(line: &str) -> Line<'_> {
    let trimmed = trim_line(line);
    if trimmed.is_empty() {
        Line::Blank
    } else if let Some(text) = trimmed.strip_prefix(HEADING_MARKER) {
        Line::Heading(text)
    } else if let Some(text) = trimmed.strip_prefix(LIST_MARKER) {
        Line::ListItem(text)
    } else {
        Line::Paragraph(trimmed)
    }
}

fn process_line(line: Line<'_>, list: &mut ListBuilder, blocks: &mut Vec<Block>) {
    match line {
        Line::Blank => list.flush(blocks),
        Line::Heading(text) => {
            list.flush(blocks);
            // The first heading of a document opens it, nothing to separate from
            if !blocks.is_empty() {
                blocks.push(Block::Separator);
            }
            blocks.push(Block::Heading {
                text: text.to_string(),
            });
        }
        Line::ListItem(text) => list.push(ListItem {
            spans: split_spans(text),
        }),
        Line::Paragraph(text) => {
            list.flush(blocks);
            blocks.push(Block::Paragraph {
                text: text.to_string(),
            });
        }
    }
}

/// Accumulates consecutive list items until something terminates the run
#[derive(Debug, Default)]
struct ListBuilder {
    items: Vec<ListItem>,
}

impl ListBuilder {
    fn push(&mut self, item: ListItem) {
        self.items.push(item);
    }

    /// Emit the pending items as one list block. No-op when nothing is pending.
    fn flush(&mut self, blocks: &mut Vec<Block>) {
        if self.items.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.items);
        blocks.push(Block::List { items });
    }
}

/// Split list item text into plain and bold spans.
///
/// An opening `**` pairs with the next `**` after it. A trailing `**` with no
/// partner stays in the plain text. Empty plain runs are dropped, an empty
/// bold pair (`****`) is kept as `Bold("")`.
fn split_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(BOLD_DELIMITER) {
        let inner_start = open + BOLD_DELIMITER.len();
        let Some(len) = rest[inner_start..].find(BOLD_DELIMITER) else {
            break;
        };
        push_plain(&mut spans, &rest[..open]);
        spans.push(Span::Bold(rest[inner_start..inner_start + len].to_string()));
        rest = &rest[inner_start + len + BOLD_DELIMITER.len()..];
    }
    push_plain(&mut spans, rest);

    spans
}

fn push_plain(spans: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        spans.push(Span::Plain(text.to_string()));
    }
}
