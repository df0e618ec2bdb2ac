use crate::block::{Block, ListItem, Span};
use crate::config::Config;
use crate::surface::ChangelogSurface;

const SEPARATOR: &str =
    "#line(length: 100%, stroke: (paint: luma(200), thickness: 0.5pt, dash: \"dashed\"))\n\n";

/// Lists up to this many items are kept on one page.
const UNBREAKABLE_LIST_ITEMS: usize = 5;

/// Convert a whole surface (header plus release notes) to a Typst document
pub fn surface_to_typst<F: FnOnce()>(surface: &ChangelogSurface<F>, config: &Config) -> String {
    let mut out = String::new();
    emit_preamble(config, &mut out);

    out.push_str("#text(size: 1.25em, weight: \"semibold\")[");
    escape_into(surface.title(), &mut out);
    out.push_str("] #box(inset: (x: 5pt, y: 2pt), radius: 6pt, fill: rgb(\"#dbeafe\"))[#text(size: 0.75em, weight: \"semibold\", fill: rgb(\"#2563eb\"))[");
    escape_into(surface.version_label(), &mut out);
    out.push_str("]]\n\n");
    out.push_str(SEPARATOR);

    out.push_str(&blocks_to_typst(surface.blocks()));
    out
}

fn emit_preamble(config: &Config, out: &mut String) {
    out.push_str("#set page(width: 120mm, height: auto, margin: 10mm");
    if config.page.numbers {
        out.push_str(", numbering: \"1\"");
    }
    out.push_str(")\n");
    if config.font.sans {
        // DejaVu Sans Mono ships embedded, so a sans face exists even without system fonts
        out.push_str("#set text(font: (\"Open Sans\", \"DejaVu Sans\", \"DejaVu Sans Mono\"))\n");
    }
    // Set up paragraph settings to prevent widows/orphans
    out.push_str("#set par(linebreaks: \"optimized\")\n\n");
}

/// Convert blocks to Typst markup
pub fn blocks_to_typst(blocks: &[Block]) -> String {
    let mut out = String::new();

    let mut i = 0;
    while i < blocks.len() {
        let block = &blocks[i];

        match block {
            Block::Heading { .. } => {
                // Keep a heading on the same page as the first thing under it
                out.push_str("#block(breakable: false)[\n");
                emit_block(block, &mut out);
                if let Some(next) = blocks.get(i + 1).filter(|next| opens_section(next)) {
                    i += 1;
                    emit_block(next, &mut out);
                }
                out.push_str("]\n\n");
            }
            _ => emit_block(block, &mut out),
        }

        i += 1;
    }

    out
}

fn opens_section(block: &Block) -> bool {
    matches!(block, Block::List { .. } | Block::Paragraph { .. })
}

fn emit_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading { text } => {
            out.push_str("#text(size: 0.75em, weight: \"semibold\", fill: luma(120))[#upper[");
            escape_into(text, out);
            out.push_str("]]\n\n");
        }
        Block::Separator => out.push_str(SEPARATOR),
        Block::List { items } => {
            if items.len() <= UNBREAKABLE_LIST_ITEMS {
                out.push_str("#block(breakable: false)[\n");
                list_to_typst(items, out);
                out.push_str("]\n\n");
            } else {
                list_to_typst(items, out);
                out.push('\n');
            }
        }
        Block::Paragraph { text } => {
            escape_into(text, out);
            out.push_str("\n\n");
        }
    }
}

fn list_to_typst(items: &[ListItem], out: &mut String) {
    for item in items {
        out.push_str("- ");
        for span in &item.spans {
            span_to_typst(span, out);
        }
        out.push('\n');
    }
}

fn span_to_typst(span: &Span, out: &mut String) {
    match span {
        Span::Plain(text) => escape_into(text, out),
        Span::Bold(text) if text.is_empty() => {}
        Span::Bold(text) => {
            out.push_str("#strong[");
            escape_into(text, out);
            out.push(']');
        }
    }
}

/// Escape characters that Typst markup would otherwise interpret
fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '#' | '*' | '_' | '@' | '$' | '\\' | '`' | '<' | '>' | '[' | ']' | '=' | '-' | '+'
            | '/' | '~' | '.' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
}
