//! Release-notes rendering for a "what's new" panel.
//!
//! Changelog text in a small markdown dialect (`### ` headings, `- ` list
//! items with `**bold**`, plain paragraphs) is parsed into [`Block`]s, shown
//! on a [`ChangelogSurface`] and painted through Typst.

mod block;
mod config;
mod dismissal;
mod error;
mod parser;
mod surface;
mod typst;

pub use block::{Block, ListItem, Span};
pub use config::{Config, FontConfig, PageConfig, SurfaceConfig};
pub use dismissal::{DismissalController, DismissalState};
pub use error::{Error, Result};
pub use surface::{Appearance, ChangelogSurface};
pub use typst::{blocks_to_typst, surface_to_typst};

use log::debug;
use typst_as_lib::TypstEngine;
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_library::layout::PagedDocument;
use typst_pdf::PdfOptions;

/// Parse changelog text into a vector of blocks.
pub fn parse(text: &str) -> Vec<Block> {
    let blocks = parser::parse(text);
    debug!("parsed {} lines into {} blocks", text.lines().count(), blocks.len());
    blocks
}

/// Serialize blocks for hosts that paint them on their own.
pub fn blocks_to_json(blocks: &[Block]) -> Result<String> {
    Ok(serde_json::to_string_pretty(blocks)?)
}

/// Compile a surface to a Typst document.
fn compile_document<F: FnOnce()>(surface: &ChangelogSurface<F>, config: &Config) -> Result<PagedDocument> {
    let typst_content = surface_to_typst(surface, config);

    // Sans faces other than the embedded mono one come from the system
    let font_options = TypstKitFontOptions::new()
        .include_embedded_fonts(true)
        .include_system_fonts(config.font.sans);

    let engine = TypstEngine::builder()
        .main_file(typst_content)
        .search_fonts_with(font_options)
        .build();

    let doc: PagedDocument = engine
        .compile()
        .output
        .map_err(|e| Error::Compile(format!("{e:?}")))?;
    debug!("compiled surface into {} page(s)", doc.pages.len());
    Ok(doc)
}

/// Convert a surface to PDF bytes.
pub fn surface_to_pdf<F: FnOnce()>(surface: &ChangelogSurface<F>, config: &Config) -> Result<Vec<u8>> {
    let doc = compile_document(surface, config)?;

    typst_pdf::pdf(&doc, &PdfOptions::default()).map_err(|e| Error::Pdf(format!("{e:?}")))
}

/// Result of rendering a surface to SVG pages.
#[derive(Debug)]
pub struct SvgDocument {
    pub pages: Vec<String>,
    pub width_pt: f64,
    pub height_pt: f64,
}

/// Convert a surface to SVG pages.
pub fn surface_to_svg<F: FnOnce()>(surface: &ChangelogSurface<F>, config: &Config) -> Result<SvgDocument> {
    let doc = compile_document(surface, config)?;

    let pages: Vec<String> = doc.pages.iter().map(typst_svg::svg).collect();

    // Pages share a width; height is auto, so take the first page's
    let (width_pt, height_pt) = doc
        .pages
        .first()
        .map(|page| {
            let size = page.frame.size();
            (size.x.to_pt(), size.y.to_pt())
        })
        .unwrap_or((0.0, 0.0));

    Ok(SvgDocument {
        pages,
        width_pt,
        height_pt,
    })
}
