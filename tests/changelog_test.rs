//! Public API tests: parse, surface lifecycle and document output.

use std::cell::Cell;

use pretty_assertions::assert_eq;
use whatsnew::{
    Block, ChangelogSurface, Config, DismissalController, DismissalState, ListItem, Span,
    SurfaceConfig,
};

const RELEASE_NOTES: &str = "### Features
- Added **dark mode** to settings
- Faster startup

### Bug Fixes
- Fixed crash when **proxy** is unreachable
Thanks to everyone who reported issues.
";

#[test]
fn release_notes_structure() {
    let blocks = whatsnew::parse(RELEASE_NOTES);

    assert_eq!(
        blocks,
        vec![
            Block::Heading {
                text: "Features".to_string()
            },
            Block::List {
                items: vec![
                    ListItem {
                        spans: vec![
                            Span::Plain("Added ".to_string()),
                            Span::Bold("dark mode".to_string()),
                            Span::Plain(" to settings".to_string()),
                        ],
                    },
                    ListItem {
                        spans: vec![Span::Plain("Faster startup".to_string())],
                    },
                ],
            },
            Block::Separator,
            Block::Heading {
                text: "Bug Fixes".to_string()
            },
            Block::List {
                items: vec![ListItem {
                    spans: vec![
                        Span::Plain("Fixed crash when ".to_string()),
                        Span::Bold("proxy".to_string()),
                        Span::Plain(" is unreachable".to_string()),
                    ],
                }],
            },
            Block::Paragraph {
                text: "Thanks to everyone who reported issues.".to_string()
            },
        ]
    );
}

#[test]
fn content_blocks_never_exceed_lines() {
    let inputs = [
        "",
        "\n\n\n",
        "### A\n### B\n### C",
        "- a\n- b\n- c",
        "x\n\n- y\n### z\n**",
        "\u{a0}\u{2003}\n\u{feff}",
        RELEASE_NOTES,
    ];
    for input in inputs {
        let lines = input
            .lines()
            .filter(|l| !l.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}').is_empty())
            .count();
        let blocks = whatsnew::parse(input);
        assert!(blocks.iter().filter(|b| b.is_content()).count() <= lines, "{input:?}");
        assert_ne!(blocks.first(), Some(&Block::Separator), "{input:?}");
    }
}

#[test]
fn file_with_byte_order_mark() {
    let blocks = whatsnew::parse("\u{feff}### Features\n- a");
    assert_eq!(
        blocks[0],
        Block::Heading {
            text: "Features".to_string()
        }
    );
    assert!(whatsnew::parse("\u{a0}\u{2003}\n\u{feff}").is_empty());
}

#[test]
fn blocks_as_json() {
    let blocks = whatsnew::parse("### Fixes\n- **x** y\n\nok\n### More");
    let json: serde_json::Value =
        serde_json::from_str(&whatsnew::blocks_to_json(&blocks).unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            { "type": "heading", "text": "Fixes" },
            { "type": "list", "items": [
                { "spans": [
                    { "type": "bold", "text": "x" },
                    { "type": "plain", "text": " y" },
                ] },
            ] },
            { "type": "paragraph", "text": "ok" },
            { "type": "separator" },
            { "type": "heading", "text": "More" },
        ])
    );
}

#[test]
fn controller_ignores_early_signal() {
    let removed = Cell::new(0);
    let mut controller = DismissalController::new(|| removed.set(removed.get() + 1));

    controller.on_transition_finished();
    assert_eq!(removed.get(), 0);

    controller.request_close();
    controller.request_close();
    controller.on_transition_finished();
    assert_eq!(removed.get(), 1);
}

#[test]
fn surface_lifecycle() {
    let removed = Cell::new(false);
    let mut surface = ChangelogSurface::new(
        Some("1.3.0"),
        Some(RELEASE_NOTES),
        &SurfaceConfig::default(),
        || removed.set(true),
    )
    .unwrap();

    assert_eq!(surface.version_label(), "v1.3.0");
    assert_eq!(surface.blocks(), whatsnew::parse(RELEASE_NOTES).as_slice());
    assert_eq!(surface.state(), DismissalState::Open);

    surface.request_close();
    assert!(surface.appearance().opacity < 1.0);
    assert!(!removed.get());

    surface.on_transition_finished();
    assert!(removed.get());
}

#[test]
fn absent_changelog_renders_nothing() {
    let surface = ChangelogSurface::new(Some("1.0.0"), None, &SurfaceConfig::default(), || {});
    assert!(surface.is_none());
}

#[test]
fn surface_compiles_to_pdf() {
    let config = Config::compiled_default();
    let surface =
        ChangelogSurface::new(Some("1.3.0"), Some(RELEASE_NOTES), &config.surface, || {}).unwrap();

    let pdf = whatsnew::surface_to_pdf(&surface, &config).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn surface_compiles_to_svg() {
    let config = Config::compiled_default();
    let surface = ChangelogSurface::new(None, Some(RELEASE_NOTES), &config.surface, || {}).unwrap();

    let doc = whatsnew::surface_to_svg(&surface, &config).unwrap();
    assert_eq!(doc.pages.len(), 1);
    assert!(doc.pages[0].contains("<svg"));
    assert!(doc.width_pt > 0.0);
}

#[test]
fn sans_setting_changes_rendered_font() {
    let mut config = Config::compiled_default();
    let surface = ChangelogSurface::new(None, Some(RELEASE_NOTES), &config.surface, || {}).unwrap();

    config.font.sans = true;
    let sans = whatsnew::surface_to_svg(&surface, &config).unwrap();
    config.font.sans = false;
    let serif = whatsnew::surface_to_svg(&surface, &config).unwrap();

    assert_ne!(sans.pages, serif.pages);
}
