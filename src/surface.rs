use crate::block::Block;
use crate::config::SurfaceConfig;
use crate::dismissal::{DismissalController, DismissalState};
use crate::parser;

/// Visual attributes a host binds to the dismissal state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub opacity: f32,
    pub scale: f32,
}

impl Appearance {
    pub fn for_state(state: DismissalState) -> Self {
        match state {
            DismissalState::Open => Self {
                opacity: 1.0,
                scale: 1.0,
            },
            DismissalState::Closing => Self {
                opacity: 0.0,
                scale: 0.95,
            },
        }
    }
}

/// A "what's new" panel: labels, parsed release notes and the dismissal lifecycle.
pub struct ChangelogSurface<F: FnOnce()> {
    title: String,
    close_label: String,
    version_label: String,
    blocks: Vec<Block>,
    dismissal: DismissalController<F>,
}

impl<F: FnOnce()> ChangelogSurface<F> {
    /// Build the surface, or `None` when there is no changelog to show.
    ///
    /// `on_close` runs once the exit transition that follows a close request has finished.
    pub fn new(
        version: Option<&str>,
        changelog: Option<&str>,
        config: &SurfaceConfig,
        on_close: F,
    ) -> Option<Self> {
        let changelog = changelog.filter(|text| !text.is_empty())?;
        let version = version
            .filter(|v| !v.is_empty())
            .unwrap_or(config.fallback_version.as_str());

        Some(Self {
            title: config.title.clone(),
            close_label: config.close_label.clone(),
            version_label: format!("v{version}"),
            blocks: parser::parse(changelog),
            dismissal: DismissalController::new(on_close),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn close_label(&self) -> &str {
        &self.close_label
    }

    pub fn version_label(&self) -> &str {
        &self.version_label
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn state(&self) -> DismissalState {
        self.dismissal.state()
    }

    pub fn appearance(&self) -> Appearance {
        Appearance::for_state(self.state())
    }

    pub fn request_close(&mut self) {
        self.dismissal.request_close();
    }

    pub fn on_transition_finished(&mut self) {
        self.dismissal.on_transition_finished();
    }
}

impl<F: FnOnce()> std::fmt::Debug for ChangelogSurface<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangelogSurface")
            .field("version_label", &self.version_label)
            .field("blocks", &self.blocks.len())
            .field("dismissal", &self.dismissal)
            .finish_non_exhaustive()
    }
}
