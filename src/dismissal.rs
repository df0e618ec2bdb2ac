use log::trace;
use serde::Serialize;

/// Presentation state of a dismissible surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissalState {
    Open,
    Closing,
}

/// Defers removal of a surface until its exit transition has finished.
///
/// `request_close` moves the surface into `Closing`. The removal callback runs
/// on the first `on_transition_finished` after that, and never again.
/// Transition signals that arrive while still `Open` belong to some other
/// animation and are ignored.
pub struct DismissalController<F: FnOnce()> {
    state: DismissalState,
    on_remove: Option<F>,
}

impl<F: FnOnce()> DismissalController<F> {
    pub fn new(on_remove: F) -> Self {
        Self {
            state: DismissalState::Open,
            on_remove: Some(on_remove),
        }
    }

    pub fn state(&self) -> DismissalState {
        self.state
    }

    /// Whether the removal callback has already run.
    pub fn is_removed(&self) -> bool {
        self.on_remove.is_none()
    }

    /// Start closing. Repeated requests are no-ops.
    pub fn request_close(&mut self) {
        if self.state == DismissalState::Open {
            trace!("dismissal: open -> closing");
            self.state = DismissalState::Closing;
        }
    }

    /// Signal that a visual transition on the surface has completed.
    pub fn on_transition_finished(&mut self) {
        if self.state != DismissalState::Closing {
            trace!("dismissal: ignoring transition end while open");
            return;
        }
        if let Some(on_remove) = self.on_remove.take() {
            trace!("dismissal: exit transition finished, removing surface");
            on_remove();
        }
    }
}

impl<F: FnOnce()> std::fmt::Debug for DismissalController<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DismissalController")
            .field("state", &self.state)
            .field("removed", &self.is_removed())
            .finish()
    }
}
