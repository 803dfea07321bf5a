//! Application state for the segue server.

use segue_core::Runnable;

use crate::agui::AguiAdapter;

/// Shared application state containing the run adapter.
///
/// This state is cloned for each request handler and provides access to the
/// shared runnable through its adapter.
#[derive(Clone)]
pub struct AppState {
    /// The shared adapter over the configured runnable.
    pub adapter: AguiAdapter<dyn Runnable>,
}

impl AppState {
    /// Create new application state from an adapter.
    pub fn new(adapter: AguiAdapter<dyn Runnable>) -> Self {
        Self { adapter }
    }
}
