//! Application state for Axum handlers.

use kontext_process::BoundedContextProcess;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub process: Arc<BoundedContextProcess>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(process: Arc<BoundedContextProcess>) -> Self {
        Self { process }
    }
}
