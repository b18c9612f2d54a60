//! Shared application state for axum handlers.

use std::sync::Arc;

use devdash_domain::dashboard::Dashboard;

/// Application state shared across all axum handlers.
///
/// The dashboard is immutable after startup, so handlers only ever read it.
#[derive(Clone)]
pub struct AppState {
    /// Page layout and link list.
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    /// Create a new application state around `dashboard`.
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Dashboard::standard())
    }
}
