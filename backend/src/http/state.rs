//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AnalyticsConfig;

/// Shared application state passed to all handlers.
///
/// Holds read-only configuration only; each analysis builds its own data.
#[derive(Clone)]
pub struct AppState {
    /// Engine settings applied to every analysis request
    pub analytics: Arc<AnalyticsConfig>,
}

impl AppState {
    /// Create a new application state with the given engine settings.
    pub fn new(analytics: AnalyticsConfig) -> Self {
        Self {
            analytics: Arc::new(analytics),
        }
    }
}
