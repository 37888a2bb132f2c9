//! Application state for the web layer.

use std::sync::Arc;

use crate::gds::GdsClient;

/// Shared application state.
///
/// `gds` is `None` when no API key was configured at startup; the
/// schedules endpoint then fails with a configuration error without
/// touching the network.
#[derive(Clone)]
pub struct AppState {
    pub gds: Option<Arc<GdsClient>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(gds: Option<GdsClient>) -> Self {
        Self {
            gds: gds.map(Arc::new),
        }
    }
}
