use std::sync::Arc;

use mhwsync_domain::Tracker;

/// Version reported by `GET /version`.
pub const API_VERSION: u32 = 2;

// =============================================================================
// AppState
// =============================================================================

/// Shared handler state.
///
/// The tracker is created once at startup and dropped with the router at
/// shutdown; cloning the state only clones the `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub tracker: Arc<Tracker>,

    pub api_version: u32,
}

impl AppState {
    #[must_use]
    pub fn new(tracker: Tracker) -> Self {
        Self::from_arc(Arc::new(tracker))
    }

    #[must_use]
    pub const fn from_arc(tracker: Arc<Tracker>) -> Self {
        Self {
            tracker,
            api_version: API_VERSION,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
