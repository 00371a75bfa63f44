//! Shared application state.

use crate::config::ConfigV1;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Holds only immutable configuration; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
}
