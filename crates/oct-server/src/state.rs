//! Application state shared across all handlers.

use oct_compactor::Selection;
use oct_core::{OctaviaConfig, Result};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<OctaviaConfig>,
    /// Parsed `config.default_policy`.
    pub default_selection: Selection,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: Arc::new(OctaviaConfig::default()),
            default_selection: Selection::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Fails if `default_policy` names no policy.
    pub fn from_config(config: OctaviaConfig) -> Result<Self> {
        let default_selection = config.default_policy.parse()?;
        Ok(Self {
            config: Arc::new(config),
            default_selection,
            start_time: std::time::Instant::now(),
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
