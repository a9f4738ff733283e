//! Application state for the severance calculator API.
//!
//! The only shared state is the loaded configuration. Calculations hold no
//! state, so handlers need nothing else.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
