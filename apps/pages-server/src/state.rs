//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::document::DocumentStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    store: Box<dyn DocumentStore>,
}

impl AppState {
    /// Create a new application state around an already bootstrapped store
    pub fn new(config: Config, store: Box<dyn DocumentStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the document store
    pub fn store(&self) -> &dyn DocumentStore {
        self.inner.store.as_ref()
    }
}
