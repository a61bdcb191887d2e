//! Server application state shared across handlers

use crate::config::KitConfig;
use crate::file_storage::ArtifactStore;
use crate::shutdown::ShutdownState;
use crate::text_source::TextSource;
use std::sync::Arc;

/// Shared state for the server. Cloned per request; everything inside is
/// reference counted.
#[derive(Clone)]
pub struct ServerAppState {
    /// Loaded configuration (provider limits, public base URL)
    pub config: Arc<KitConfig>,

    /// Where artifacts are written and served from
    pub store: Arc<ArtifactStore>,

    /// Generative-text provider. Blocking; only called from the blocking pool.
    pub source: Arc<dyn TextSource>,

    /// Shutdown state
    pub shutdown_state: ShutdownState,
}

impl ServerAppState {
    pub fn new(
        config: KitConfig,
        store: ArtifactStore,
        source: Arc<dyn TextSource>,
        shutdown_state: ShutdownState,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            source,
            shutdown_state,
        }
    }

    /// Absolute download link for an artifact name
    pub fn download_url(&self, name: &str) -> String {
        format!("{}/download/{}", self.config.server.public_base_url(), name)
    }
}
