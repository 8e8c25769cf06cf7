use std::sync::Arc;

use anyhow::Context;

use crate::config::Config;
use crate::data::{Dataset, DatasetCache};
use crate::errors::AppError;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded tables, keyed by the configured data paths. Shared across requests.
    pub cache: Arc<DatasetCache>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cache: Arc::new(DatasetCache::new()),
        }
    }

    /// Returns the dataset for the configured paths, reading the files on first use.
    /// File I/O and CSV parsing run on the blocking pool.
    pub async fn dataset(&self) -> Result<Arc<Dataset>, AppError> {
        let cache = Arc::clone(&self.cache);
        let paths = self.config.data_paths.clone();
        tokio::task::spawn_blocking(move || cache.get_or_load(&paths))
            .await
            .context("Dataset load task failed")?
    }
}
