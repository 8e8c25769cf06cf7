use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::data::loader::load_dataset;
use crate::data::models::{DataPaths, Dataset};
use crate::errors::AppError;

/// Process-wide read-through cache of loaded datasets, keyed by the path triple.
///
/// A key is populated at most once: loads happen outside the lock and the first
/// finished load wins, so racing callers all end up holding the same `Arc`.
/// Failed loads are not cached.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: RwLock<HashMap<DataPaths, Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached dataset for `paths`, reading the files on a miss.
    /// Blocks on file I/O; call from `spawn_blocking` in async code.
    pub fn get_or_load(&self, paths: &DataPaths) -> Result<Arc<Dataset>, AppError> {
        if let Some(dataset) = self.entries.read().get(paths) {
            debug!("Dataset cache hit");
            return Ok(Arc::clone(dataset));
        }

        info!(
            candidates = %paths.candidates.display(),
            jobs = %paths.jobs.display(),
            recommendations = %paths.recommendations.display(),
            "Dataset cache miss, loading from disk"
        );
        let loaded = Arc::new(load_dataset(paths)?);

        let mut entries = self.entries.write();
        Ok(Arc::clone(entries.entry(paths.clone()).or_insert(loaded)))
    }

    /// Drops the entry for `paths`; the next lookup re-reads the files.
    pub fn invalidate(&self, paths: &DataPaths) -> bool {
        self.entries.write().remove(paths).is_some()
    }

    /// Number of path triples currently held.
    pub fn entry_count(&self) -> usize {
        self.entries.read().len()
    }
}
