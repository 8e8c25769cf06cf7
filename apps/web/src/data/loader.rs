use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use crate::data::models::{CandidateTable, DataPaths, Dataset};
use crate::data::table::Table;
use crate::errors::AppError;

/// Reads the three input tables from disk.
/// A file that does not exist is reported as `MissingInput`; every other failure is `Unexpected`.
/// No table is schema-checked here; absent columns and bad cells surface at lookup time.
pub fn load_dataset(paths: &DataPaths) -> Result<Dataset, AppError> {
    let candidate_bytes = read_file(&paths.candidates, paths)?;
    let job_bytes = read_file(&paths.jobs, paths)?;
    let edge_bytes = read_file(&paths.recommendations, paths)?;

    let candidates = Table::from_reader(candidate_bytes.as_slice())
        .with_context(|| format!("Failed to parse {}", paths.candidates.display()))?;
    let jobs = Table::from_reader(job_bytes.as_slice())
        .with_context(|| format!("Failed to parse {}", paths.jobs.display()))?;
    let edges = Table::from_reader(edge_bytes.as_slice())
        .with_context(|| format!("Failed to parse {}", paths.recommendations.display()))?;

    let candidates = CandidateTable::new(candidates);
    if candidates.is_empty() || jobs.is_empty() {
        warn!(
            candidates = candidates.len(),
            jobs = jobs.len(),
            "Loaded an empty table; every lookup will come back empty"
        );
    }
    info!(
        candidates = candidates.len(),
        jobs = jobs.len(),
        edges = edges.len(),
        "Loaded recommendation dataset"
    );

    Ok(Dataset {
        candidates,
        jobs,
        edges,
    })
}

fn read_file(path: &Path, paths: &DataPaths) -> Result<Vec<u8>, AppError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(strip_bom(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(AppError::MissingInput {
            path: path.to_path_buf(),
            expected: paths.all(),
        }),
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("Failed to read {}", path.display()))
            .into()),
    }
}

fn strip_bom(mut bytes: Vec<u8>) -> Vec<u8> {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        bytes.drain(..3);
    }
    bytes
}
