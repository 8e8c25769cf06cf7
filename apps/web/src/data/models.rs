use std::path::PathBuf;

use crate::data::table::{Row, Table};

/// Locations of the three input tables. Doubles as the load-cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataPaths {
    pub candidates: PathBuf,
    pub jobs: PathBuf,
    pub recommendations: PathBuf,
}

impl DataPaths {
    pub fn all(&self) -> Vec<PathBuf> {
        vec![
            self.candidates.clone(),
            self.jobs.clone(),
            self.recommendations.clone(),
        ]
    }
}

/// Candidate table with an identifier assigned to every row at load time.
/// The identifier is the row's zero-based position in the source file.
#[derive(Debug, Clone)]
pub struct CandidateTable {
    table: Table,
    candidate_ids: Vec<u64>,
}

impl CandidateTable {
    pub fn new(table: Table) -> Self {
        let candidate_ids = (0..table.len() as u64).collect();
        Self {
            table,
            candidate_ids,
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn candidates(&self) -> impl Iterator<Item = Candidate<'_>> {
        self.candidate_ids
            .iter()
            .zip(self.table.rows())
            .map(|(&candidate_id, row)| Candidate { candidate_id, row })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub candidate_id: u64,
    pub row: Row<'a>,
}

pub const EDGE_CANDIDATE_ID: &str = "candidate_id";
pub const EDGE_JOB_ID: &str = "expanded_job_id";
pub const EDGE_SCORE: &str = "hybrid_score";

/// One (candidate, job position, score) tuple from the upstream ranking pipeline,
/// parsed from an edge row when a candidate's recommendations are requested.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationEdge {
    pub candidate_id: u64,
    pub expanded_job_id: i64,
    pub hybrid_score: f64,
}

/// The three loaded tables. Immutable once built; shared behind `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub candidates: CandidateTable,
    pub jobs: Table,
    /// Raw edge rows. Cells are parsed per lookup, so a bad row only affects
    /// the candidate it belongs to.
    pub edges: Table,
}
