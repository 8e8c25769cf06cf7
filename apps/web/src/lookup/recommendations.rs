use std::cmp::Ordering;

use anyhow::anyhow;
use serde::Serialize;
use tracing::warn;

use crate::data::models::{RecommendationEdge, EDGE_CANDIDATE_ID, EDGE_JOB_ID, EDGE_SCORE};
use crate::data::table::{Row, Table};
use crate::errors::AppError;
use crate::locale::{JOB_DISPLAY_COLUMNS, URL_COLUMN};

/// A job column that survived the allow-list filter.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DisplayColumn {
    pub column: &'static str,
    pub label: &'static str,
    pub is_link: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendedJob {
    pub job_position: usize,
    pub hybrid_score: f64,
    /// One entry per `RecommendationList::columns`, same order.
    pub values: Vec<Option<String>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationList {
    pub candidate_id: u64,
    pub columns: Vec<DisplayColumn>,
    pub jobs: Vec<RecommendedJob>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationLookup {
    Found(RecommendationList),
    NoRecommendations,
}

/// Collects the candidate's edges, ranks them by score (highest first, stable)
/// and joins each one to its job row.
///
/// Edge cells are parsed here, not at load time: rows of other candidates are
/// never inspected beyond their `candidate_id`, and a blank or missing score
/// reads as NaN. Every job position is checked against the job table before any
/// row is read; a single out-of-range position fails the whole lookup with
/// `InvalidReference`.
pub fn recommend(
    candidate_id: u64,
    jobs: &Table,
    edges: &Table,
) -> Result<RecommendationLookup, AppError> {
    let mut matching = candidate_edges(candidate_id, edges)?;

    if matching.is_empty() {
        return Ok(RecommendationLookup::NoRecommendations);
    }

    matching.sort_by(|a, b| by_score_desc(a.hybrid_score, b.hybrid_score));

    let resolved = matching
        .iter()
        .map(|edge| resolve_job(jobs, edge).map(|(position, row)| (edge, position, row)))
        .collect::<Result<Vec<_>, _>>()?;

    let columns: Vec<DisplayColumn> = JOB_DISPLAY_COLUMNS
        .iter()
        .filter(|(column, _)| jobs.has_column(column))
        .map(|&(column, label)| DisplayColumn {
            column,
            label,
            is_link: column == URL_COLUMN,
        })
        .collect();

    let ranked = resolved
        .into_iter()
        .map(|(edge, job_position, row)| RecommendedJob {
            job_position,
            hybrid_score: edge.hybrid_score,
            values: columns
                .iter()
                .map(|c| row.get(c.column).map(str::to_string))
                .collect(),
        })
        .collect();

    Ok(RecommendationLookup::Found(RecommendationList {
        candidate_id,
        columns,
        jobs: ranked,
    }))
}

/// Parses the edge rows that belong to `candidate_id`, in file order.
fn candidate_edges(
    candidate_id: u64,
    edges: &Table,
) -> Result<Vec<RecommendationEdge>, AppError> {
    for column in [EDGE_CANDIDATE_ID, EDGE_JOB_ID] {
        if !edges.has_column(column) {
            return Err(anyhow!("Recommendation table has no '{column}' column").into());
        }
    }
    if !edges.has_column(EDGE_SCORE) {
        warn!("Recommendation table has no '{EDGE_SCORE}' column; keeping file order");
    }

    let Ok(target) = i64::try_from(candidate_id) else {
        return Ok(Vec::new());
    };

    edges
        .rows()
        .filter(|row| row.get(EDGE_CANDIDATE_ID).and_then(parse_whole) == Some(target))
        .map(|row| -> Result<RecommendationEdge, AppError> {
            let raw_job = row.get(EDGE_JOB_ID);
            let expanded_job_id = raw_job.and_then(parse_whole).ok_or_else(|| {
                anyhow!(
                    "Edge for candidate {candidate_id} has a non-integer {EDGE_JOB_ID} '{}'",
                    raw_job.unwrap_or_default()
                )
            })?;
            let hybrid_score = row
                .get(EDGE_SCORE)
                .and_then(|raw| raw.parse::<f64>().ok())
                .unwrap_or(f64::NAN);
            Ok(RecommendationEdge {
                candidate_id,
                expanded_job_id,
                hybrid_score,
            })
        })
        .collect()
}

/// Integer cell value. Accepts float spellings of whole numbers such as `2.0`,
/// which is how pandas writes integer columns that once held NaN.
fn parse_whole(raw: &str) -> Option<i64> {
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    let value = raw.parse::<f64>().ok()?;
    (value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64)
        .then_some(value as i64)
}

fn resolve_job<'a>(
    jobs: &'a Table,
    edge: &RecommendationEdge,
) -> Result<(usize, Row<'a>), AppError> {
    usize::try_from(edge.expanded_job_id)
        .ok()
        .and_then(|position| jobs.row(position).map(|row| (position, row)))
        .ok_or_else(|| AppError::InvalidReference {
            candidate_id: edge.candidate_id,
            job_position: edge.expanded_job_id,
            job_count: jobs.len(),
        })
}

/// Descending by score; NaN sorts after every real score.
fn by_score_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOBS: &str = "\
Job_Name,Company_name,Location,Salary,URL
Job 0,Co 0,Ha Noi,10,https://jobs.example/0
Job 1,Co 1,Hue,20,https://jobs.example/1
Job 2,Co 2,Da Nang,30,https://jobs.example/2
Job 3,Co 3,Can Tho,40,https://jobs.example/3
Job 4,Co 4,Vinh,50,https://jobs.example/4
";

    fn table(src: &str) -> Table {
        Table::from_reader(src.as_bytes()).unwrap()
    }

    /// Edge table from `candidate,job,score` lines under the standard header.
    fn edges(rows: &str) -> Table {
        table(&format!("candidate_id,expanded_job_id,hybrid_score\n{rows}"))
    }

    fn found(lookup: RecommendationLookup) -> RecommendationList {
        match lookup {
            RecommendationLookup::Found(list) => list,
            RecommendationLookup::NoRecommendations => panic!("expected recommendations"),
        }
    }

    fn positions(list: &RecommendationList) -> Vec<usize> {
        list.jobs.iter().map(|j| j.job_position).collect()
    }

    #[test]
    fn test_higher_score_first() {
        let list = found(recommend(7, &table(JOBS), &edges("7,4,0.9\n7,1,0.95\n")).unwrap());

        assert_eq!(positions(&list), vec![1, 4]);
        assert_eq!(list.jobs[0].values[0].as_deref(), Some("Job 1"));
        assert_eq!(list.jobs[1].values[0].as_deref(), Some("Job 4"));
    }

    #[test]
    fn test_only_candidate_edges_are_used() {
        let edges = edges("1,0,0.1\n2,3,0.4\n1,2,0.3\n");
        let list = found(recommend(1, &table(JOBS), &edges).unwrap());
        assert_eq!(positions(&list), vec![2, 0]);
    }

    #[test]
    fn test_ties_keep_file_order() {
        let edges = edges("0,3,0.5\n0,0,0.7\n0,1,0.5\n0,2,0.5\n");
        let list = found(recommend(0, &table(JOBS), &edges).unwrap());
        assert_eq!(positions(&list), vec![0, 3, 1, 2]);
    }

    #[test]
    fn test_sorted_descending_and_one_row_per_edge() {
        let edges = edges("3,2,0.1\n3,4,0.8\n3,2,0.6\n3,0,0.3\n");
        let list = found(recommend(3, &table(JOBS), &edges).unwrap());

        assert_eq!(list.jobs.len(), 4);
        assert!(list
            .jobs
            .windows(2)
            .all(|w| w[0].hybrid_score >= w[1].hybrid_score));
    }

    #[test]
    fn test_nan_scores_go_last() {
        let edges = edges("0,1,NaN\n0,2,0.2\n0,3,-1.0\n");
        let list = found(recommend(0, &table(JOBS), &edges).unwrap());
        assert_eq!(positions(&list), vec![2, 3, 1]);
    }

    #[test]
    fn test_blank_score_reads_as_nan() {
        let edges = edges("0,1,\n0,2,0.2\n0,4,oops\n0,3,0.9\n");
        let list = found(recommend(0, &table(JOBS), &edges).unwrap());
        assert_eq!(positions(&list), vec![3, 2, 1, 4]);
        assert!(list.jobs[2].hybrid_score.is_nan());
    }

    #[test]
    fn test_missing_score_column_keeps_file_order() {
        let edges = table("candidate_id,expanded_job_id\n0,3\n0,1\n4,2\n0,4\n");
        let list = found(recommend(0, &table(JOBS), &edges).unwrap());
        assert_eq!(positions(&list), vec![3, 1, 4]);
    }

    #[test]
    fn test_float_spelled_positions_and_ids() {
        let edges = edges("0.0,2.0,0.5\n0,4,0.6\n");
        let list = found(recommend(0, &table(JOBS), &edges).unwrap());
        assert_eq!(positions(&list), vec![4, 2]);
    }

    #[test]
    fn test_bad_row_only_affects_its_candidate() {
        let edges = edges("5,abc,0.9\n0,2,0.5\nxyz,1,0.4\n");

        let list = found(recommend(0, &table(JOBS), &edges).unwrap());
        assert_eq!(positions(&list), vec![2]);

        let err = recommend(5, &table(JOBS), &edges).unwrap_err();
        assert!(matches!(err, AppError::Unexpected(_)));
        assert!(err.to_string().contains("non-integer expanded_job_id 'abc'"));
    }

    #[test]
    fn test_missing_key_column_is_unexpected() {
        let edges = table("candidate_id,hybrid_score\n0,0.5\n");
        assert!(matches!(
            recommend(0, &table(JOBS), &edges),
            Err(AppError::Unexpected(_))
        ));
    }

    #[test]
    fn test_no_edges_is_no_recommendations() {
        assert_eq!(
            recommend(9, &table(JOBS), &edges("1,0,0.5\n")).unwrap(),
            RecommendationLookup::NoRecommendations
        );
        assert_eq!(
            recommend(9, &table(JOBS), &edges("")).unwrap(),
            RecommendationLookup::NoRecommendations
        );
    }

    #[test]
    fn test_out_of_range_position_is_invalid_reference() {
        match recommend(2, &table(JOBS), &edges("2,1,0.3\n2,99,0.8\n")) {
            Err(AppError::InvalidReference {
                candidate_id,
                job_position,
                job_count,
            }) => {
                assert_eq!(candidate_id, 2);
                assert_eq!(job_position, 99);
                assert_eq!(job_count, 5);
            }
            other => panic!("expected InvalidReference, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_position_is_invalid_reference() {
        assert!(matches!(
            recommend(2, &table(JOBS), &edges("2,-1,0.3\n")),
            Err(AppError::InvalidReference { job_position: -1, .. })
        ));
    }

    #[test]
    fn test_absent_columns_dropped_from_allow_list() {
        let jobs = table("Job_Name,Salary,Benefits\nA,10,gym\nB,20,none\n");
        let list = found(recommend(0, &jobs, &edges("0,1,0.5\n")).unwrap());

        let labels: Vec<_> = list.columns.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Tên công việc", "Mức lương"]);
        assert!(list.columns.iter().all(|c| !c.is_link));
        assert_eq!(
            list.jobs[0].values,
            vec![Some("B".to_string()), Some("20".to_string())]
        );
    }

    #[test]
    fn test_url_column_is_link() {
        let list = found(recommend(0, &table(JOBS), &edges("0,0,0.5\n")).unwrap());
        let link = list.columns.last().unwrap();
        assert_eq!(link.column, "URL");
        assert!(link.is_link);
    }

    #[test]
    fn test_parse_whole() {
        assert_eq!(parse_whole("7"), Some(7));
        assert_eq!(parse_whole("7.0"), Some(7));
        assert_eq!(parse_whole("-1"), Some(-1));
        assert_eq!(parse_whole("7.5"), None);
        assert_eq!(parse_whole("NaN"), None);
        assert_eq!(parse_whole(""), None);
    }
}
