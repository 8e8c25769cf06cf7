use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data::DataPaths;

pub const DEFAULT_CANDIDATE_PATH: &str = "processed_candidate.csv";
pub const DEFAULT_JOB_PATH: &str = "df_job_processed.csv";
pub const DEFAULT_EXPANDED_PATH: &str = "expanded_df.csv";

/// Application configuration loaded from environment variables.
/// Every variable is optional; the data paths default to files in the working directory.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub data_paths: DataPaths,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            data_paths: DataPaths {
                candidates: path_env("CANDIDATE_PATH", DEFAULT_CANDIDATE_PATH),
                jobs: path_env("JOB_PATH", DEFAULT_JOB_PATH),
                recommendations: path_env("EXPANDED_PATH", DEFAULT_EXPANDED_PATH),
            },
        })
    }
}

fn path_env(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}
