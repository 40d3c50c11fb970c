//! Error types for doclinks
//!
//! Only the output side can fail: the scan itself always completes and
//! always produces a report.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Root path could not be turned into a glob pattern
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize report as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
