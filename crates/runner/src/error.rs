//! Runner errors

use outbreak_estimator::EstimateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read request from stdin: {0}")]
    Stdin(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No data found in request")]
    EmptyRequest,

    #[error("Estimation failed: {0}")]
    Estimate(#[from] EstimateError),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
