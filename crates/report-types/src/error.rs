use thiserror::Error;

/// Failures at the boundary where external JSON enters the pipeline
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to decode report JSON: {0}")]
    Json(#[from] serde_json::Error),
}
