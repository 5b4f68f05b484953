//! Reporter error types

use shared::SharedError;
use thiserror::Error;

/// Result type for reporter operations
pub type ReporterResult<T> = Result<T, ReporterError>;

#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("report request missing parameter: {parameter}")]
    MissingParameter { parameter: String },

    #[error("shared component error")]
    Shared(#[from] SharedError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
