//! Notifier error types

use shared::SharedError;
use thiserror::Error;

/// Result type for notifier operations
pub type NotifierResult<T> = Result<T, NotifierError>;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("invalid order: missing {field}")]
    InvalidOrder { field: String },

    #[error("shared component error")]
    Shared(#[from] SharedError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
