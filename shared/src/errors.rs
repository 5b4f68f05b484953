//! Shared error types for both exercise systems

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("unsupported {kind} tag: {tag}")]
    UnsupportedTag { kind: String, tag: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
