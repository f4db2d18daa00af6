// File: crates/forest-core/src/error.rs
// Summary: Library error type shared by CSV ingestion, color parsing and payload export.

use thiserror::Error;

pub type ForestResult<T> = Result<T, ForestError>;

#[derive(Debug, Error)]
pub enum ForestError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column `{column}` (accepted headers: {accepted})")]
    MissingColumn { column: &'static str, accepted: String },

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
