use thiserror::Error;

use common::error::Error as CoreError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read graph input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed graph input at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Unknown node label: {0}")]
    UnknownLabel(String),

    #[error("Duplicate node label: {0}")]
    DuplicateLabel(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("CSV input error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Graph processing error: {0}")]
    Graph(#[from] CoreError),
}
