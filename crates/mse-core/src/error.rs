//! Error types for mse-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mse-core
#[derive(Debug, Error)]
pub enum Error {
    /// A card line produced fewer fields than a card record needs
    #[error("malformed record on line {line}: expected {expected} fields, found {field_count}")]
    MalformedRecord {
        line: usize,
        field_count: usize,
        expected: usize,
    },

    /// Separator or quote setting is not a single character
    #[error("invalid {name} '{value}': must be a single character")]
    InvalidConfig { name: &'static str, value: String },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source location the converter cannot read from
    #[error("unsupported source '{0}': only local files and stdin are supported")]
    UnsupportedSource(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
