//! Crate error type.

use std::path::PathBuf;

use crate::style::StyleValidationError;

/// Errors from loading rows or rendering the page.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A row's id is blank; the grid needs an id to tell rows apart.
    #[error("row {index} has an empty id")]
    MissingId { index: usize },

    /// Two rows share an id.
    #[error("duplicate row id '{id}' at rows {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    /// A numeric field holds something that is not a number.
    #[error("row {index}: '{value}' is not a number for field '{field}'")]
    InvalidNumber {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not name a known data format.
    #[error("unsupported data format for {} (expected .json, .yaml, .yml or .csv)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid JSON rows: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML rows: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid CSV rows: {0}")]
    Csv(#[from] csv::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("invalid theme: {0}")]
    Style(#[from] StyleValidationError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
