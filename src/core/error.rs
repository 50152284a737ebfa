use std::path::PathBuf;

use thiserror::Error;

use crate::integrity::IntegrityReport;

/// The primary error type for the fallible operations in this crate.
///
/// Lookups and filters never return this: an absent entity is `None` and an
/// empty selection is an empty `Vec`. Only loading a snapshot and building
/// asset URLs can fail.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The dataset file could not be read.
    #[error("failed to read inventory at {path}: {source}")]
    Io {
        /// The path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON or does not match the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data was structurally readable but unusable.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The snapshot failed integrity validation at load time.
    #[error("inventory integrity check failed: {0}")]
    Integrity(IntegrityReport),

    /// An asset URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
