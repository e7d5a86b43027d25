//! Error types for the silver stage.
//!
//! Unlike bronze, silver assumes a specific, known bronze schema contract,
//! so every error here is fatal to the run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a silver run.
#[derive(Debug, Error)]
pub enum SilverError {
    /// An expected bronze file is absent.
    #[error("expected bronze file not found: {path}")]
    MissingBronze { path: PathBuf },

    /// The join key column is absent from one of the inputs.
    #[error("join key column '{column}' not found in {table} table")]
    JoinKeyMissing { column: String, table: String },

    /// The underlying engine rejected an operation.
    #[error("engine operation failed: {0}")]
    Engine(#[from] polars::prelude::PolarsError),

    /// Filesystem failure while reading or writing silver output.
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for silver operations.
pub type Result<T> = std::result::Result<T, SilverError>;
