//! Error types for bronze-stage ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a source into a raw table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Failed to read a source file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a bronze file.
    #[error("failed to write bronze file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Delimited Parsing Errors ===
    /// Neither the comma nor the tab delimiter produced a parseable table.
    #[error("failed to parse {path} with comma or tab delimiter: {message}")]
    StructuralParse { path: PathBuf, message: String },

    /// A csv record could not be serialized on output.
    #[error("failed to serialize bronze record for {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },

    // === SQL Recovery Errors ===
    /// The embedded engine could not execute the script.
    #[error("sql execution failed for {path}: {message}")]
    SqlExecution { path: PathBuf, message: String },

    /// The script executed but defined zero base tables.
    #[error("no tables produced by sql script {path}")]
    NoTablesProduced { path: PathBuf },

    /// Neither a full INSERT statement nor bare VALUES tuples were found.
    #[error("no INSERT/VALUES statements found in {path}")]
    NoInsertsFound { path: PathBuf },

    /// All recovery strategies for a source were exhausted.
    #[error("all recovery strategies failed for {path}: {message}")]
    StrategiesExhausted { path: PathBuf, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
