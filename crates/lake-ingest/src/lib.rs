//! Bronze-stage ingestion for the data lake.
//!
//! This crate turns heterogeneous raw source files (delimited text,
//! fixed-layout text, SQL dump scripts) into canonical per-source bronze
//! tables. Formats are detected from the filename suffix; parsing degrades
//! gracefully through a cascade of strategies instead of failing outright.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use lake_ingest::{enumerate_sources, ingest_sources};
//!
//! let sources = enumerate_sources(Path::new("lidl_project"))?;
//! let report = ingest_sources(&sources, Path::new("DATALAKE/bronze/ventas"))?;
//! for entry in &report.sources {
//!     println!("{:?}", entry.status);
//! }
//! ```

mod bronze;
mod delimited;
mod dispatch;
mod error;
mod source;
mod sql;
mod strategy;
mod table;
mod validate;

// === Error Types ===
pub use error::{IngestError, Result};

// === Sources ===
pub use source::{SourceDescriptor, SourceShape, enumerate_sources};

// === Raw Tables ===
pub use table::{RawTable, cell_is_empty};

// === Readers ===
pub use delimited::{read_delimited, read_fixed_layout};
pub use dispatch::read_source;
pub use sql::{engine::extract_first_table, literal::parse_inserts, recover_table};

// === Strategy Chain ===
pub use strategy::{Strategy, run_chain};

// === Validation & Bronze Output ===
pub use bronze::{BronzeReport, SourceReport, SourceStatus, bronze_path, ingest_sources, write_bronze};
pub use validate::normalize_table;
