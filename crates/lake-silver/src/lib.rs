//! Silver-stage transformation for the data lake.
//!
//! Consumes a fixed, known set of bronze tables and produces the single
//! joined, cleaned, typed silver table: key-reconciled inner join, uniform
//! text normalization, safe date parsing, and type-conditional null
//! imputation, in that order.

mod clean;
mod config;
mod dates;
mod error;
mod frame;
mod impute;
mod join;
mod pipeline;
mod write;

// === Error Types ===
pub use error::{Result, SilverError};

// === Configuration ===
pub use config::SilverConfig;

// === Pipeline ===
pub use pipeline::{SilverSummary, run_silver};

// === Individual Stages ===
pub use clean::normalize_text;
pub use dates::parse_date_columns;
pub use frame::{bronze_file, read_bronze_frame};
pub use impute::impute_nulls;
pub use join::join_on_key;
pub use write::{SILVER_PART, write_silver};
