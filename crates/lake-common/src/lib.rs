//! Shared utilities for the data-lake crates.
//!
//! This crate provides the sentinel constants that define the bronze/silver
//! data contract, plus small parsing helpers used across the workspace.

pub mod num;
pub mod sentinel;

// Re-export commonly used functions at crate root for convenience
pub use num::{format_numeric, parse_f64, parse_i64};
pub use sentinel::{DATE_FORMAT, FIXED_LAYOUT_COLUMNS, NULL_SENTINEL, UNKNOWN_TEXT};
