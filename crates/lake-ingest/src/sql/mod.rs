//! SQL script recovery: structured execution first, textual fallback second.

pub mod engine;
pub mod literal;

use std::path::Path;

use crate::error::Result;
use crate::strategy::{Strategy, run_chain};
use crate::table::RawTable;

/// Recovers one table from a SQL script body.
///
/// The engine failing is expected for foreign dialects, so it triggers a
/// logged fallback to literal parsing rather than a terminal error. Only
/// when the literal parser is also exhausted does the source fail.
pub fn recover_table(path: &Path, script: &str) -> Result<RawTable> {
    run_chain(
        path,
        vec![
            Strategy::new("sqlite-engine", || engine::extract_first_table(path, script)),
            Strategy::new("literal-parse", || literal::parse_inserts(path, script)),
        ],
    )
}
