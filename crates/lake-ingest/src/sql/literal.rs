//! Textual-pattern fallback for SQL scripts the engine cannot execute.
//!
//! Recovery is best effort by design: the goal is to get *one* plausible
//! table out of a dump written for some other dialect, not to execute the
//! script faithfully.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use lake_common::sentinel::SYNTHETIC_COLUMN_PREFIX;

use crate::error::{IngestError, Result};
use crate::table::RawTable;

/// First fully-specified `INSERT INTO name (cols) VALUES ...;` statement.
static FULL_INSERT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)INSERT\s+INTO\s+[`"]?(\w+)[`"]?\s*\(([^)]+)\)\s*VALUES\s*(.+);"#)
        .expect("valid insert regex")
});

/// Parenthesized tuples inside a VALUES clause. The end-of-input
/// alternative covers the final tuple, whose terminating semicolon was
/// already consumed by [`FULL_INSERT`].
static TUPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\((.*?)\)\s*(?:,|;|$)").expect("valid tuple regex"));

/// Bare `VALUES (...)` occurrences when no column list is available.
static BARE_VALUES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)VALUES\s*\((.*?)\)\s*[,;]").expect("valid values regex"));

/// Splits a VALUES tuple on commas that are not inside a quoted string.
///
/// A comma is a separator only when the number of single-quote characters
/// seen so far, from the tuple's start, is even. Surrounding single or
/// double quotes are then stripped from each field.
pub fn split_tuple(tuple: &str) -> Vec<Option<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quote_count = 0usize;
    for ch in tuple.chars() {
        match ch {
            '\'' => {
                quote_count += 1;
                current.push(ch);
            }
            ',' if quote_count % 2 == 0 => {
                fields.push(std::mem::take(&mut current));
                continue;
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
        .into_iter()
        .map(|field| {
            let stripped = field.trim().trim_matches(['\'', '"']);
            if stripped.is_empty() {
                None
            } else {
                Some(stripped.to_string())
            }
        })
        .collect()
}

fn normalize_row(mut row: Vec<Option<String>>, width: usize) -> Vec<Option<String>> {
    row.truncate(width);
    row.resize(width, None);
    row
}

fn table_from_declared(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> RawTable {
    // The column list is truncated to the first row's width. Tuples wider or
    // narrower than the header are padded/truncated instead of rejected;
    // heterogeneous dumps may end up misaligned, which is a documented
    // limitation of this recovery path.
    let width = rows.first().map_or(columns.len(), Vec::len).min(columns.len());
    let mut table = RawTable::new(columns.into_iter().take(width).collect());
    for row in rows {
        table.push_row(normalize_row(row, width));
    }
    table
}

/// Recovers a table from `INSERT ... VALUES` text patterns.
///
/// Tries the fully-specified form first (declared column names become the
/// schema), then falls back to bare `VALUES (...)` tuples with synthesized
/// `col_1..col_N` names sized to the widest tuple.
pub fn parse_inserts(path: &Path, text: &str) -> Result<RawTable> {
    if let Some(caps) = FULL_INSERT.captures(text) {
        let columns: Vec<String> = caps[2]
            .split(',')
            .map(|c| c.trim().trim_matches(['`', '"', '\'']).to_string())
            .collect();
        let rows: Vec<Vec<Option<String>>> = TUPLE
            .captures_iter(&caps[3])
            .map(|tuple| split_tuple(&tuple[1]))
            .collect();
        if !rows.is_empty() {
            debug!(
                path = %path.display(),
                table = &caps[1],
                rows = rows.len(),
                "recovered fully-specified insert"
            );
            return Ok(table_from_declared(columns, rows));
        }
    }

    let rows: Vec<Vec<Option<String>>> = BARE_VALUES
        .captures_iter(text)
        .map(|caps| split_tuple(&caps[1]))
        .collect();
    if rows.is_empty() {
        return Err(IngestError::NoInsertsFound {
            path: path.to_path_buf(),
        });
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let columns = (1..=width)
        .map(|i| format!("{SYNTHETIC_COLUMN_PREFIX}{i}"))
        .collect();
    let mut table = RawTable::new(columns);
    for row in rows {
        table.push_row(normalize_row(row, width));
    }
    Ok(table)
}
