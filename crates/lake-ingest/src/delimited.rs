//! Delimited and fixed-layout text readers.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use lake_common::sentinel::FIXED_LAYOUT_COLUMNS;

use crate::error::{IngestError, Result};
use crate::table::RawTable;

fn cell_from_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn read_with_delimiter(path: &Path, delimiter: u8) -> std::result::Result<RawTable, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_path(path)?;
    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().trim_matches('\u{feff}').to_string())
        .collect();
    let mut table = RawTable::new(columns);
    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(cell_from_field).collect());
    }
    Ok(table)
}

/// Reads a delimited source, trying a comma first, then a tab.
///
/// The first delimiter whose read completes without a reader error wins.
/// That is a structural criterion only: a tab-separated file read with a
/// comma delimiter parses "successfully" into a single wide column and is
/// accepted as-is. When both delimiters fail, the error of the last attempt
/// is propagated.
pub fn read_delimited(path: &Path) -> Result<RawTable> {
    match read_with_delimiter(path, b',') {
        Ok(table) => Ok(table),
        Err(comma_error) => {
            debug!(
                path = %path.display(),
                error = %comma_error,
                "comma delimiter failed, trying tab"
            );
            read_with_delimiter(path, b'\t').map_err(|tab_error| IngestError::StructuralParse {
                path: path.to_path_buf(),
                message: tab_error.to_string(),
            })
        }
    }
}

/// Reads a fixed-layout `.txt` source.
///
/// Fixed-layout sources bypass detection entirely: no header row, a comma
/// delimiter, and the column names from
/// [`lake_common::sentinel::FIXED_LAYOUT_COLUMNS`] imposed by convention.
/// When the file is narrower than the imposed schema the name list is
/// truncated to the actual width; the degenerate table is passed through so
/// the failure is visible in the bronze layer rather than hidden here.
pub fn read_fixed_layout(path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .from_path(path)
        .map_err(|e| IngestError::StructuralParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    let mut width = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::StructuralParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let row: Vec<Option<String>> = record.iter().map(cell_from_field).collect();
        width = width.max(row.len());
        rows.push(row);
    }

    let columns: Vec<String> = FIXED_LAYOUT_COLUMNS
        .iter()
        .take(width.max(1))
        .map(|c| (*c).to_string())
        .collect();
    if width > FIXED_LAYOUT_COLUMNS.len() {
        return Err(IngestError::StructuralParse {
            path: path.to_path_buf(),
            message: format!(
                "fixed layout expects at most {} columns, found {width}",
                FIXED_LAYOUT_COLUMNS.len()
            ),
        });
    }

    let mut table = RawTable::new(columns);
    for mut row in rows {
        row.resize(table.width(), None);
        table.push_row(row);
    }
    Ok(table)
}
