//! Row validation and sentinel normalization.

use lake_common::sentinel::NULL_SENTINEL;

use crate::table::{RawTable, cell_is_empty};

/// Drops fully-empty rows and replaces missing cells with the sentinel.
///
/// Pure and total: a raw table always comes out the other side, possibly
/// with zero rows. After this pass no cell is absent, which is the bronze
/// contract downstream stages rely on.
pub fn normalize_table(table: RawTable) -> RawTable {
    let mut normalized = RawTable::new(table.columns);
    for row in table.rows {
        if row.iter().all(cell_is_empty) {
            continue;
        }
        let filled = row
            .into_iter()
            .map(|cell| {
                if cell_is_empty(&cell) {
                    Some(NULL_SENTINEL.to_string())
                } else {
                    cell
                }
            })
            .collect();
        normalized.push_row(filled);
    }
    normalized
}
