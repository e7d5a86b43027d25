//! The raw tabular representation produced by every reader.

/// An ordered set of rows with named columns and untyped cells.
///
/// `None` means the cell was absent or empty in the source. Raw tables are
/// ephemeral: they exist between a reader and the validator, and are never
/// persisted directly.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Option<String>>) {
        self.rows.push(row);
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Treats `None` and whitespace-only strings uniformly as missing.
pub fn cell_is_empty(cell: &Option<String>) -> bool {
    match cell {
        None => true,
        Some(value) => value.trim().is_empty(),
    }
}
