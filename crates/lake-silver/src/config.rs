//! Silver pipeline configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The fixed, known set of bronze inputs and rules for a silver run.
///
/// Defaults mirror the production sales dataset: the primary table carries
/// customer master data (including the birth-date column), the secondary
/// carries per-customer session info keyed by `codigo_cliente`, and
/// `clientes_extra` is excluded because its bronze output is a known
/// single-column degenerate table. The exclusion is a fixed list, not a
/// data-quality check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SilverConfig {
    /// Directory holding the bronze files.
    pub bronze_dir: PathBuf,
    /// Output directory; fully overwritten each run.
    pub silver_dir: PathBuf,
    /// Base name of the primary bronze table.
    pub primary: String,
    /// Base name of the secondary bronze table.
    pub secondary: String,
    /// Bronze base names that are never fed into the join.
    pub excluded: Vec<String>,
    /// Join key column name as it appears in the primary table.
    pub join_key: String,
    /// The secondary table's key column, renamed to `join_key` before joining.
    pub secondary_key: String,
    /// Columns parsed as dates, exempt from null imputation.
    pub date_columns: Vec<String>,
}

impl SilverConfig {
    pub fn new(bronze_dir: impl Into<PathBuf>, silver_dir: impl Into<PathBuf>) -> Self {
        Self {
            bronze_dir: bronze_dir.into(),
            silver_dir: silver_dir.into(),
            primary: "clientes".to_string(),
            secondary: "clientes_info".to_string(),
            excluded: vec!["clientes_extra".to_string()],
            join_key: "codigo".to_string(),
            secondary_key: "codigo_cliente".to_string(),
            date_columns: vec!["fecha_nacimiento".to_string()],
        }
    }

    pub fn with_primary(mut self, base: impl Into<String>) -> Self {
        self.primary = base.into();
        self
    }

    pub fn with_secondary(mut self, base: impl Into<String>) -> Self {
        self.secondary = base.into();
        self
    }

    pub fn with_excluded(mut self, bases: Vec<String>) -> Self {
        self.excluded = bases;
        self
    }

    pub fn with_join_key(mut self, key: impl Into<String>) -> Self {
        self.join_key = key.into();
        self
    }

    pub fn with_secondary_key(mut self, key: impl Into<String>) -> Self {
        self.secondary_key = key.into();
        self
    }

    pub fn with_date_columns(mut self, columns: Vec<String>) -> Self {
        self.date_columns = columns;
        self
    }
}
