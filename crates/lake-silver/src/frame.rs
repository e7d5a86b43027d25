//! Bronze frame loading.

use std::path::{Path, PathBuf};

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

use lake_common::sentinel::BRONZE_SUFFIX;

use crate::error::{Result, SilverError};

/// Path of a bronze table inside the bronze directory.
pub fn bronze_file(bronze_dir: &Path, base: &str) -> PathBuf {
    bronze_dir.join(format!("{base}{BRONZE_SUFFIX}"))
}

/// Reads one bronze table into a DataFrame with schema inference.
///
/// A missing file is fatal: silver runs against a fixed, known set of
/// bronze tables, so absence means the bronze stage did not deliver its
/// contract.
pub fn read_bronze_frame(bronze_dir: &Path, base: &str) -> Result<DataFrame> {
    let path = bronze_file(bronze_dir, base);
    if !path.is_file() {
        return Err(SilverError::MissingBronze { path });
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.clone()))?
        .finish()?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "bronze frame loaded"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn reads_bronze_with_inferred_schema() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clientes_bronze.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "codigo,nombre\n1,Ana\n2,Luis\n").unwrap();

        let df = read_bronze_frame(dir.path(), "clientes").unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn missing_bronze_is_fatal() {
        let dir = TempDir::new().unwrap();
        let error = read_bronze_frame(dir.path(), "clientes").unwrap_err();
        assert!(matches!(error, SilverError::MissingBronze { .. }));
    }
}
