//! Silver output persistence.

use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use crate::error::{Result, SilverError};

/// Name of the single CSV partition written per run.
pub const SILVER_PART: &str = "part-00000.csv";

fn io_error(path: &Path, source: std::io::Error) -> SilverError {
    SilverError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes the silver frame as a header-carrying CSV partition.
///
/// The silver directory is recreated from scratch: the output is a full
/// overwrite each run, never an incremental update.
pub fn write_silver(df: &mut DataFrame, silver_dir: &Path) -> Result<PathBuf> {
    if silver_dir.exists() {
        fs::remove_dir_all(silver_dir).map_err(|e| io_error(silver_dir, e))?;
    }
    fs::create_dir_all(silver_dir).map_err(|e| io_error(silver_dir, e))?;

    let path = silver_dir.join(SILVER_PART);
    let mut file = fs::File::create(&path).map_err(|e| io_error(&path, e))?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "silver output written"
    );
    Ok(path)
}
