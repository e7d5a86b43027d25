//! Bronze persistence and the per-source ingestion runner.

use std::fs;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::{error, info};

use lake_common::sentinel::BRONZE_SUFFIX;

use crate::dispatch::read_source;
use crate::error::{IngestError, Result};
use crate::source::SourceDescriptor;
use crate::table::RawTable;
use crate::validate::normalize_table;

/// Outcome of one source's trip through the bronze stage.
#[derive(Debug)]
pub enum SourceStatus {
    Written {
        rows: usize,
        columns: usize,
        path: PathBuf,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug)]
pub struct SourceReport {
    pub source: SourceDescriptor,
    pub status: SourceStatus,
}

/// Report for a whole bronze batch, one entry per source in input order.
#[derive(Debug, Default)]
pub struct BronzeReport {
    pub sources: Vec<SourceReport>,
}

impl BronzeReport {
    pub fn failure_count(&self) -> usize {
        self.sources
            .iter()
            .filter(|r| matches!(r.status, SourceStatus::Failed { .. }))
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }
}

/// Target bronze path for a source: `<dir>/<base>_bronze.csv`.
pub fn bronze_path(bronze_dir: &Path, source: &SourceDescriptor) -> PathBuf {
    bronze_dir.join(format!("{}{BRONZE_SUFFIX}", source.base_name()))
}

/// Serializes a normalized table to its bronze file.
///
/// The write goes to a sibling temp file first and is renamed over the
/// target, so a crash mid-write never leaves a partial bronze file behind.
/// An existing file of the same name is overwritten.
pub fn write_bronze(table: &RawTable, target: &Path) -> Result<PathBuf> {
    let tmp_path = target.with_extension("csv.tmp");
    let mut writer = WriterBuilder::new()
        .from_path(&tmp_path)
        .map_err(|e| IngestError::CsvWrite {
            path: target.to_path_buf(),
            message: e.to_string(),
        })?;

    writer
        .write_record(&table.columns)
        .map_err(|e| IngestError::CsvWrite {
            path: target.to_path_buf(),
            message: e.to_string(),
        })?;
    for row in &table.rows {
        let record: Vec<&str> = row.iter().map(|cell| cell.as_deref().unwrap_or("")).collect();
        writer
            .write_record(&record)
            .map_err(|e| IngestError::CsvWrite {
                path: target.to_path_buf(),
                message: e.to_string(),
            })?;
    }
    writer.flush().map_err(|e| IngestError::FileWrite {
        path: target.to_path_buf(),
        source: e,
    })?;
    drop(writer);

    fs::rename(&tmp_path, target).map_err(|e| IngestError::FileWrite {
        path: target.to_path_buf(),
        source: e,
    })?;
    Ok(target.to_path_buf())
}

/// Runs every source through read → validate → write, independently.
///
/// A source's failure is caught, logged with the offending path and cause,
/// and recorded in the report; it never aborts the rest of the batch. The
/// completion line is emitted regardless of partial failures.
pub fn ingest_sources(descriptors: &[SourceDescriptor], bronze_dir: &Path) -> Result<BronzeReport> {
    fs::create_dir_all(bronze_dir).map_err(|e| IngestError::FileWrite {
        path: bronze_dir.to_path_buf(),
        source: e,
    })?;

    let mut report = BronzeReport::default();
    for descriptor in descriptors {
        let status = match ingest_one(descriptor, bronze_dir) {
            Ok((table, path)) => {
                info!(
                    source = %descriptor.path.display(),
                    rows = table.height(),
                    output = %path.display(),
                    "bronze table written"
                );
                SourceStatus::Written {
                    rows: table.height(),
                    columns: table.width(),
                    path,
                }
            }
            Err(err) => {
                error!(
                    source = %descriptor.path.display(),
                    error = %err,
                    "source failed, continuing with remaining sources"
                );
                SourceStatus::Failed {
                    error: err.to_string(),
                }
            }
        };
        report.sources.push(SourceReport {
            source: descriptor.clone(),
            status,
        });
    }

    info!(
        sources = report.sources.len(),
        failures = report.failure_count(),
        "bronze load complete"
    );
    Ok(report)
}

fn ingest_one(descriptor: &SourceDescriptor, bronze_dir: &Path) -> Result<(RawTable, PathBuf)> {
    let table = normalize_table(read_source(descriptor)?);
    let path = write_bronze(&table, &bronze_path(bronze_dir, descriptor))?;
    Ok((table, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{content}").unwrap();
        path
    }

    #[test]
    fn empty_row_is_dropped_before_writing() {
        let dir = TempDir::new().unwrap();
        let source = write_file(dir.path(), "clientes_info.csv", "id,name\n1,Ana\n,\n");
        let bronze_dir = dir.path().join("bronze");

        let report = ingest_sources(&[SourceDescriptor::new(source)], &bronze_dir).unwrap();
        assert!(!report.has_failures());

        let written = std::fs::read_to_string(bronze_dir.join("clientes_info_bronze.csv")).unwrap();
        assert_eq!(written, "id,name\n1,Ana\n");
    }

    #[test]
    fn reingest_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let source = write_file(dir.path(), "data.csv", "a,b\n1,\n2,x\n");
        let bronze_dir = dir.path().join("bronze");
        let descriptors = [SourceDescriptor::new(source)];

        ingest_sources(&descriptors, &bronze_dir).unwrap();
        let first = std::fs::read_to_string(bronze_dir.join("data_bronze.csv")).unwrap();
        ingest_sources(&descriptors, &bronze_dir).unwrap();
        let second = std::fs::read_to_string(bronze_dir.join("data_bronze.csv")).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, "a,b\n1,NULL\n2,x\n");
    }

    #[test]
    fn one_bad_source_does_not_block_the_rest() {
        let dir = TempDir::new().unwrap();
        let good = write_file(dir.path(), "good.csv", "a,b\n1,2\n");
        let bad = dir.path().join("missing.csv");
        let bronze_dir = dir.path().join("bronze");

        let report = ingest_sources(
            &[SourceDescriptor::new(bad), SourceDescriptor::new(good)],
            &bronze_dir,
        )
        .unwrap();

        assert_eq!(report.failure_count(), 1);
        assert!(matches!(report.sources[0].status, SourceStatus::Failed { .. }));
        assert!(bronze_dir.join("good_bronze.csv").exists());
    }

    #[test]
    fn no_temp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let source = write_file(dir.path(), "data.csv", "a\n1\n");
        let bronze_dir = dir.path().join("bronze");
        ingest_sources(&[SourceDescriptor::new(source)], &bronze_dir).unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(&bronze_dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
