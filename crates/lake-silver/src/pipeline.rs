//! The silver run: join, normalize, type, impute, persist.

use std::path::PathBuf;

use tracing::{info, info_span};

use crate::clean::normalize_text;
use crate::config::SilverConfig;
use crate::dates::parse_date_columns;
use crate::error::Result;
use crate::frame::read_bronze_frame;
use crate::impute::impute_nulls;
use crate::join::join_on_key;
use crate::write::write_silver;

/// Counts and location of a completed silver run.
#[derive(Debug)]
pub struct SilverSummary {
    pub rows: usize,
    pub columns: usize,
    pub output: PathBuf,
}

/// Runs the silver pipeline against the configured bronze set.
///
/// Only the configured primary and secondary tables are read; excluded
/// bases never enter the join. Any failure here aborts the run — silver
/// assumes the bronze schema contract holds, so errors are not recoverable
/// per-source the way bronze failures are.
pub fn run_silver(config: &SilverConfig) -> Result<SilverSummary> {
    let span = info_span!("silver");
    let _guard = span.enter();

    if !config.excluded.is_empty() {
        info!(
            excluded = ?config.excluded,
            "skipping excluded bronze tables (fixed data-quality exclusion)"
        );
    }

    let primary = read_bronze_frame(&config.bronze_dir, &config.primary)?;
    let secondary = read_bronze_frame(&config.bronze_dir, &config.secondary)?;

    let joined = join_on_key(primary, secondary, &config.join_key, &config.secondary_key)?;
    let normalized = normalize_text(joined)?;
    let dated = parse_date_columns(normalized, &config.date_columns)?;
    let mut imputed = impute_nulls(dated)?;

    let output = write_silver(&mut imputed, &config.silver_dir)?;
    info!(
        rows = imputed.height(),
        columns = imputed.width(),
        "silver run complete"
    );
    Ok(SilverSummary {
        rows: imputed.height(),
        columns: imputed.width(),
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_bronze(dir: &Path, name: &str, content: &str) {
        std::fs::create_dir_all(dir).unwrap();
        let mut file = std::fs::File::create(dir.join(name)).unwrap();
        write!(file, "{content}").unwrap();
    }

    #[test]
    fn end_to_end_silver_run() {
        let dir = TempDir::new().unwrap();
        let bronze = dir.path().join("bronze");
        let silver = dir.path().join("silver");
        write_bronze(
            &bronze,
            "clientes_bronze.csv",
            "codigo,nombre,fecha_nacimiento\n1,Ana,1990-01-01\n2,Luis,not-a-date\n",
        );
        write_bronze(
            &bronze,
            "clientes_info_bronze.csv",
            "codigo_cliente,tiempo_permanencia_min\n1,15\n2,30\n3,45\n",
        );

        let config = SilverConfig::new(&bronze, &silver);
        let summary = run_silver(&config).unwrap();

        // Row with codigo 3 has no counterpart in the primary table.
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.columns, 4);

        let content = std::fs::read_to_string(summary.output).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("codigo,nombre,fecha_nacimiento,tiempo_permanencia_min")
        );
        // Text lowercased, date typed, numeric column preserved.
        assert_eq!(lines.next(), Some("1,ana,1990-01-01,15"));
        // Unparsable date stays an empty marker, exempt from imputation.
        assert_eq!(lines.next(), Some("2,luis,,30"));
    }

    #[test]
    fn missing_bronze_aborts_the_run() {
        let dir = TempDir::new().unwrap();
        let config = SilverConfig::new(dir.path().join("bronze"), dir.path().join("silver"));
        assert!(run_silver(&config).is_err());
    }

    #[test]
    fn non_date_columns_are_never_null_after_the_run() {
        let dir = TempDir::new().unwrap();
        let bronze = dir.path().join("bronze");
        let silver = dir.path().join("silver");
        write_bronze(
            &bronze,
            "clientes_bronze.csv",
            "codigo,nombre,fecha_nacimiento\n1,NULL,1990-01-01\n",
        );
        write_bronze(
            &bronze,
            "clientes_info_bronze.csv",
            "codigo_cliente,tiempo\n1,15\n",
        );

        let config = SilverConfig::new(&bronze, &silver);
        run_silver(&config).unwrap();

        let frame = crate::frame::read_bronze_frame(&bronze, "clientes").unwrap();
        assert_eq!(frame.height(), 1);

        let content = std::fs::read_to_string(silver.join(crate::write::SILVER_PART)).unwrap();
        // Bronze's "NULL" sentinel is ordinary text after normalization.
        assert!(content.contains("1,null,1990-01-01,15"));
    }
}
