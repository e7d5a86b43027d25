//! Subcommand wiring: directory layout and stage execution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use lake_ingest::{BronzeReport, enumerate_sources, ingest_sources};
use lake_silver::{SilverConfig, SilverSummary, run_silver};

use crate::cli::{BronzeArgs, RunArgs, SilverArgs};

/// Dataset area inside the lake, mirroring `<lake>/bronze/ventas` and
/// `<lake>/silver/ventas`.
const DATASET: &str = "ventas";

pub fn bronze_dir(lake_dir: &Path) -> PathBuf {
    lake_dir.join("bronze").join(DATASET)
}

pub fn silver_dir(lake_dir: &Path) -> PathBuf {
    lake_dir.join("silver").join(DATASET)
}

pub fn run_bronze(args: &BronzeArgs) -> Result<BronzeReport> {
    let span = info_span!("bronze", input = %args.input_dir.display());
    let _guard = span.enter();

    let sources = enumerate_sources(&args.input_dir)
        .with_context(|| format!("enumerate sources in {}", args.input_dir.display()))?;
    info!(sources = sources.len(), "sources enumerated");
    let report =
        ingest_sources(&sources, &bronze_dir(&args.lake_dir)).context("bronze ingestion")?;
    Ok(report)
}

pub fn run_silver_stage(args: &SilverArgs) -> Result<SilverSummary> {
    let config = silver_config(args);
    let summary = run_silver(&config).context("silver run")?;
    Ok(summary)
}

pub fn run_all(args: &RunArgs) -> Result<(BronzeReport, SilverSummary)> {
    let bronze_args = BronzeArgs {
        input_dir: args.input_dir.clone(),
        lake_dir: args.lake_dir.clone(),
    };
    let report = run_bronze(&bronze_args)?;

    let silver_args = SilverArgs {
        lake_dir: args.lake_dir.clone(),
        primary: None,
        secondary: None,
        join_key: None,
        secondary_key: None,
        date_columns: Vec::new(),
        excluded: Vec::new(),
    };
    let summary = run_silver_stage(&silver_args)?;
    Ok((report, summary))
}

fn silver_config(args: &SilverArgs) -> SilverConfig {
    let mut config = SilverConfig::new(bronze_dir(&args.lake_dir), silver_dir(&args.lake_dir));
    if let Some(primary) = &args.primary {
        config = config.with_primary(primary.clone());
    }
    if let Some(secondary) = &args.secondary {
        config = config.with_secondary(secondary.clone());
    }
    if let Some(key) = &args.join_key {
        config = config.with_join_key(key.clone());
    }
    if let Some(key) = &args.secondary_key {
        config = config.with_secondary_key(key.clone());
    }
    if !args.date_columns.is_empty() {
        config = config.with_date_columns(args.date_columns.clone());
    }
    if !args.excluded.is_empty() {
        config = config.with_excluded(args.excluded.clone());
    }
    config
}
