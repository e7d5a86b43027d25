//! CLI argument definitions for the data-lake ETL.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lake",
    version,
    about = "Data-lake ETL - ingest raw sources to bronze, refine bronze to silver",
    long_about = "Ingest heterogeneous raw sources (CSV, fixed-layout TXT, SQL dumps)\n\
                  into canonical bronze tables, then join and clean a fixed set of\n\
                  bronze tables into the silver dataset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest raw sources into per-source bronze tables.
    Bronze(BronzeArgs),

    /// Join and clean the configured bronze tables into the silver dataset.
    Silver(SilverArgs),

    /// Run bronze ingestion followed by the silver transformation.
    Run(RunArgs),
}

#[derive(Parser)]
pub struct BronzeArgs {
    /// Directory containing the raw source files.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Root of the data lake (default: DATALAKE).
    #[arg(long = "lake-dir", value_name = "DIR", default_value = "DATALAKE")]
    pub lake_dir: PathBuf,
}

#[derive(Parser)]
pub struct SilverArgs {
    /// Root of the data lake (default: DATALAKE).
    #[arg(long = "lake-dir", value_name = "DIR", default_value = "DATALAKE")]
    pub lake_dir: PathBuf,

    /// Base name of the primary bronze table.
    #[arg(long)]
    pub primary: Option<String>,

    /// Base name of the secondary bronze table.
    #[arg(long)]
    pub secondary: Option<String>,

    /// Join key column as named in the primary table.
    #[arg(long = "join-key")]
    pub join_key: Option<String>,

    /// The secondary table's key column, renamed before joining.
    #[arg(long = "secondary-key")]
    pub secondary_key: Option<String>,

    /// Columns parsed as dates (repeatable).
    #[arg(long = "date-column")]
    pub date_columns: Vec<String>,

    /// Bronze base names excluded from the join (repeatable).
    #[arg(long = "exclude")]
    pub excluded: Vec<String>,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Directory containing the raw source files.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Root of the data lake (default: DATALAKE).
    #[arg(long = "lake-dir", value_name = "DIR", default_value = "DATALAKE")]
    pub lake_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn silver_overrides_parse() {
        let cli = Cli::try_parse_from([
            "lake",
            "silver",
            "--lake-dir",
            "/tmp/lake",
            "--primary",
            "clientes",
            "--date-column",
            "fecha_nacimiento",
            "--date-column",
            "fecha_registro",
        ])
        .unwrap();
        match cli.command {
            Command::Silver(args) => {
                assert_eq!(args.primary.as_deref(), Some("clientes"));
                assert_eq!(args.date_columns.len(), 2);
            }
            _ => panic!("expected silver subcommand"),
        }
    }
}
