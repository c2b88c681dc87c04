//! CLI argument definitions for the SpaceParts ETL runner.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use etl_model::TableKind;

#[derive(Parser)]
#[command(
    name = "spaceparts-etl",
    version,
    about = "Curate SpaceParts raw extracts into an analytics-ready layer",
    long_about = "Curate the SpaceParts star schema (dim_Customers, dim_Products, fact_Invoices).\n\n\
                  Reads <data>/raw/<table>.csv, writes curated CSV/Parquet datasets and\n\
                  quality profiles to <data>/curated, and publishes them to <data>/load."
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

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
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
    /// Build the curated layer from the raw extracts.
    Curate(CurateArgs),

    /// Copy the curated layer into the load layer.
    Load(LoadArgs),

    /// Curate, then load.
    Run(RunArgs),

    /// List the tables the pipeline knows.
    Tables,
}

#[derive(Args)]
pub struct CurateArgs {
    /// Data root holding the raw, curated and load directories.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Raw extracts directory (default: <DATA_DIR>/raw).
    #[arg(long = "raw-dir", value_name = "DIR")]
    pub raw_dir: Option<PathBuf>,

    /// Curated output directory (default: <DATA_DIR>/curated).
    #[arg(long = "curated-dir", value_name = "DIR")]
    pub curated_dir: Option<PathBuf>,

    /// Keep only the first N rows of each raw table.
    ///
    /// Meant for demos and quick checks; profiles then describe the prefix
    /// only. 0 produces header-only outputs.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Process only this table (repeatable). Accepts dim_Customers or customers.
    #[arg(long = "table", value_name = "NAME")]
    pub tables: Vec<TableKind>,
}

#[derive(Args)]
pub struct LoadArgs {
    /// Data root holding the raw, curated and load directories.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Curated directory to publish (default: <DATA_DIR>/curated).
    #[arg(long = "curated-dir", value_name = "DIR")]
    pub curated_dir: Option<PathBuf>,

    /// Load directory (default: <DATA_DIR>/load).
    #[arg(long = "load-dir", value_name = "DIR")]
    pub load_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub curate: CurateArgs,

    /// Load directory (default: <DATA_DIR>/load).
    #[arg(long = "load-dir", value_name = "DIR")]
    pub load_dir: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
