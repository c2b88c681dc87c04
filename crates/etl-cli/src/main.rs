//! SpaceParts ETL CLI.

use clap::{ColorChoice, Parser};
use etl_cli::logging::{LogConfig, LogFormat, init_logging};
use etl_model::{TableReport, TableStatus};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_curate, run_load, run_pipeline, run_tables};
use crate::summary::{print_load_summary, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Curate(args) => match run_curate(&args) {
            Ok(reports) => {
                print_summary(&reports);
                exit_code_for(&reports, true)
            }
            Err(error) => report_error(&error),
        },
        Command::Load(args) => match run_load(&args) {
            Ok(report) => {
                print_load_summary(&report);
                i32::from(!report.is_clean())
            }
            Err(error) => report_error(&error),
        },
        Command::Run(args) => match run_pipeline(&args) {
            Ok((reports, load)) => {
                print_summary(&reports);
                print_load_summary(&load);
                exit_code_for(&reports, load.is_clean())
            }
            Err(error) => report_error(&error),
        },
        Command::Tables => {
            run_tables();
            0
        }
    };
    std::process::exit(exit_code);
}

/// Skipped tables do not fail a run; failed tables and load failures do.
fn exit_code_for(reports: &[TableReport], load_clean: bool) -> i32 {
    let any_failed = reports
        .iter()
        .any(|report| report.status == TableStatus::Failed);
    i32::from(any_failed || !load_clean)
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
