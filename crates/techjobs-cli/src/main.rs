//! TechJobs query CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use techjobs_cli::commands::{exit_code, open_store, run_all, run_columns, run_list, run_search};
use techjobs_cli::logging::{LogConfig, LogFormat, init_logging};
use techjobs_cli::output::OutputFormat;
use techjobs_core::DataSourceConfig;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let jobs = open_store(DataSourceConfig::from_env(), cli.data.clone());
    let format = OutputFormat::from(cli.output);
    let result = match &cli.command {
        Command::List(args) => run_list(&jobs, &args.column, format),
        Command::All => run_all(&jobs, format),
        Command::Search(args) => {
            run_search(&jobs, &args.term, args.column.as_deref(), format)
        }
        Command::Columns => run_columns(&jobs, format),
    };
    match &result {
        Ok(rendered) => println!("{rendered}"),
        Err(error) => eprintln!("error: {error:#}"),
    }
    std::process::exit(exit_code(&result));
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
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_target;
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
