//! CLI argument definitions for the job listing query tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use techjobs_cli::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "techjobs",
    version,
    about = "Query job listings loaded from a CSV file",
    long_about = "Query job listings loaded from a CSV file.\n\n\
                  The file is read once; its first row names the columns.\n\
                  Searches match whole words and ignore case."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Job data CSV (default: $TECHJOBS_DATA_FILE, then resources/job_data.csv).
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// How to print results.
    #[arg(long = "output", value_enum, default_value = "table", global = true)]
    pub output: OutputFormatArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the distinct values of a column, sorted ignoring case.
    List(ListArgs),

    /// Print every job listing.
    All,

    /// Find listings containing a word, in one column or in any column.
    Search(SearchArgs),

    /// Print the column names of the job data file.
    Columns,
}

#[derive(Args)]
pub struct ListArgs {
    /// Column to list, exactly as named in the header row.
    #[arg(value_name = "COLUMN")]
    pub column: String,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Word to look for (whole word, case-insensitive).
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Restrict the search to this column.
    #[arg(long = "column", short = 'c', value_name = "COLUMN")]
    pub column: Option<String>,
}

/// CLI result format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Table => Self::Table,
            OutputFormatArg::Json => Self::Json,
        }
    }
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
