//! Subcommand handlers. Each returns the rendered output for `main` to print.

use std::path::PathBuf;

use anyhow::{Context, Result};
use techjobs_core::{DataSourceConfig, JobData, QueryError};
use tracing::{debug, info_span};

use crate::output::{OutputFormat, render_rows, render_values};

/// Builds the store from `base`, with `--data` taking precedence.
pub fn open_store(base: DataSourceConfig, data: Option<PathBuf>) -> JobData {
    let config = base.with_path_override(data);
    debug!(path = %config.path().display(), "job data source");
    JobData::new(config)
}

pub fn run_list(jobs: &JobData, column: &str, format: OutputFormat) -> Result<String> {
    let _span = info_span!("list", column).entered();
    let values = jobs
        .find_all_values(column)
        .map_err(with_hint)
        .with_context(|| format!("list values of column '{column}'"))?;
    render_values(column, &values, format).context("render values")
}

pub fn run_all(jobs: &JobData, format: OutputFormat) -> Result<String> {
    let _span = info_span!("all").entered();
    let table = jobs.find_all().context("load job listings")?;
    render_rows(table.columns(), table.rows(), format).context("render listings")
}

/// Searches `column` when given, otherwise every column.
pub fn run_search(
    jobs: &JobData,
    term: &str,
    column: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let _span = info_span!("search", column = column.unwrap_or("*")).entered();
    let rows = match column {
        Some(column) => jobs
            .find_by_column_and_value(column, term)
            .map_err(with_hint)
            .with_context(|| format!("search column '{column}'"))?,
        None => jobs.find_by_value(term).context("search all columns")?,
    };
    let columns = jobs.columns().context("read columns")?;
    render_rows(&columns, &rows, format).context("render listings")
}

pub fn run_columns(jobs: &JobData, format: OutputFormat) -> Result<String> {
    let columns = jobs.columns().context("read columns")?;
    render_values("Column", &columns, format).context("render columns")
}

/// Process exit code for a command result.
pub fn exit_code<T>(result: &Result<T>) -> i32 {
    if result.is_ok() { 0 } else { 1 }
}

/// Turns a case-only column mismatch into a "did you mean" error.
fn with_hint(error: QueryError) -> anyhow::Error {
    match &error {
        QueryError::InvalidColumn {
            suggestion: Some(suggestion),
            ..
        } => {
            let hint = format!("did you mean '{suggestion}'?");
            anyhow::Error::new(error).context(hint)
        }
        _ => anyhow::Error::new(error),
    }
}
