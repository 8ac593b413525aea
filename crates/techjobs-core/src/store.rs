//! The job data store: load-once cache plus the fixed query set.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::time::Instant;

use techjobs_ingest::read_job_table;
use techjobs_model::{JobTable, Row};
use tracing::{debug, error, info, info_span};

use crate::config::DataSourceConfig;
use crate::error::{QueryError, Result};
use crate::matcher::WordMatcher;

/// Owns the job listing table and answers read-only queries against it.
///
/// The source named by the [`DataSourceConfig`] is read by the first query
/// (or an explicit [`JobData::ensure_loaded`]). A successful load is cached
/// for the lifetime of the store; a failed load leaves the store unloaded so
/// the next query tries again.
///
/// # Thread Safety
///
/// The store is `Send + Sync`. First load is serialised by a gate mutex, so
/// concurrent first callers read the source once and share the result.
#[derive(Debug)]
pub struct JobData {
    config: DataSourceConfig,
    table: OnceLock<Arc<JobTable>>,
    load_gate: Mutex<()>,
}

impl Default for JobData {
    fn default() -> Self {
        Self::new(DataSourceConfig::default())
    }
}

impl JobData {
    /// Creates an unloaded store backed by the configured source.
    pub fn new(config: DataSourceConfig) -> Self {
        Self {
            config,
            table: OnceLock::new(),
            load_gate: Mutex::new(()),
        }
    }

    /// Creates a store that is already loaded with `table`.
    ///
    /// # Errors
    ///
    /// [`QueryError::EmptyTable`] when `table` has no rows; a loaded store
    /// always holds at least one.
    pub fn from_table(table: JobTable) -> Result<Self> {
        if table.is_empty() {
            return Err(QueryError::EmptyTable);
        }
        Ok(Self {
            config: DataSourceConfig::default(),
            table: OnceLock::from(Arc::new(table)),
            load_gate: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &DataSourceConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// Loads the source if it has not been loaded yet and returns the table.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::SourceUnavailable`] when the source is missing,
    /// unreadable, or malformed. Nothing is cached in that case.
    pub fn ensure_loaded(&self) -> Result<&Arc<JobTable>> {
        if let Some(table) = self.table.get() {
            return Ok(table);
        }
        let _gate = self
            .load_gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(table) = self.table.get() {
            return Ok(table);
        }
        let table = Arc::new(self.load()?);
        Ok(self.table.get_or_init(|| table))
    }

    fn load(&self) -> Result<JobTable> {
        let path = self.config.path();
        let span = info_span!("load_job_data", path = %path.display());
        let _guard = span.enter();
        let start = Instant::now();

        match read_job_table(path) {
            Ok(table) => {
                info!(
                    columns = table.columns().len(),
                    rows = table.len(),
                    duration_ms = start.elapsed().as_millis(),
                    "job data loaded"
                );
                Ok(table)
            }
            Err(source) => {
                error!(error = %source, "failed to load job data");
                Err(QueryError::SourceUnavailable {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    /// Header names in file order.
    pub fn columns(&self) -> Result<Vec<String>> {
        Ok(self.ensure_loaded()?.columns().to_vec())
    }

    /// Distinct values of `field`, sorted case-insensitively.
    ///
    /// Duplicates are dropped by exact, case-sensitive comparison with the
    /// first occurrence kept. The sort is stable, so values that differ only
    /// in case stay in first-occurrence order.
    ///
    /// # Errors
    ///
    /// [`QueryError::InvalidColumn`] when `field` is not a header, or
    /// [`QueryError::SourceUnavailable`] when the source cannot be loaded.
    pub fn find_all_values(&self, field: &str) -> Result<Vec<String>> {
        let table = self.ensure_loaded()?;
        require_column(table, field)?;

        let mut seen = BTreeSet::new();
        let mut values = Vec::new();
        for row in table.rows() {
            let value = row.get(field).unwrap_or_default();
            if seen.insert(value) {
                values.push(value.to_string());
            }
        }
        values.sort_by_cached_key(|value| value.to_lowercase());

        debug!(column = field, values = values.len(), "listed column values");
        Ok(values)
    }

    /// Every row in source order.
    ///
    /// Returns the shared cached table; it is immutable, so holding the
    /// handle cannot disturb other callers.
    pub fn find_all(&self) -> Result<Arc<JobTable>> {
        self.ensure_loaded().map(Arc::clone)
    }

    /// Rows whose `column` value contains `term` as a whole word, ignoring
    /// case, in source order.
    ///
    /// # Errors
    ///
    /// [`QueryError::InvalidColumn`] when `column` is not a header, or
    /// [`QueryError::SourceUnavailable`] when the source cannot be loaded.
    pub fn find_by_column_and_value(&self, column: &str, term: &str) -> Result<Vec<Row>> {
        let table = self.ensure_loaded()?;
        require_column(table, column)?;

        let matcher = WordMatcher::new(term);
        let rows: Vec<Row> = table
            .rows()
            .iter()
            .filter(|row| matcher.is_match(row.get(column)))
            .cloned()
            .collect();

        debug!(column, term, matches = rows.len(), "column search");
        Ok(rows)
    }

    /// Rows where any column contains `term` as a whole word, ignoring case.
    ///
    /// Columns are checked in name order and the scan of a row stops at its
    /// first matching column, so each row appears at most once.
    pub fn find_by_value(&self, term: &str) -> Result<Vec<Row>> {
        let table = self.ensure_loaded()?;

        let matcher = WordMatcher::new(term);
        let rows: Vec<Row> = table
            .rows()
            .iter()
            .filter(|row| row.values().any(|value| matcher.is_match(Some(value))))
            .cloned()
            .collect();

        debug!(term, matches = rows.len(), "any-column search");
        Ok(rows)
    }

    pub fn list_column_values(&self, column: &str) -> Result<Vec<String>> {
        self.find_all_values(column)
    }

    pub fn list_all_rows(&self) -> Result<Arc<JobTable>> {
        self.find_all()
    }

    pub fn search_column(&self, column: &str, term: &str) -> Result<Vec<Row>> {
        self.find_by_column_and_value(column, term)
    }

    pub fn search_all(&self, term: &str) -> Result<Vec<Row>> {
        self.find_by_value(term)
    }
}

fn require_column(table: &JobTable, column: &str) -> Result<()> {
    if table.has_column(column) {
        return Ok(());
    }
    Err(QueryError::InvalidColumn {
        column: column.to_string(),
        available: table.columns().to_vec(),
        suggestion: table.find_column_ignore_case(column).map(str::to_string),
    })
}
