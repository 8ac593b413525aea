//! Error types for job table queries.

use std::path::PathBuf;

use techjobs_ingest::IngestError;
use thiserror::Error;

/// Errors returned by [`crate::JobData`] queries.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The backing source could not be loaded. The store stays unloaded and
    /// the next query retries the load.
    #[error("job data unavailable from {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: IngestError,
    },

    /// The requested column is not one of the source headers.
    #[error("unknown column '{column}' (available: {})", .available.join(", "))]
    InvalidColumn {
        column: String,
        available: Vec<String>,
        /// A header equal to `column` ignoring case, if there is one.
        suggestion: Option<String>,
    },

    /// A preloaded table had no rows.
    #[error("job table has no rows")]
    EmptyTable,
}

/// Result type for job table queries.
pub type Result<T> = std::result::Result<T, QueryError>;
