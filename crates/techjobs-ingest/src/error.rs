//! Error types for job data ingestion.

use std::path::PathBuf;

use techjobs_model::ModelError;
use thiserror::Error;

/// Errors that can occur while loading the job listing source.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file does not exist.
    #[error("job data file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Source exists but could not be opened or read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source is larger than the configured limit.
    #[error("file {path} is {size} bytes, exceeding the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Source carries a byte-order mark for an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path} (expected UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Malformed delimited content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse {
        path: PathBuf,
        line: Option<u64>,
        message: String,
    },

    /// Source has no header record.
    #[error("CSV file is empty: {path}")]
    EmptySource { path: PathBuf },

    /// Source has a header but no data rows.
    #[error("CSV file has a header but no records: {path}")]
    NoRecords { path: PathBuf },

    /// Header row violates a table invariant.
    #[error("invalid header in {path}: {source}")]
    InvalidHeader {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("resources/job_data.csv"),
        };
        assert_eq!(
            err.to_string(),
            "job data file not found: resources/job_data.csv"
        );
    }

    #[test]
    fn test_invalid_header_keeps_source() {
        let err = IngestError::InvalidHeader {
            path: PathBuf::from("jobs.csv"),
            source: ModelError::DuplicateColumn("Employer".to_string()),
        };
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "duplicate column name: Employer");
    }
}
