//! Job data file reading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use csv::ReaderBuilder;
use techjobs_model::JobTable;
use tracing::debug;

use crate::error::{IngestError, Result};

use super::header::header_columns;

/// Maximum source size accepted by [`read_job_table`] (500 MB).
pub const MAX_SOURCE_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Reads the job listing source at `path` into a [`JobTable`].
///
/// The first record is the header row and every later record becomes one
/// row, even when all of its cells are empty or whitespace. Empty lines are
/// not records and are skipped. Quoted fields and `""` escapes follow RFC 4180.
pub fn read_job_table(path: &Path) -> Result<JobTable> {
    read_job_table_with_limit(path, MAX_SOURCE_FILE_SIZE)
}

/// Same as [`read_job_table`] with a custom size limit in bytes.
pub fn read_job_table_with_limit(path: &Path, max_size: u64) -> Result<JobTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let size = file
        .metadata()
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .len();
    if size > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size,
        });
    }
    debug!(path = %path.display(), size, "opened job data source");

    let mut buffered = BufReader::new(file);
    validate_encoding(path, &mut buffered)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(buffered);

    let mut columns: Option<Vec<String>> = None;
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut overlong = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let Some(header) = columns.as_ref() else {
            columns = Some(header_columns(&record));
            continue;
        };
        if record.len() > header.len() {
            overlong += 1;
        }
        records.push(record.iter().map(str::to_string).collect());
    }

    let Some(columns) = columns else {
        return Err(IngestError::EmptySource {
            path: path.to_path_buf(),
        });
    };
    if records.is_empty() {
        return Err(IngestError::NoRecords {
            path: path.to_path_buf(),
        });
    }
    if overlong > 0 {
        debug!(
            path = %path.display(),
            records = overlong,
            "ignored cells beyond the last header"
        );
    }

    JobTable::from_records(columns, records).map_err(|source| IngestError::InvalidHeader {
        path: path.to_path_buf(),
        source,
    })
}

/// Rejects UTF-16 sources by their byte-order mark without consuming input.
fn validate_encoding<R: BufRead>(path: &Path, reader: &mut R) -> Result<()> {
    let buffer = reader.fill_buf().map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    if buffer.len() >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

fn csv_error(path: &Path, err: csv::Error) -> IngestError {
    let line = err.position().map(csv::Position::line);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            line,
            message,
        },
    }
}
