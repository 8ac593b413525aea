//! Job listing ingestion.
//!
//! Reads a comma-delimited source whose first record is the header row and
//! turns it into a [`techjobs_model::JobTable`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use techjobs_ingest::read_job_table;
//!
//! let table = read_job_table(Path::new("resources/job_data.csv"))?;
//! println!("{} listings across {} columns", table.len(), table.columns().len());
//! ```

mod error;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Source Reading ===
pub use source::{
    MAX_SOURCE_FILE_SIZE, normalize_header, read_job_table, read_job_table_with_limit,
};
