//! Delimited source reading.

mod header;
mod reader;

pub use header::normalize_header;
pub use reader::{MAX_SOURCE_FILE_SIZE, read_job_table, read_job_table_with_limit};
