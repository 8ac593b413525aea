//! In-memory job table query engine.
//!
//! [`JobData`] owns the job listing table. The backing source is read on the
//! first query and cached for the life of the store; every later query runs
//! a linear scan over the cached rows.
//!
//! # Queries
//!
//! - [`JobData::find_all_values`]: distinct values of one column, sorted
//!   case-insensitively
//! - [`JobData::find_all`]: every row
//! - [`JobData::find_by_column_and_value`]: rows whose column holds the term
//!   as a whole word
//! - [`JobData::find_by_value`]: rows where any column holds the term as a
//!   whole word
//!
//! # Example
//!
//! ```ignore
//! use techjobs_core::{DataSourceConfig, JobData};
//!
//! let jobs = JobData::new(DataSourceConfig::from_env());
//! for employer in jobs.find_all_values("employer")? {
//!     println!("{employer}");
//! }
//! let ruby_jobs = jobs.find_by_value("ruby")?;
//! ```

pub mod config;
pub mod error;
pub mod matcher;
pub mod store;

pub use config::{DATA_FILE_ENV, DEFAULT_DATA_FILE, DataSourceConfig};
pub use error::{QueryError, Result};
pub use matcher::{WordMatcher, matches};
pub use store::JobData;

pub use techjobs_model::{JobTable, Row};
