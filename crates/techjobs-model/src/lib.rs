//! Data model for the in-memory job listing table.
//!
//! A [`JobTable`] is the header list of a delimited source plus its records,
//! each held as a [`Row`] keyed by column name. Tables are built once and are
//! read-only afterwards.

pub mod error;
pub mod table;

pub use error::{ModelError, Result};
pub use table::{JobTable, Row};
