use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One job listing: every header of the source mapped to its cell text.
///
/// Cells are stored in an ordered map, so iteration visits columns
/// lexicographically by name rather than in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<String, String>,
}

impl Row {
    /// Returns the cell for `column`, or `None` when the row has no such key.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Iterates over `(column, value)` pairs in column-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells
            .iter()
            .map(|(column, value)| (column.as_str(), value.as_str()))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}

/// The loaded dataset: column headers in file order and rows in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobTable {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl JobTable {
    /// Builds a table from a header list and raw records.
    ///
    /// Each record is matched positionally against `columns`. Records shorter
    /// than the header are padded with empty text so every row carries every
    /// column; cells past the last header are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyColumnName`] for a blank header and
    /// [`ModelError::DuplicateColumn`] when two headers share a name.
    pub fn from_records(columns: Vec<String>, records: Vec<Vec<String>>) -> Result<Self> {
        validate_columns(&columns)?;
        let rows: Vec<Row> = records
            .into_iter()
            .map(|record| {
                let mut cells = record.into_iter();
                columns
                    .iter()
                    .map(|column| (column.clone(), cells.next().unwrap_or_default()))
                    .collect::<Row>()
            })
            .collect();
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true if `name` is one of the headers (exact, case-sensitive).
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// Finds a header equal to `name` ignoring case.
    pub fn find_column_ignore_case(&self, name: &str) -> Option<&str> {
        let wanted = name.to_lowercase();
        self.columns
            .iter()
            .find(|column| column.to_lowercase() == wanted)
            .map(String::as_str)
    }
}

fn validate_columns(columns: &[String]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for (position, column) in columns.iter().enumerate() {
        if column.trim().is_empty() {
            return Err(ModelError::EmptyColumnName { position });
        }
        if !seen.insert(column.as_str()) {
            return Err(ModelError::DuplicateColumn(column.clone()));
        }
    }
    Ok(())
}
