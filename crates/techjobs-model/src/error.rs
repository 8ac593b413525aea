use thiserror::Error;

/// Errors raised when a table would violate its structural invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("column name at position {position} is empty")]
    EmptyColumnName { position: usize },
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
