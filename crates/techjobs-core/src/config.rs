//! Location of the backing job listing source.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Source path used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "resources/job_data.csv";

/// Environment variable that overrides [`DEFAULT_DATA_FILE`].
pub const DATA_FILE_ENV: &str = "TECHJOBS_DATA_FILE";

/// Configuration for the job data store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceConfig {
    /// Path of the comma-delimited source; the first record is the header.
    pub path: PathBuf,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl DataSourceConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads [`DATA_FILE_ENV`], falling back to the default path when the
    /// variable is unset or blank.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(DATA_FILE_ENV).map(PathBuf::from))
    }

    fn from_env_value(value: Option<PathBuf>) -> Self {
        match value {
            Some(path) if !path.as_os_str().is_empty() => Self { path },
            _ => Self::default(),
        }
    }

    /// Replaces the source path when `path` is set.
    #[must_use]
    pub fn with_path_override(self, path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self { path },
            None => self,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
