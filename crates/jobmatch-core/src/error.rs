//! Error types for jobmatch-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading the job-ad dataset.
///
/// These are the only errors that cross the aggregation boundary. Callers
/// should render them as a data problem, distinct from "zero matches".
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset file could not be read or a record could not be parsed.
    #[error("failed to read dataset {path}: {source}")]
    Read {
        /// Path to the dataset file.
        path: Utf8PathBuf,
        /// The underlying CSV or I/O error.
        #[source]
        source: csv::Error,
    },

    /// The dataset file was read but contained no records.
    #[error("dataset {0} contains no records")]
    Empty(Utf8PathBuf),
}

/// Result type alias using [`DatasetError`].
pub type DatasetResult<T> = Result<T, DatasetError>;
