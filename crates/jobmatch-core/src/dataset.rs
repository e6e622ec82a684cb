//! Job-ad dataset loading.
//!
//! The dataset is a CSV file with at least the columns `description`,
//! `occupation`, and `SSYK_code`. It is loaded once per query and treated
//! as read-only input to the aggregator.

use camino::Utf8Path;
use serde::Deserialize;

use crate::error::{DatasetError, DatasetResult};

/// One row of the job-ad dataset.
///
/// `ssyk_code` is an opaque classification identifier; it is carried through
/// to the taxonomy lookup but never parsed.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRecord {
    /// Free-text ad description. Absent or empty descriptions never match.
    pub description: Option<String>,
    /// Display title of the occupation this ad was grouped under.
    pub occupation: String,
    /// SSYK classification code for the occupation.
    #[serde(rename = "SSYK_code")]
    pub ssyk_code: String,
}

/// An immutable, in-memory copy of the job-ad dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<JobRecord>,
}

impl Dataset {
    /// Load the dataset from a CSV file.
    ///
    /// Returns [`DatasetError::Read`] if the file cannot be opened or a
    /// record fails to deserialize, and [`DatasetError::Empty`] if the file
    /// parses but holds zero records. Either way the caller sees a
    /// data-unavailable condition before any matching happens.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn load(path: &Utf8Path) -> DatasetResult<Self> {
        let mut reader = csv::Reader::from_path(path.as_std_path()).map_err(|source| {
            DatasetError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let mut records = Vec::new();
        for record in reader.deserialize() {
            let record: JobRecord = record.map_err(|source| DatasetError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(DatasetError::Empty(path.to_path_buf()));
        }

        tracing::debug!(records = records.len(), "dataset loaded");
        Ok(Self { records })
    }

    /// Build a dataset directly from records (used by tests and embedders).
    pub fn from_records(records: Vec<JobRecord>) -> Self {
        Self { records }
    }

    /// The loaded records, in file order.
    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
