//! Errors raised while reading datasets and writing rankings.

use std::io;

use camino::Utf8PathBuf;
use chargeplan_core::SiteError;
use thiserror::Error;

/// Failures while loading a candidate-site dataset.
#[derive(Debug, Error)]
pub enum DatasetReadError {
    /// The dataset file could not be opened.
    #[error("failed to open dataset at {path}")]
    Open {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The CSV stream was malformed.
    #[error("failed to parse dataset CSV")]
    Csv(#[from] csv::Error),
    /// A required column is absent from the header row.
    #[error("dataset is missing required column '{column}'")]
    MissingColumn {
        /// Exact column name expected.
        column: &'static str,
    },
    /// A numeric cell could not be parsed as a finite number.
    #[error("row {row}: column '{column}' has non-numeric value '{value}'")]
    NonNumericValue {
        /// 1-based data row, header excluded.
        row: usize,
        /// Column holding the bad cell.
        column: &'static str,
        /// Trimmed cell contents.
        value: String,
    },
    /// A row parsed but describes an impossible site.
    #[error("row {row}: invalid site record")]
    InvalidRecord {
        /// 1-based data row, header excluded.
        row: usize,
        /// Validation failure.
        #[source]
        source: SiteError,
    },
    /// The file holds a header row but no data.
    #[error("dataset contains no candidate sites")]
    EmptyDataset,
}

/// Failures while writing a ranking.
#[derive(Debug, Error)]
pub enum DatasetWriteError {
    /// The output file could not be created.
    #[error("failed to create ranking output at {path}")]
    Create {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A row could not be serialised.
    #[error("failed to write ranking CSV")]
    Csv(#[from] csv::Error),
    /// Flushing the output failed.
    #[error("failed to flush ranking output")]
    Io(#[from] io::Error),
}
