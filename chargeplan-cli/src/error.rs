//! Error types emitted by the chargeplan CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use chargeplan_data::{DatasetReadError, DatasetWriteError};
use chargeplan_scorer::ScoringError;
use thiserror::Error;

/// Errors emitted by the chargeplan CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag or positional name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Argument naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Loading the site dataset failed.
    #[error("failed to load dataset: {0}")]
    ReadDataset(#[from] DatasetReadError),
    /// Weights were rejected or scoring failed.
    #[error("failed to rank sites: {0}")]
    Scoring(#[from] ScoringError),
    /// Writing the ranking table failed.
    #[error("failed to write ranking: {0}")]
    WriteRanking(#[from] DatasetWriteError),
    /// Creating the report file failed.
    #[error("failed to create report at {path:?}: {source}")]
    CreateReport {
        /// Report destination.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Serialising the JSON report failed.
    #[error("failed to write report: {0}")]
    WriteReport(#[source] serde_json::Error),
}
