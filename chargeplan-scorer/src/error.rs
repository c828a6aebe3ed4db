//! Error types raised while scoring candidate sites.
#![forbid(unsafe_code)]

use chargeplan_core::{Criterion, DistanceError};
use thiserror::Error;

/// Errors raised while validating weights or scoring a dataset.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScoringError {
    /// A weight was negative or not finite.
    #[error("{criterion} weight must be a finite, non-negative number (got {value})")]
    InvalidWeight {
        /// Criterion the weight applies to.
        criterion: Criterion,
        /// Rejected value.
        value: f64,
    },
    /// The distance profile does not cover the dataset it is scored with.
    #[error("distance profile covers {distances} sites but the dataset has {sites}")]
    ProfileMismatch {
        /// Sites in the dataset.
        sites: usize,
        /// Entries in the distance profile.
        distances: usize,
    },
    /// The distance computation was cancelled.
    #[error(transparent)]
    Distance(#[from] DistanceError),
}
