use thiserror::Error;

/// Errors from cancellable distance computations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// The caller cancelled the computation before the matrix was complete.
    #[error("distance computation cancelled after {completed_rows} of {total_rows} rows")]
    Cancelled {
        /// Matrix rows finished before cancellation was observed.
        completed_rows: usize,
        /// Total rows the matrix would have had.
        total_rows: usize,
    },
}
