use std::cmp::Ordering;
use std::convert::Infallible;

use geo::Coord;

use super::{CancellationToken, DistanceError, SiteDistance};

/// Square table of pairwise distances in kilometres.
///
/// `rows()[i][j]` is the distance from position `i` to position `j`. The
/// diagonal is zero and the table is symmetric.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Build the full matrix for `positions`.
    ///
    /// Only the upper triangle is evaluated; the lower triangle mirrors it.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use chargeplan_core::{DistanceMatrix, HaversineDistance};
    ///
    /// let positions = [Coord { x: 0.0, y: 0.0 }, Coord { x: 0.0, y: 1.0 }];
    /// let matrix = DistanceMatrix::compute(&HaversineDistance::default(), &positions);
    /// assert_eq!(matrix.get(0, 0), Some(0.0));
    /// assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
    /// ```
    pub fn compute<D>(metric: &D, positions: &[Coord<f64>]) -> Self
    where
        D: SiteDistance + ?Sized,
    {
        let Ok(matrix) = Self::fill(metric, positions, |_| Ok::<(), Infallible>(()));
        matrix
    }

    /// Build the matrix, checking `token` before each row.
    pub fn compute_cancellable<D>(
        metric: &D,
        positions: &[Coord<f64>],
        token: &CancellationToken,
    ) -> Result<Self, DistanceError>
    where
        D: SiteDistance + ?Sized,
    {
        let total_rows = positions.len();
        Self::fill(metric, positions, |completed_rows| {
            if token.is_cancelled() {
                Err(DistanceError::Cancelled {
                    completed_rows,
                    total_rows,
                })
            } else {
                Ok(())
            }
        })
    }

    fn fill<D, E>(
        metric: &D,
        positions: &[Coord<f64>],
        mut checkpoint: impl FnMut(usize) -> Result<(), E>,
    ) -> Result<Self, E>
    where
        D: SiteDistance + ?Sized,
    {
        let mut rows: Vec<Vec<f64>> = Vec::with_capacity(positions.len());
        for (i, from) in positions.iter().enumerate() {
            checkpoint(i)?;
            let row = positions
                .iter()
                .enumerate()
                .map(|(j, to)| match j.cmp(&i) {
                    Ordering::Less => rows[j][i],
                    Ordering::Equal => 0.0,
                    Ordering::Greater => metric.distance_km(*from, *to),
                })
                .collect();
            rows.push(row);
        }
        Ok(Self { rows })
    }

    /// Number of positions (rows) in the matrix.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Report whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distance from position `from` to position `to`, if both exist.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        self.rows.get(from).and_then(|row| row.get(to)).copied()
    }

    /// Borrow the rows of the matrix.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Mean of each row excluding the diagonal.
    ///
    /// A single-row matrix yields `[0.0]` rather than dividing by zero.
    pub fn row_means(&self) -> Vec<f64> {
        let others = self.rows.len().saturating_sub(1);
        if others == 0 {
            if !self.rows.is_empty() {
                log::debug!("single candidate site; mean distance defined as 0 km");
            }
            return vec![0.0; self.rows.len()];
        }
        let divisor = others as f64;
        self.rows
            .iter()
            .map(|row| row.iter().sum::<f64>() / divisor)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HaversineDistance;
    use crate::test_support::UnitDistance;
    use rstest::rstest;

    fn square() -> Vec<Coord<f64>> {
        vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 0.0, y: 1.0 },
        ]
    }

    #[rstest]
    fn matrix_is_symmetric_with_zero_diagonal() {
        let matrix = DistanceMatrix::compute(&HaversineDistance::default(), &square());
        assert_eq!(matrix.len(), 4);
        for i in 0..4 {
            assert_eq!(matrix.get(i, i), Some(0.0));
            for j in 0..4 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    #[rstest]
    fn row_means_exclude_the_diagonal() {
        let positions = square();
        let matrix = DistanceMatrix::compute(&UnitDistance, &positions);
        assert_eq!(matrix.row_means(), vec![1.0; 4]);
    }

    #[rstest]
    #[case(0, Vec::new())]
    #[case(1, vec![0.0])]
    fn degenerate_sizes_do_not_divide_by_zero(#[case] count: usize, #[case] expected: Vec<f64>) {
        let positions = vec![Coord { x: 3.0, y: 4.0 }; count];
        let matrix = DistanceMatrix::compute(&HaversineDistance::default(), &positions);
        assert_eq!(matrix.row_means(), expected);
    }

    #[rstest]
    fn cancelled_token_stops_before_first_row() {
        let token = CancellationToken::new();
        token.cancel();
        let err = DistanceMatrix::compute_cancellable(&UnitDistance, &square(), &token)
            .expect_err("cancelled computation should fail");
        assert_eq!(
            err,
            DistanceError::Cancelled {
                completed_rows: 0,
                total_rows: 4,
            }
        );
    }

    #[rstest]
    fn live_token_matches_plain_compute() {
        let positions = square();
        let token = CancellationToken::new();
        let metric = HaversineDistance::default();
        let cancellable = DistanceMatrix::compute_cancellable(&metric, &positions, &token)
            .expect("token never cancelled");
        assert_eq!(cancellable, DistanceMatrix::compute(&metric, &positions));
    }
}
