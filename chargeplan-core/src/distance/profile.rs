use super::{CancellationToken, DistanceError, DistanceMatrix, HaversineDistance, SiteDistance};
use crate::SiteDataset;

/// Mean distance from each site to every other site in one dataset.
///
/// Distances do not depend on the scoring weights, so a profile is computed
/// once per dataset and reused for every scoring request.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use chargeplan_core::{CandidateSite, DistanceProfile, SiteDataset, SiteMetrics};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let only = CandidateSite::new("Solo", Coord { x: 5.0, y: 5.0 }, SiteMetrics::default())?;
/// let profile = DistanceProfile::compute(&SiteDataset::new(vec![only])?);
/// assert_eq!(profile.mean_distances(), &[0.0]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceProfile {
    mean_km: Vec<f64>,
}

impl DistanceProfile {
    /// Compute haversine mean distances for `dataset`.
    pub fn compute(dataset: &SiteDataset) -> Self {
        Self::compute_with(&HaversineDistance::default(), dataset)
    }

    /// Compute mean distances using a custom metric.
    pub fn compute_with<D>(metric: &D, dataset: &SiteDataset) -> Self
    where
        D: SiteDistance + ?Sized,
    {
        let matrix = DistanceMatrix::compute(metric, &dataset.positions());
        Self::from_matrix(&matrix)
    }

    /// Compute haversine mean distances, observing `token` once per row.
    pub fn compute_cancellable(
        dataset: &SiteDataset,
        token: &CancellationToken,
    ) -> Result<Self, DistanceError> {
        let matrix = DistanceMatrix::compute_cancellable(
            &HaversineDistance::default(),
            &dataset.positions(),
            token,
        )?;
        Ok(Self::from_matrix(&matrix))
    }

    /// Build a profile from a precomputed matrix.
    pub fn from_matrix(matrix: &DistanceMatrix) -> Self {
        Self {
            mean_km: matrix.row_means(),
        }
    }

    /// Mean distances in kilometres, parallel to the dataset's sites.
    pub fn mean_distances(&self) -> &[f64] {
        &self.mean_km
    }

    /// Mean distance for the site at `index`.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.mean_km.get(index).copied()
    }

    /// Number of sites covered by the profile.
    pub fn len(&self) -> usize {
        self.mean_km.len()
    }

    /// Report whether the profile covers no sites.
    pub fn is_empty(&self) -> bool {
        self.mean_km.is_empty()
    }
}
