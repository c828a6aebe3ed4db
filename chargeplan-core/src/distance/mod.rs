//! Pairwise great-circle distances between candidate sites.
//!
//! The [`SiteDistance`] trait abstracts the point-to-point metric; the
//! default [`HaversineDistance`] treats the Earth as a sphere of radius
//! [`EARTH_RADIUS_KM`]. A [`DistanceMatrix`] holds the full `n x n` table
//! and [`DistanceProfile`] caches each site's mean distance to every other
//! site so that rescoring with new weights does not repeat the O(N²) work.

mod cancel;
mod error;
mod haversine;
mod matrix;
mod profile;

pub use cancel::CancellationToken;
pub use error::DistanceError;
pub use haversine::{EARTH_RADIUS_KM, HaversineDistance, SiteDistance, haversine_km};
pub use matrix::DistanceMatrix;
pub use profile::DistanceProfile;

use crate::CandidateSite;

/// Mean haversine distance (km) from each site to every other site.
///
/// Entry `i` averages the distances from `sites[i]` to all `sites[j]` with
/// `j != i`. A single site yields `[0.0]`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use chargeplan_core::{CandidateSite, SiteMetrics, mean_distances};
///
/// # fn main() -> Result<(), chargeplan_core::SiteError> {
/// let a = CandidateSite::new("A", Coord { x: 0.0, y: 0.0 }, SiteMetrics::default())?;
/// let b = CandidateSite::new("B", Coord { x: 1.0, y: 0.0 }, SiteMetrics::default())?;
/// let means = mean_distances(&[a, b]);
/// assert!((means[0] - 111.19).abs() < 0.01);
/// assert_eq!(means[0], means[1]);
/// # Ok(())
/// # }
/// ```
pub fn mean_distances(sites: &[CandidateSite]) -> Vec<f64> {
    let positions: Vec<_> = sites.iter().map(|site| site.position).collect();
    DistanceMatrix::compute(&HaversineDistance::default(), &positions).row_means()
}

/// Like [`mean_distances`], but stops early when `token` is cancelled.
///
/// The token is checked once per matrix row.
pub fn mean_distances_cancellable(
    sites: &[CandidateSite],
    token: &CancellationToken,
) -> Result<Vec<f64>, DistanceError> {
    let positions: Vec<_> = sites.iter().map(|site| site.position).collect();
    DistanceMatrix::compute_cancellable(&HaversineDistance::default(), &positions, token)
        .map(|matrix| matrix.row_means())
}
