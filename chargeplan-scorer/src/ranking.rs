//! Score, sort, and truncate candidate sites.
#![forbid(unsafe_code)]

use chargeplan_core::{CancellationToken, Criterion, DistanceProfile, SiteDataset, SiteMetrics};
use log::debug;

use crate::{
    NormalisedMetrics, Ranking, ScoredSite, ScoringError, SiteWeights, column_max, scale_to_max,
};

/// Number of sites shortlisted when the caller does not choose.
pub const DEFAULT_TOP_N: usize = 5;

/// Clamp a requested shortlist size into `1..=len`.
///
/// An empty candidate set always yields `0`.
///
/// # Examples
/// ```
/// use chargeplan_scorer::clamp_top_n;
///
/// assert_eq!(clamp_top_n(0, 4), 1);
/// assert_eq!(clamp_top_n(9, 4), 4);
/// assert_eq!(clamp_top_n(3, 4), 3);
/// ```
#[must_use]
pub fn clamp_top_n(requested: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    requested.clamp(1, len)
}

/// Default shortlist size for a dataset of `len` sites: `min(5, len)`.
#[must_use]
pub fn default_top_n(len: usize) -> usize {
    DEFAULT_TOP_N.min(len)
}

/// Per-column maxima used to normalise one dataset.
#[derive(Debug, Clone, Copy)]
struct ColumnMaxima {
    area: f64,
    vehicles: f64,
    footfall: f64,
    distance: f64,
}

impl ColumnMaxima {
    fn from_columns(dataset: &SiteDataset, distances: &[f64]) -> Self {
        let column = |select: fn(&SiteMetrics) -> f64| {
            let values: Vec<f64> = dataset.iter().map(|site| select(&site.metrics)).collect();
            column_max(&values)
        };
        let maxima = Self {
            area: column(|m| m.area),
            vehicles: column(|m| m.vehicles),
            footfall: column(|m| m.footfall),
            distance: column_max(distances),
        };
        maxima.log_degenerate_columns();
        maxima
    }

    fn log_degenerate_columns(&self) {
        for (criterion, max) in [
            (Criterion::Area, self.area),
            (Criterion::Vehicles, self.vehicles),
            (Criterion::Footfall, self.footfall),
            (Criterion::Distance, self.distance),
        ] {
            if max <= 0.0 {
                debug!("{criterion} is zero for every site; normalising {criterion} to 0");
            }
        }
    }

    fn normalise(&self, metrics: &SiteMetrics, distance: f64) -> NormalisedMetrics {
        NormalisedMetrics {
            area: scale_to_max(metrics.area, self.area),
            vehicles: scale_to_max(metrics.vehicles, self.vehicles),
            footfall: scale_to_max(metrics.footfall, self.footfall),
            distance: scale_to_max(distance, self.distance),
        }
    }
}

/// Normalise and score every site, preserving input order.
///
/// # Errors
/// Returns [`ScoringError::InvalidWeight`] before any score is computed when
/// a weight is negative or not finite, and [`ScoringError::ProfileMismatch`]
/// when `profile` was computed for a dataset of a different size.
pub fn score_sites(
    dataset: &SiteDataset,
    profile: &DistanceProfile,
    weights: &SiteWeights,
) -> Result<Vec<ScoredSite>, ScoringError> {
    weights.validate()?;
    let distances = profile.mean_distances();
    if distances.len() != dataset.len() {
        return Err(ScoringError::ProfileMismatch {
            sites: dataset.len(),
            distances: distances.len(),
        });
    }

    let maxima = ColumnMaxima::from_columns(dataset, distances);
    let scored = dataset
        .iter()
        .zip(distances)
        .enumerate()
        .map(|(input_index, (site, &avg_distance))| {
            let normalised = maxima.normalise(&site.metrics, avg_distance);
            ScoredSite {
                input_index,
                site: site.clone(),
                avg_distance,
                normalised,
                score: normalised.weighted(weights),
            }
        })
        .collect();
    Ok(scored)
}

/// Score every site and keep the best `top_n`.
///
/// Sites are ordered by descending score; equal scores keep their input
/// order. `top_n` is clamped into `1..=dataset.len()`.
///
/// # Errors
/// Propagates the errors of [`score_sites`].
pub fn rank_sites(
    dataset: &SiteDataset,
    profile: &DistanceProfile,
    weights: &SiteWeights,
    top_n: usize,
) -> Result<Ranking, ScoringError> {
    let mut scored = score_sites(dataset, profile, weights)?;
    // `sort_by` is stable, so ties retain input order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    let keep = clamp_top_n(top_n, scored.len());
    if keep != top_n {
        debug!("clamped top_n from {top_n} to {keep}");
    }
    scored.truncate(keep);
    Ok(Ranking::new(scored, dataset.len(), *weights))
}

/// A dataset paired with its cached distance profile.
///
/// Each call to [`SiteRanker::rank`] rescores from scratch; only the
/// weight-independent distances are reused.
#[derive(Debug, Clone)]
pub struct SiteRanker {
    dataset: SiteDataset,
    profile: DistanceProfile,
}

impl SiteRanker {
    /// Compute the distance profile for `dataset`.
    #[must_use]
    pub fn new(dataset: SiteDataset) -> Self {
        let profile = DistanceProfile::compute(&dataset);
        Self { dataset, profile }
    }

    /// Compute the distance profile, observing `token` once per matrix row.
    ///
    /// # Errors
    /// Returns [`ScoringError::Distance`] when the token is cancelled.
    pub fn with_cancellation(
        dataset: SiteDataset,
        token: &CancellationToken,
    ) -> Result<Self, ScoringError> {
        let profile = DistanceProfile::compute_cancellable(&dataset, token)?;
        Ok(Self { dataset, profile })
    }

    /// The candidate sites.
    #[must_use]
    pub const fn dataset(&self) -> &SiteDataset {
        &self.dataset
    }

    /// The cached mean distances.
    #[must_use]
    pub const fn profile(&self) -> &DistanceProfile {
        &self.profile
    }

    /// Score every site with `weights`, in input order.
    ///
    /// # Errors
    /// See [`score_sites`].
    pub fn score(&self, weights: &SiteWeights) -> Result<Vec<ScoredSite>, ScoringError> {
        score_sites(&self.dataset, &self.profile, weights)
    }

    /// Rank the sites with `weights` and keep the best `top_n`.
    ///
    /// # Errors
    /// See [`rank_sites`].
    pub fn rank(&self, weights: &SiteWeights, top_n: usize) -> Result<Ranking, ScoringError> {
        rank_sites(&self.dataset, &self.profile, weights, top_n)
    }
}
