//! Scored and ranked site records.
#![forbid(unsafe_code)]

use chargeplan_core::CandidateSite;
use serde::{Deserialize, Serialize};

use crate::SiteWeights;

/// The four criteria after divide-by-maximum normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalisedMetrics {
    /// Area relative to the largest area in the dataset.
    pub area: f64,
    /// Vehicle count relative to the dataset maximum.
    pub vehicles: f64,
    /// Footfall relative to the dataset maximum.
    pub footfall: f64,
    /// Mean distance relative to the most isolated site.
    pub distance: f64,
}

impl NormalisedMetrics {
    /// Weighted sum of the four components.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "scores are a weighted linear combination"
    )]
    pub fn weighted(&self, weights: &SiteWeights) -> f64 {
        weights.area * self.area
            + weights.vehicles * self.vehicles
            + weights.footfall * self.footfall
            + weights.distance * self.distance
    }
}

/// A candidate site enriched with its distance metric, normalised criteria,
/// and score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSite {
    /// Zero-based position of the site in the input dataset.
    pub input_index: usize,
    /// The original record.
    pub site: CandidateSite,
    /// Mean great-circle distance to every other site, in kilometres.
    pub avg_distance: f64,
    /// Normalised criteria.
    pub normalised: NormalisedMetrics,
    /// Weighted score in `0.0..=weights.total()`.
    pub score: f64,
}

/// The top-N sites ordered by descending score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    entries: Vec<ScoredSite>,
    candidates: usize,
    weights: SiteWeights,
}

impl Ranking {
    pub(crate) const fn new(
        entries: Vec<ScoredSite>,
        candidates: usize,
        weights: SiteWeights,
    ) -> Self {
        Self {
            entries,
            candidates,
            weights,
        }
    }

    /// Ranked entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[ScoredSite] {
        &self.entries
    }

    /// Iterate over `(rank, site)` pairs with 1-based ranks.
    pub fn iter_ranked(&self) -> impl Iterator<Item = (usize, &ScoredSite)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (index.saturating_add(1), entry))
    }

    /// Number of ranked entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether no entries were ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of sites considered before truncation.
    #[must_use]
    pub const fn candidate_count(&self) -> usize {
        self.candidates
    }

    /// Weights the ranking was produced with.
    #[must_use]
    pub const fn weights(&self) -> &SiteWeights {
        &self.weights
    }

    /// Consume the ranking and return its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<ScoredSite> {
        self.entries
    }
}
