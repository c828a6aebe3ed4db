//! Dashboard payloads derived from a ranking.
//!
//! Renderers for the summary tiles, the score bar chart, and the site map
//! consume these plain, serialisable structures; nothing here draws
//! anything.
#![forbid(unsafe_code)]

use chargeplan_core::SiteDataset;
use serde::{Deserialize, Serialize};

use crate::{Ranking, ScoredSite, SiteWeights};

/// Zoom level of the initial map view.
pub const DEFAULT_MAP_ZOOM: u8 = 5;

/// Headline metrics for an uploaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of candidate sites.
    pub total_locations: usize,
    /// Mean vehicle count, truncated toward zero.
    pub mean_vehicles: i64,
    /// Mean footfall, truncated toward zero.
    pub mean_footfall: i64,
}

impl DatasetSummary {
    /// Summarise `dataset`.
    #[must_use]
    pub fn from_dataset(dataset: &SiteDataset) -> Self {
        let vehicles: Vec<f64> = dataset.iter().map(|site| site.metrics.vehicles).collect();
        let footfall: Vec<f64> = dataset.iter().map(|site| site.metrics.footfall).collect();
        Self {
            total_locations: dataset.len(),
            mean_vehicles: truncated_mean(&vehicles),
            mean_footfall: truncated_mean(&footfall),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "dashboard metrics show the mean as a whole number"
)]
fn truncated_mean(values: &[f64]) -> i64 {
    if values.is_empty() {
        return 0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    mean.trunc() as i64
}

/// Arithmetic mean of `values`, or `0.0` when empty.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averaging coordinates for the map centre"
)]
fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

/// One bar in the score comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBar {
    /// Site display key (x axis).
    pub location: String,
    /// Site score (y axis and colour).
    pub score: f64,
}

/// Bars for the score comparison chart, in ranking order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreChart {
    /// Bars, best first.
    pub bars: Vec<ScoreBar>,
}

impl ScoreChart {
    /// Chart the ranked sites.
    #[must_use]
    pub fn from_ranking(ranking: &Ranking) -> Self {
        let bars = ranking
            .entries()
            .iter()
            .map(|entry| ScoreBar {
                location: entry.site.location.clone(),
                score: entry.score,
            })
            .collect();
        Self { bars }
    }
}

/// A map pin for one shortlisted site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    /// Site display key.
    pub location: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Popup text shown when the pin is selected.
    pub popup: String,
}

impl MapMarker {
    fn for_site(entry: &ScoredSite) -> Self {
        Self {
            location: entry.site.location.clone(),
            latitude: entry.site.latitude(),
            longitude: entry.site.longitude(),
            popup: format!("{}\nScore: {:.2}", entry.site.location, entry.score),
        }
    }
}

/// Initial map viewport and pins for the shortlisted sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    /// Latitude of the map centre.
    pub centre_latitude: f64,
    /// Longitude of the map centre.
    pub centre_longitude: f64,
    /// Initial zoom level.
    pub zoom: u8,
    /// One pin per shortlisted site, best first.
    pub markers: Vec<MapMarker>,
}

impl MapView {
    /// Centre the map on the whole dataset and pin the ranked sites.
    ///
    /// The centre is the mean latitude and longitude of every candidate, not
    /// just the shortlist, so the view stays put as `top_n` changes.
    #[must_use]
    pub fn from_ranking(dataset: &SiteDataset, ranking: &Ranking) -> Self {
        Self {
            centre_latitude: mean(dataset.iter().map(chargeplan_core::CandidateSite::latitude)),
            centre_longitude: mean(dataset.iter().map(chargeplan_core::CandidateSite::longitude)),
            zoom: DEFAULT_MAP_ZOOM,
            markers: ranking.entries().iter().map(MapMarker::for_site).collect(),
        }
    }
}

/// Everything a presentation layer needs to render one ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    /// Dataset headline metrics.
    pub summary: DatasetSummary,
    /// Weights the ranking was produced with.
    pub weights: SiteWeights,
    /// Shortlisted sites, best first.
    pub ranking: Vec<ScoredSite>,
    /// Score comparison chart.
    pub chart: ScoreChart,
    /// Site map.
    pub map: MapView,
}

impl RankingReport {
    /// Assemble the report for `ranking` over `dataset`.
    #[must_use]
    pub fn new(dataset: &SiteDataset, ranking: &Ranking) -> Self {
        Self {
            summary: DatasetSummary::from_dataset(dataset),
            weights: *ranking.weights(),
            ranking: ranking.entries().to_vec(),
            chart: ScoreChart::from_ranking(ranking),
            map: MapView::from_ranking(dataset, ranking),
        }
    }
}
