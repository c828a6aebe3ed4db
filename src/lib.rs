//! Facade crate for the chargeplan site-ranking engine.
//!
//! This crate re-exports the core domain types and the scoring engine, and
//! exposes CSV dataset I/O behind the `csv` feature.

#![forbid(unsafe_code)]

pub use chargeplan_core::{
    CancellationToken, CandidateSite, Criterion, DatasetError, DistanceError, DistanceMatrix,
    DistanceProfile, EARTH_RADIUS_KM, HaversineDistance, SiteDataset, SiteDistance, SiteError,
    SiteMetrics, haversine_km, mean_distances, mean_distances_cancellable,
};

pub use chargeplan_scorer::{
    DEFAULT_TOP_N, DatasetSummary, MapMarker, MapView, NormalisedMetrics, Ranking, RankingReport,
    ScoreBar, ScoreChart, ScoredSite, ScoringError, SiteRanker, SiteWeights, clamp_top_n,
    column_max, default_top_n, normalise_by_max, rank_sites, scale_to_max, score_sites,
};

#[cfg(feature = "csv")]
pub use chargeplan_data::{
    DatasetReadError, DatasetWriteError, read_sites, read_sites_file, write_ranking,
    write_ranking_file,
};
