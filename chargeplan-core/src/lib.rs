//! Core domain types for the chargeplan site-ranking engine.
//!
//! A [`SiteDataset`] holds the validated [`CandidateSite`] rows read from a
//! tabular file. The [`distance`] module derives each site's mean
//! great-circle distance to every other site, which the scoring crate
//! combines with the raw site metrics to rank candidates.
//!
//! Constructors return `Result` so invalid coordinates or metrics are
//! rejected before any computation runs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod criteria;
mod dataset;
pub mod distance;
mod site;

pub use criteria::Criterion;
pub use dataset::{DatasetError, SiteDataset};
pub use distance::{
    CancellationToken, DistanceError, DistanceMatrix, DistanceProfile, EARTH_RADIUS_KM,
    HaversineDistance, SiteDistance, haversine_km, mean_distances, mean_distances_cancellable,
};
pub use site::{CandidateSite, SiteError, SiteMetrics};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
