//! Shared builders for the distance engine integration tests.

use geo::Coord;
use chargeplan_core::{CandidateSite, SiteDataset, SiteMetrics};

/// Build a site at (`latitude`, `longitude`) with every metric set to `metric`.
pub fn site(location: &str, latitude: f64, longitude: f64, metric: f64) -> CandidateSite {
    CandidateSite::new(
        location,
        Coord {
            x: longitude,
            y: latitude,
        },
        SiteMetrics::new(metric, metric, metric),
    )
    .unwrap_or_else(|err| panic!("invalid fixture site {location}: {err}"))
}

/// Wrap `sites` in a dataset, panicking when empty.
pub fn dataset(sites: Vec<CandidateSite>) -> SiteDataset {
    SiteDataset::new(sites).unwrap_or_else(|err| panic!("invalid fixture dataset: {err}"))
}
