//! Test-only helpers: a constant distance metric and small site builders
//! used by unit, behaviour, and property tests.

use geo::Coord;

use crate::{CandidateSite, SiteDataset, SiteDistance, SiteMetrics};

/// `SiteDistance` returning one kilometre between distinct positions.
#[derive(Debug, Default, Copy, Clone)]
pub struct UnitDistance;

impl SiteDistance for UnitDistance {
    fn distance_km(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        if from == to { 0.0 } else { 1.0 }
    }
}

/// Build a site at (`latitude`, `longitude`) with identical metrics.
///
/// # Panics
/// Panics when the coordinates or metric are invalid.
pub fn uniform_site(location: &str, latitude: f64, longitude: f64, metric: f64) -> CandidateSite {
    CandidateSite::new(
        location,
        Coord {
            x: longitude,
            y: latitude,
        },
        SiteMetrics::new(metric, metric, metric),
    )
    .unwrap_or_else(|err| panic!("invalid test site {location}: {err}"))
}

/// Wrap `sites` in a dataset.
///
/// # Panics
/// Panics when `sites` is empty.
pub fn dataset(sites: Vec<CandidateSite>) -> SiteDataset {
    SiteDataset::new(sites).unwrap_or_else(|err| panic!("invalid test dataset: {err}"))
}

/// The three-site triangle A(0,0), B(0,1), C(1,0) with every metric at 10.
pub fn triangle_dataset() -> SiteDataset {
    dataset(vec![
        uniform_site("A", 0.0, 0.0, 10.0),
        uniform_site("B", 0.0, 1.0, 10.0),
        uniform_site("C", 1.0, 0.0, 10.0),
    ])
}
