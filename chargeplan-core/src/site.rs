use geo::Coord;
use thiserror::Error;

use crate::Criterion;

/// Raw, non-negative metrics recorded for a candidate site.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiteMetrics {
    /// Usable ground area.
    pub area: f64,
    /// Vehicle count.
    pub vehicles: f64,
    /// Pedestrian footfall.
    pub footfall: f64,
}

impl SiteMetrics {
    /// Bundle the three raw metrics.
    pub const fn new(area: f64, vehicles: f64, footfall: f64) -> Self {
        Self {
            area,
            vehicles,
            footfall,
        }
    }

    fn entries(self) -> [(Criterion, f64); 3] {
        [
            (Criterion::Area, self.area),
            (Criterion::Vehicles, self.vehicles),
            (Criterion::Footfall, self.footfall),
        ]
    }
}

/// One candidate location read from the input dataset.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use chargeplan_core::{CandidateSite, SiteMetrics};
///
/// # fn main() -> Result<(), chargeplan_core::SiteError> {
/// let site = CandidateSite::new(
///     "Market Square",
///     Coord { x: -1.55, y: 53.8 },
///     SiteMetrics::new(120.0, 340.0, 900.0),
/// )?;
/// assert_eq!(site.latitude(), 53.8);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateSite {
    /// Display key for the site. Not required to be unique.
    pub location: String,
    /// Geospatial position.
    pub position: Coord<f64>,
    /// Raw metrics used for scoring.
    pub metrics: SiteMetrics,
}

/// Errors returned by [`CandidateSite::new`].
#[derive(Debug, Error, PartialEq)]
pub enum SiteError {
    /// Latitude or longitude was outside the WGS84 range or not finite.
    #[error(
        "site {location:?} has invalid coordinates (latitude {latitude}, longitude {longitude})"
    )]
    InvalidCoordinate {
        /// Site display key.
        location: String,
        /// Latitude supplied.
        latitude: f64,
        /// Longitude supplied.
        longitude: f64,
    },
    /// A raw metric was negative.
    #[error("site {location:?} has negative {criterion} {value}")]
    NegativeMetric {
        /// Site display key.
        location: String,
        /// Offending metric.
        criterion: Criterion,
        /// Value supplied.
        value: f64,
    },
    /// A raw metric was NaN or infinite.
    #[error("site {location:?} has a non-finite {criterion}")]
    NonFiniteMetric {
        /// Site display key.
        location: String,
        /// Offending metric.
        criterion: Criterion,
    },
}

impl CandidateSite {
    /// Validate and construct a [`CandidateSite`].
    pub fn new(
        location: impl Into<String>,
        position: Coord<f64>,
        metrics: SiteMetrics,
    ) -> Result<Self, SiteError> {
        let location = location.into();
        if !(-90.0..=90.0).contains(&position.y) || !(-180.0..=180.0).contains(&position.x) {
            return Err(SiteError::InvalidCoordinate {
                location,
                latitude: position.y,
                longitude: position.x,
            });
        }
        for (criterion, value) in metrics.entries() {
            if !value.is_finite() {
                return Err(SiteError::NonFiniteMetric {
                    location,
                    criterion,
                });
            }
            if value < 0.0 {
                return Err(SiteError::NegativeMetric {
                    location,
                    criterion,
                    value,
                });
            }
        }
        Ok(Self {
            location,
            position,
            metrics,
        })
    }

    /// Latitude in decimal degrees.
    pub const fn latitude(&self) -> f64 {
        self.position.y
    }

    /// Longitude in decimal degrees.
    pub const fn longitude(&self) -> f64 {
        self.position.x
    }
}
