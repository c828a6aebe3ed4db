//! User-adjustable weights applied to the normalised criteria.
#![forbid(unsafe_code)]

use chargeplan_core::Criterion;
use serde::{Deserialize, Serialize};

use crate::ScoringError;

const DEFAULT_AREA: f64 = 0.2;
const DEFAULT_VEHICLES: f64 = 0.2;
const DEFAULT_FOOTFALL: f64 = 0.25;
const DEFAULT_DISTANCE: f64 = 0.35;

/// Non-negative multipliers for the four ranking criteria.
///
/// The weights are independent; nothing forces them to sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteWeights {
    /// Multiplier for normalised area.
    pub area: f64,
    /// Multiplier for normalised vehicle count.
    pub vehicles: f64,
    /// Multiplier for normalised footfall.
    pub footfall: f64,
    /// Multiplier for normalised mean distance.
    pub distance: f64,
}

impl Default for SiteWeights {
    fn default() -> Self {
        Self {
            area: DEFAULT_AREA,
            vehicles: DEFAULT_VEHICLES,
            footfall: DEFAULT_FOOTFALL,
            distance: DEFAULT_DISTANCE,
        }
    }
}

impl SiteWeights {
    /// Validate and construct a weight vector.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidWeight`] for the first weight that is
    /// negative, NaN, or infinite.
    ///
    /// # Examples
    /// ```
    /// use chargeplan_scorer::{ScoringError, SiteWeights};
    ///
    /// assert!(SiteWeights::new(0.25, 0.25, 0.25, 0.25).is_ok());
    /// assert!(matches!(
    ///     SiteWeights::new(-0.1, 0.25, 0.25, 0.25),
    ///     Err(ScoringError::InvalidWeight { .. })
    /// ));
    /// ```
    pub fn new(area: f64, vehicles: f64, footfall: f64, distance: f64) -> Result<Self, ScoringError> {
        let weights = Self {
            area,
            vehicles,
            footfall,
            distance,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Check every weight is finite and non-negative.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidWeight`] naming the offending criterion.
    pub fn validate(&self) -> Result<(), ScoringError> {
        self.entries()
            .into_iter()
            .find(|&(_, value)| !value.is_finite() || value < 0.0)
            .map_or(Ok(()), |(criterion, value)| {
                Err(ScoringError::InvalidWeight { criterion, value })
            })
    }

    /// Weight applied to `criterion`.
    #[must_use]
    pub const fn weight(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Area => self.area,
            Criterion::Vehicles => self.vehicles,
            Criterion::Footfall => self.footfall,
            Criterion::Distance => self.distance,
        }
    }

    /// Each criterion paired with its weight, in scoring order.
    #[must_use]
    pub const fn entries(&self) -> [(Criterion, f64); 4] {
        [
            (Criterion::Area, self.area),
            (Criterion::Vehicles, self.vehicles),
            (Criterion::Footfall, self.footfall),
            (Criterion::Distance, self.distance),
        ]
    }

    /// Sum of all four weights; the upper bound of any score.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "summing weights")]
    pub fn total(&self) -> f64 {
        self.area + self.vehicles + self.footfall + self.distance
    }

    /// Rescale the weights so they sum to one.
    ///
    /// Returns `self` unchanged when every weight is zero. Scores computed
    /// with normalised weights lie in `0.0..=1.0` and are comparable across
    /// configurations.
    ///
    /// # Examples
    /// ```
    /// use chargeplan_scorer::SiteWeights;
    ///
    /// let weights = SiteWeights { area: 1.0, vehicles: 1.0, footfall: 0.0, distance: 2.0 };
    /// let scaled = weights.normalised();
    /// assert_eq!(scaled.distance, 0.5);
    /// assert_eq!(scaled.total(), 1.0);
    /// ```
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "dividing weights by their sum")]
    pub fn normalised(&self) -> Self {
        let total = self.total();
        if total <= 0.0 || !total.is_finite() {
            return *self;
        }
        Self {
            area: self.area / total,
            vehicles: self.vehicles / total,
            footfall: self.footfall / total,
            distance: self.distance / total,
        }
    }
}
