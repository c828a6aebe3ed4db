//! Weighted multi-criteria ranking of candidate charging sites.
//!
//! The crate turns a [`SiteDataset`](chargeplan_core::SiteDataset) and its
//! [`DistanceProfile`](chargeplan_core::DistanceProfile) into a ranked
//! shortlist:
//! - **Normalisation** divides each metric (area, vehicles, footfall, mean
//!   distance) by its dataset maximum so every criterion lands in
//!   `0.0..=1.0`. A metric whose maximum is zero normalises to `0.0`.
//! - **Scoring** combines the normalised metrics with a [`SiteWeights`]
//!   vector. Weights need not sum to one, so scores are only comparable
//!   within a single weight configuration.
//! - **Ranking** stable-sorts by descending score, keeping input order for
//!   ties, and truncates to a clamped `top_n`.
//!
//! The [`report`] module derives the dashboard payloads (summary metrics,
//! chart bars, and map markers) from a finished [`Ranking`].
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use chargeplan_core::{CandidateSite, SiteDataset, SiteMetrics};
//! use chargeplan_scorer::{SiteRanker, SiteWeights};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sites = vec![
//!     CandidateSite::new("Depot", Coord { x: 0.0, y: 0.0 }, SiteMetrics::new(100.0, 50.0, 10.0))?,
//!     CandidateSite::new("Mall", Coord { x: 0.5, y: 0.5 }, SiteMetrics::new(80.0, 90.0, 400.0))?,
//! ];
//! let ranker = SiteRanker::new(SiteDataset::new(sites)?);
//! let ranking = ranker.rank(&SiteWeights::default(), 1)?;
//! assert_eq!(ranking.len(), 1);
//! assert_eq!(ranking.entries()[0].site.location, "Mall");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod normalise;
mod ranking;
pub mod report;
mod types;
mod weights;

pub use error::ScoringError;
pub use normalise::{column_max, normalise_by_max, scale_to_max};
pub use ranking::{DEFAULT_TOP_N, SiteRanker, clamp_top_n, default_top_n, rank_sites, score_sites};
pub use report::{DatasetSummary, MapMarker, MapView, RankingReport, ScoreBar, ScoreChart};
pub use types::{NormalisedMetrics, Ranking, ScoredSite};
pub use weights::SiteWeights;
