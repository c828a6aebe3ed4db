//! Dataset input and ranking output for the chargeplan engine.
//!
//! Responsibilities:
//! - Parse candidate-site tables from CSV into a validated
//!   [`SiteDataset`](chargeplan_core::SiteDataset).
//! - Write ranked shortlists back out as CSV, enriched with the distance
//!   metric, the normalised criteria, and the score.
//!
//! Boundaries:
//! - Do not encode ranking rules (live in `chargeplan-scorer`).
//! - Resolve paths through `chargeplan-fs`; never touch `std::fs` directly.
//!
//! Invariants:
//! - A dataset is rejected whole on the first malformed row; partial
//!   datasets are never returned.
//! - Column names are matched exactly and case-sensitively.

#![forbid(unsafe_code)]

mod columns;
mod error;
mod reader;
mod writer;

pub use columns::{
    AREA, AREA_NORM, AVG_DISTANCE, DISTANCE_NORM, FOOTFALL, FOOTFALL_NORM, LATITUDE, LOCATION,
    LONGITUDE, REQUIRED_COLUMNS, SCORE, VEHICLES, VEHICLES_NORM,
};
pub use error::{DatasetReadError, DatasetWriteError};
pub use reader::{read_sites, read_sites_file};
pub use writer::{write_ranking, write_ranking_file};
