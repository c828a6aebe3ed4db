//! CSV ranking writer.

use std::io::Write;

use camino::Utf8Path;
use chargeplan_scorer::{Ranking, ScoredSite};
use log::info;
use serde::Serialize;

use crate::DatasetWriteError;

/// One output row: the input columns followed by the derived ones.
#[derive(Debug, Serialize)]
struct RankedRow<'a> {
    #[serde(rename = "Location")]
    location: &'a str,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "Area")]
    area: f64,
    #[serde(rename = "Vehicles")]
    vehicles: f64,
    #[serde(rename = "Footfall")]
    footfall: f64,
    #[serde(rename = "Avg_Distance")]
    avg_distance: f64,
    #[serde(rename = "Area_Norm")]
    area_norm: f64,
    #[serde(rename = "Vehicles_Norm")]
    vehicles_norm: f64,
    #[serde(rename = "Footfall_Norm")]
    footfall_norm: f64,
    #[serde(rename = "Distance_Norm")]
    distance_norm: f64,
    #[serde(rename = "Score")]
    score: f64,
}

impl<'a> From<&'a ScoredSite> for RankedRow<'a> {
    fn from(entry: &'a ScoredSite) -> Self {
        Self {
            location: &entry.site.location,
            latitude: entry.site.latitude(),
            longitude: entry.site.longitude(),
            area: entry.site.metrics.area,
            vehicles: entry.site.metrics.vehicles,
            footfall: entry.site.metrics.footfall,
            avg_distance: entry.avg_distance,
            area_norm: entry.normalised.area,
            vehicles_norm: entry.normalised.vehicles,
            footfall_norm: entry.normalised.footfall,
            distance_norm: entry.normalised.distance,
            score: entry.score,
        }
    }
}

/// Write `ranking` as CSV, best site first.
///
/// The header is written even when the ranking is empty.
///
/// # Errors
/// Returns [`DatasetWriteError::Csv`] when a row cannot be written and
/// [`DatasetWriteError::Io`] when flushing fails.
pub fn write_ranking<W: Write>(sink: W, ranking: &Ranking) -> Result<(), DatasetWriteError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);
    writer.write_record(crate::REQUIRED_COLUMNS.iter().chain(&[
        crate::AVG_DISTANCE,
        crate::AREA_NORM,
        crate::VEHICLES_NORM,
        crate::FOOTFALL_NORM,
        crate::DISTANCE_NORM,
        crate::SCORE,
    ]))?;
    for entry in ranking.entries() {
        writer.serialize(RankedRow::from(entry))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `ranking` to `path`, creating parent directories as needed.
///
/// # Errors
/// Returns [`DatasetWriteError::Create`] when the file cannot be created,
/// and otherwise the errors of [`write_ranking`].
pub fn write_ranking_file(path: &Utf8Path, ranking: &Ranking) -> Result<(), DatasetWriteError> {
    let file = chargeplan_fs::create_utf8_file(path).map_err(|source| {
        DatasetWriteError::Create {
            path: path.to_path_buf(),
            source,
        }
    })?;
    write_ranking(file, ranking)?;
    info!("wrote {} ranked sites to {path}", ranking.len());
    Ok(())
}
