//! Column names and header resolution.

use csv::StringRecord;

use crate::DatasetReadError;

/// Site display key.
pub const LOCATION: &str = "Location";
/// Latitude in decimal degrees.
pub const LATITUDE: &str = "Latitude";
/// Longitude in decimal degrees.
pub const LONGITUDE: &str = "Longitude";
/// Site area.
pub const AREA: &str = "Area";
/// Vehicle count.
pub const VEHICLES: &str = "Vehicles";
/// Footfall.
pub const FOOTFALL: &str = "Footfall";
/// Mean great-circle distance to the other sites, in kilometres.
pub const AVG_DISTANCE: &str = "Avg_Distance";
/// Normalised area.
pub const AREA_NORM: &str = "Area_Norm";
/// Normalised vehicle count.
pub const VEHICLES_NORM: &str = "Vehicles_Norm";
/// Normalised footfall.
pub const FOOTFALL_NORM: &str = "Footfall_Norm";
/// Normalised mean distance.
pub const DISTANCE_NORM: &str = "Distance_Norm";
/// Weighted score.
pub const SCORE: &str = "Score";

/// Columns every input dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 6] = [LOCATION, LATITUDE, LONGITUDE, AREA, VEHICLES, FOOTFALL];

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnIndex {
    pub(crate) location: usize,
    pub(crate) latitude: usize,
    pub(crate) longitude: usize,
    pub(crate) area: usize,
    pub(crate) vehicles: usize,
    pub(crate) footfall: usize,
}

impl ColumnIndex {
    /// Locate each required column, failing on the first one absent.
    pub(crate) fn from_headers(headers: &StringRecord) -> Result<Self, DatasetReadError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or(DatasetReadError::MissingColumn { column })
        };
        Ok(Self {
            location: find(LOCATION)?,
            latitude: find(LATITUDE)?,
            longitude: find(LONGITUDE)?,
            area: find(AREA)?,
            vehicles: find(VEHICLES)?,
            footfall: find(FOOTFALL)?,
        })
    }
}
