//! CSV dataset reader.

use std::io::Read;

use camino::Utf8Path;
use chargeplan_core::{CandidateSite, SiteDataset, SiteMetrics};
use csv::{ReaderBuilder, StringRecord, Trim};
use geo::Coord;
use log::{debug, info};

use crate::DatasetReadError;
use crate::columns::{AREA, ColumnIndex, FOOTFALL, LATITUDE, LOCATION, LONGITUDE, VEHICLES};

/// Parse a candidate-site table from CSV.
///
/// The first row must be a header naming every column in
/// [`REQUIRED_COLUMNS`](crate::REQUIRED_COLUMNS); other columns are ignored.
/// Cells are trimmed before parsing.
///
/// # Errors
/// Returns [`DatasetReadError::MissingColumn`] for an absent header,
/// [`DatasetReadError::NonNumericValue`] or
/// [`DatasetReadError::InvalidRecord`] for the first bad row, and
/// [`DatasetReadError::EmptyDataset`] when no rows follow the header.
///
/// # Examples
/// ```
/// use chargeplan_data::read_sites;
///
/// let csv = "Location,Latitude,Longitude,Area,Vehicles,Footfall\n\
///            Depot, 51.5, -0.12, 100, 40, 900\n";
/// let dataset = read_sites(csv.as_bytes()).expect("valid dataset");
/// assert_eq!(dataset.len(), 1);
/// assert_eq!(dataset.sites()[0].location, "Depot");
/// ```
pub fn read_sites<R: Read>(source: R) -> Result<SiteDataset, DatasetReadError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(source);
    let columns = ColumnIndex::from_headers(reader.headers()?)?;

    let mut sites = Vec::new();
    for (offset, record) in reader.records().enumerate() {
        let row = offset.saturating_add(1);
        sites.push(parse_site(&record?, &columns, row)?);
    }

    let count = sites.len();
    let dataset = SiteDataset::new(sites).map_err(|_| DatasetReadError::EmptyDataset)?;
    debug!("parsed {count} candidate sites");
    Ok(dataset)
}

/// Open `path` and parse it with [`read_sites`].
///
/// # Errors
/// Returns [`DatasetReadError::Open`] when the file cannot be opened, and
/// otherwise the errors of [`read_sites`].
pub fn read_sites_file(path: &Utf8Path) -> Result<SiteDataset, DatasetReadError> {
    let file = chargeplan_fs::open_utf8_file(path).map_err(|source| DatasetReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = read_sites(file)?;
    info!("loaded {} candidate sites from {path}", dataset.len());
    Ok(dataset)
}

fn parse_site(
    record: &StringRecord,
    columns: &ColumnIndex,
    row: usize,
) -> Result<CandidateSite, DatasetReadError> {
    let location = cell(record, columns.location, LOCATION, row)?;
    let latitude = number(record, columns.latitude, LATITUDE, row)?;
    let longitude = number(record, columns.longitude, LONGITUDE, row)?;
    let metrics = SiteMetrics::new(
        number(record, columns.area, AREA, row)?,
        number(record, columns.vehicles, VEHICLES, row)?,
        number(record, columns.footfall, FOOTFALL, row)?,
    );
    CandidateSite::new(
        location,
        Coord {
            x: longitude,
            y: latitude,
        },
        metrics,
    )
    .map_err(|source| DatasetReadError::InvalidRecord { row, source })
}

fn cell<'r>(
    record: &'r StringRecord,
    index: usize,
    column: &'static str,
    row: usize,
) -> Result<&'r str, DatasetReadError> {
    // Rows are as wide as the header; this only guards a misbuilt index.
    record
        .get(index)
        .ok_or_else(|| DatasetReadError::NonNumericValue {
            row,
            column,
            value: String::new(),
        })
}

fn number(
    record: &StringRecord,
    index: usize,
    column: &'static str,
    row: usize,
) -> Result<f64, DatasetReadError> {
    let value = cell(record, index, column, row)?;
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(DatasetReadError::NonNumericValue {
            row,
            column,
            value: value.to_owned(),
        }),
    }
}
