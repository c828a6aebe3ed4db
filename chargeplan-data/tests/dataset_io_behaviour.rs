//! Behavioural coverage for loading datasets and exporting rankings.

mod support;

use std::cell::RefCell;

use camino::Utf8PathBuf;
use chargeplan_core::SiteDataset;
use chargeplan_data::{DatasetReadError, read_sites_file, write_ranking_file};
use chargeplan_scorer::{SiteRanker, SiteWeights};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use support::fixture as fixture_path;
use tempfile::TempDir;

/// Scenario state shared across steps.
#[derive(Debug)]
struct DatasetWorld {
    workspace: TempDir,
    source: RefCell<Option<Utf8PathBuf>>,
    loaded: RefCell<Option<Result<SiteDataset, DatasetReadError>>>,
    export: RefCell<Option<Utf8PathBuf>>,
}

impl DatasetWorld {
    fn dataset(&self) -> SiteDataset {
        match self.loaded.borrow().as_ref() {
            Some(Ok(dataset)) => dataset.clone(),
            Some(Err(err)) => panic!("dataset failed to load: {err}"),
            None => panic!("dataset must be loaded first"),
        }
    }

    fn failure(&self) -> String {
        match self.loaded.borrow().as_ref() {
            Some(Err(err)) => format!("{err:?}"),
            Some(Ok(dataset)) => panic!("expected a failure, loaded {} sites", dataset.len()),
            None => panic!("dataset must be loaded first"),
        }
    }
}

#[fixture]
fn world() -> DatasetWorld {
    DatasetWorld {
        workspace: TempDir::new().unwrap_or_else(|err| panic!("create temp dir: {err}")),
        source: RefCell::new(None),
        loaded: RefCell::new(None),
        export: RefCell::new(None),
    }
}

#[given("the dataset fixture {name}")]
fn given_fixture(#[from(world)] world: &DatasetWorld, name: String) {
    let clean_name = name.trim_matches('"');
    *world.source.borrow_mut() = Some(fixture_path(clean_name));
}

#[when("I load the dataset")]
fn load(#[from(world)] world: &DatasetWorld) {
    let Some(path) = world.source.borrow().clone() else {
        panic!("fixture must be chosen first");
    };
    *world.loaded.borrow_mut() = Some(read_sites_file(&path));
}

#[when("I export the top {count} sites")]
fn export(#[from(world)] world: &DatasetWorld, count: usize) {
    let ranking = SiteRanker::new(world.dataset())
        .rank(&SiteWeights::default(), count)
        .unwrap_or_else(|err| panic!("rank fixture: {err}"));
    let root = Utf8PathBuf::from_path_buf(world.workspace.path().to_path_buf())
        .unwrap_or_else(|path| panic!("non-UTF-8 temp path {}", path.display()));
    let target = root.join("exports/top.csv");
    write_ranking_file(&target, &ranking).unwrap_or_else(|err| panic!("export: {err}"));
    *world.export.borrow_mut() = Some(target);
}

#[then("{count} candidate sites are loaded")]
fn loaded_count(#[from(world)] world: &DatasetWorld, count: usize) {
    assert_eq!(world.dataset().len(), count);
}

#[then("the first site is {name}")]
fn first_site(#[from(world)] world: &DatasetWorld, name: String) {
    let dataset = world.dataset();
    let Some(first) = dataset.sites().first() else {
        panic!("dataset should not be empty");
    };
    assert_eq!(first.location, name.trim_matches('"'));
}

#[then("loading fails on row {row} of column {column}")]
fn non_numeric(#[from(world)] world: &DatasetWorld, row: usize, column: String) {
    match world.loaded.borrow().as_ref() {
        Some(Err(DatasetReadError::NonNumericValue {
            row: actual_row,
            column: actual_column,
            ..
        })) => {
            assert_eq!(*actual_row, row);
            assert_eq!(*actual_column, column.trim_matches('"'));
        }
        other => panic!("expected NonNumericValue, got {other:?}"),
    }
}

#[then("loading fails because column {column} is missing")]
fn missing_column(#[from(world)] world: &DatasetWorld, column: String) {
    match world.loaded.borrow().as_ref() {
        Some(Err(DatasetReadError::MissingColumn { column: actual })) => {
            assert_eq!(*actual, column.trim_matches('"'));
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[then("loading fails because the dataset is empty")]
fn empty_dataset(#[from(world)] world: &DatasetWorld) {
    assert_eq!(world.failure(), "EmptyDataset");
}

#[then("the export holds {count} ranked rows with a Score column")]
fn export_rows(#[from(world)] world: &DatasetWorld, count: usize) {
    let Some(path) = world.export.borrow().clone() else {
        panic!("ranking must be exported first");
    };
    let text = std::fs::read_to_string(path.as_std_path())
        .unwrap_or_else(|err| panic!("read export {path}: {err}"));
    let mut lines = text.lines();
    let Some(header) = lines.next() else {
        panic!("export should have a header");
    };
    assert!(header.ends_with(",Score"), "header was {header}");
    assert_eq!(lines.count(), count);
}

#[scenario(path = "tests/features/dataset_io.feature", index = 0)]
fn loads_well_formed_dataset(#[from(world)] world: DatasetWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dataset_io.feature", index = 1)]
fn rejects_non_numeric_footfall(#[from(world)] world: DatasetWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dataset_io.feature", index = 2)]
fn rejects_missing_area(#[from(world)] world: DatasetWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dataset_io.feature", index = 3)]
fn rejects_header_only(#[from(world)] world: DatasetWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dataset_io.feature", index = 4)]
fn exports_shortlist(#[from(world)] world: DatasetWorld) {
    let _ = world;
}
