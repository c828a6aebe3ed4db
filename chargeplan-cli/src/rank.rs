//! Rank command implementation for the chargeplan CLI.

use std::io::{BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use chargeplan_core::SiteDataset;
use chargeplan_data::{read_sites_file, write_ranking, write_ranking_file};
use chargeplan_scorer::{Ranking, RankingReport, SiteRanker, SiteWeights, default_top_n};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DATASET, ARG_NORMALISE_WEIGHTS, ARG_OUTPUT, ARG_REPORT, ARG_TOP_N, ARG_WEIGHT_AREA,
    ARG_WEIGHT_DISTANCE, ARG_WEIGHT_FOOTFALL, ARG_WEIGHT_VEHICLES, CliError, ENV_DATASET,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every site in a CSV dataset on area, vehicle count, \
                 footfall, and isolation from the other sites, then print the \
                 best candidates. Weights can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Rank candidate charging sites"
)]
#[ortho_config(prefix = "CHARGEPLAN")]
pub(crate) struct RankArgs {
    /// Path to a CSV file with Location, Latitude, Longitude, Area, Vehicles,
    /// and Footfall columns.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Weight applied to normalised area (default 0.2).
    #[arg(long = ARG_WEIGHT_AREA, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_area: Option<f64>,
    /// Weight applied to normalised vehicle count (default 0.2).
    #[arg(long = ARG_WEIGHT_VEHICLES, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_vehicles: Option<f64>,
    /// Weight applied to normalised footfall (default 0.25).
    #[arg(long = ARG_WEIGHT_FOOTFALL, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_footfall: Option<f64>,
    /// Weight applied to normalised mean distance (default 0.35).
    #[arg(long = ARG_WEIGHT_DISTANCE, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_distance: Option<f64>,
    /// Number of sites to keep (default: five, or fewer for small datasets).
    #[arg(long = ARG_TOP_N, value_name = "count")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
    /// Write the ranking CSV here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Also write a JSON report with summary, chart, and map payloads.
    #[arg(long = ARG_REPORT, value_name = "path")]
    #[serde(default)]
    pub(crate) report: Option<Utf8PathBuf>,
    /// Rescale the weights to sum to one before scoring.
    #[arg(
        long = ARG_NORMALISE_WEIGHTS,
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    pub(crate) normalise_weights: Option<bool>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the CSV dataset.
    pub(crate) dataset: Utf8PathBuf,
    /// Validated weights, already rescaled when requested.
    pub(crate) weights: SiteWeights,
    /// Requested shortlist size; resolved against the dataset when absent.
    pub(crate) top_n: Option<usize>,
    /// Ranking CSV destination; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
    /// JSON report destination.
    pub(crate) report: Option<Utf8PathBuf>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.dataset, ARG_DATASET)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match chargeplan_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_DATASET,
        })?;

        let defaults = SiteWeights::default();
        let weights = SiteWeights::new(
            args.weight_area.unwrap_or(defaults.area),
            args.weight_vehicles.unwrap_or(defaults.vehicles),
            args.weight_footfall.unwrap_or(defaults.footfall),
            args.weight_distance.unwrap_or(defaults.distance),
        )?;
        let weights = if args.normalise_weights.unwrap_or(false) {
            weights.normalised()
        } else {
            weights
        };

        Ok(Self {
            dataset,
            weights,
            top_n: args.top_n,
            output: args.output,
            report: args.report,
        })
    }
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout).map(|_| ())
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<Ranking, CliError> {
    let config = resolve_rank_config(args)?;
    let dataset = load_dataset(&config.dataset)?;
    let top_n = config
        .top_n
        .unwrap_or_else(|| default_top_n(dataset.len()));

    let ranker = SiteRanker::new(dataset);
    let ranking = ranker.rank(&config.weights, top_n)?;
    info!(
        "ranked {} of {} candidate sites",
        ranking.len(),
        ranking.candidate_count()
    );

    match &config.output {
        Some(path) => write_ranking_file(path, &ranking)?,
        None => write_ranking(&mut *writer, &ranking)?,
    }
    if let Some(path) = &config.report {
        write_report(path, &RankingReport::new(ranker.dataset(), &ranking))?;
    }
    Ok(ranking)
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn load_dataset(path: &Utf8Path) -> Result<SiteDataset, CliError> {
    Ok(read_sites_file(path)?)
}

fn write_report(path: &Utf8Path, report: &RankingReport) -> Result<(), CliError> {
    let file = chargeplan_fs::create_utf8_file(path).map_err(|source| CliError::CreateReport {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).map_err(CliError::WriteReport)?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|source| CliError::CreateReport {
            path: path.to_path_buf(),
            source,
        })?;
    info!("wrote ranking report to {path}");
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
