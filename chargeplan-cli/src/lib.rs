//! Command-line interface for ranking candidate charging sites.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod rank;

pub use error::CliError;

const ARG_DATASET: &str = "dataset";
const ARG_WEIGHT_AREA: &str = "weight-area";
const ARG_WEIGHT_VEHICLES: &str = "weight-vehicles";
const ARG_WEIGHT_FOOTFALL: &str = "weight-footfall";
const ARG_WEIGHT_DISTANCE: &str = "weight-distance";
const ARG_TOP_N: &str = "top-n";
const ARG_OUTPUT: &str = "output";
const ARG_REPORT: &str = "report";
const ARG_NORMALISE_WEIGHTS: &str = "normalise-weights";
const ENV_DATASET: &str = "CHARGEPLAN_CMDS_RANK_DATASET";

/// Run the chargeplan CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError::ArgumentParsing`] for invalid arguments (including
/// `--help` and `--version`, which clap reports as errors) and the failure of
/// the selected command otherwise.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => rank::run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "chargeplan",
    about = "Rank candidate EV charging sites by weighted criteria",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a site dataset and print the best candidates.
    Rank(rank::RankArgs),
}

#[cfg(test)]
mod tests;
