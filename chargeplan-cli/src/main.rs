//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use chargeplan_cli::CliError;

fn main() -> eyre::Result<()> {
    pretty_env_logger::init();
    match chargeplan_cli::run() {
        Ok(()) => Ok(()),
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => Err(eyre::Report::new(err)),
    }
}
