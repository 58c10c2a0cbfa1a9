//! Command-line interface for ranking training plan templates.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};

const ARG_CATALOG: &str = "catalog";
const ARG_PROFILE: &str = "profile";
const ARG_LIMIT: &str = "limit";
const ARG_GATE: &str = "gate";
const ARG_PENALTY_FACTOR: &str = "penalty-factor";
const ARG_EXCLUSION_FLOOR: &str = "exclusion-floor";
const ARG_OUTPUT: &str = "output";
const ENV_CATALOG: &str = "PLANMATCH_CMDS_RECOMMEND_CATALOG";
const ENV_PROFILE: &str = "PLANMATCH_CMDS_RECOMMEND_PROFILE";

/// Default number of recommendations returned when `--limit` is not given.
pub const DEFAULT_LIMIT: usize = 5;

/// Run the planmatch CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, inputs or output fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "planmatch",
    about = "Rank training plan templates against a user profile",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a template catalog for a profile and print the best matches.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
