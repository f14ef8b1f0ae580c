//! Command-line interface for the Meridian route planner.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod logging;
mod render;
mod solve;

pub use error::CliError;
pub use render::{group_thousands, render_no_solution, render_solution};

use solve::{SolveArgs, run_solve};

pub(crate) const ARG_SOLVE_WAYPOINTS: &str = "waypoints";
pub(crate) const ARG_SOLVE_TIME_LIMIT: &str = "time-limit";
pub(crate) const ARG_SOLVE_ENGINE: &str = "engine";
pub(crate) const ARG_SOLVE_LOG_LEVEL: &str = "log-level";
pub(crate) const ENV_SOLVE_WAYPOINTS: &str = "MERIDIAN_CMDS_SOLVE_WAYPOINTS_PATH";

/// Run the Meridian CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => run_solve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "meridian",
    about = "Plan the shortest open route through a list of waypoints",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find a short route from the first waypoint to the last.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
