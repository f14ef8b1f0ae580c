//! Solve command implementation for the Meridian CLI.

use std::fmt;
use std::io::{BufReader, Write};
use std::str::FromStr;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::LevelFilter;
use meridian_core::{
    DistanceMatrix, Solution, SolveError, SolveRequest, Solver, Waypoint, load_waypoints,
};
use meridian_solver_gls::GlsSolver;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::render::{render_no_solution, render_solution};
use crate::{
    ARG_SOLVE_ENGINE, ARG_SOLVE_LOG_LEVEL, ARG_SOLVE_TIME_LIMIT, ARG_SOLVE_WAYPOINTS, CliError,
    ENV_SOLVE_WAYPOINTS, logging,
};

/// Search budget applied when `--time-limit` is not configured.
pub(crate) const DEFAULT_TIME_LIMIT_SECS: u64 = 60;

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load waypoints from a JSON array of {\"state\", \"capital\", \"lat\", \"long\"} \
                 records and print the shortest route found that starts at the first \
                 record, ends at the last and visits every other record exactly once.",
    about = "Solve an open-path route through a waypoint file"
)]
#[ortho_config(prefix = "MERIDIAN")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file of waypoint records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) waypoints_path: Option<Utf8PathBuf>,
    /// Search budget in whole seconds (default 60).
    #[arg(long = ARG_SOLVE_TIME_LIMIT, value_name = "seconds")]
    #[serde(default)]
    pub(crate) time_limit: Option<u64>,
    /// Search engine: `vrp` or `gls`.
    #[arg(long = ARG_SOLVE_ENGINE, value_name = "engine")]
    #[serde(default)]
    pub(crate) engine: Option<String>,
    /// Log verbosity written to stderr (default `info`).
    #[arg(long = ARG_SOLVE_LOG_LEVEL, value_name = "level")]
    #[serde(default)]
    pub(crate) log_level: Option<String>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Search engine selected for a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Engine {
    /// `vrp-core` metaheuristic.
    Vrp,
    /// Native guided local search.
    Gls,
}

impl Default for Engine {
    fn default() -> Self {
        if cfg!(feature = "solver-vrp") {
            Self::Vrp
        } else {
            Self::Gls
        }
    }
}

impl FromStr for Engine {
    type Err = CliError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vrp" => Ok(Self::Vrp),
            "gls" => Ok(Self::Gls),
            _ => Err(CliError::UnknownEngine {
                value: value.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vrp => f.write_str("vrp"),
            Self::Gls => f.write_str("gls"),
        }
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Path to the waypoint JSON file.
    pub(crate) waypoints_path: Utf8PathBuf,
    /// Search budget handed to the solver.
    pub(crate) time_limit: Duration,
    /// Engine used for the search.
    pub(crate) engine: Engine,
    /// Logger verbosity.
    pub(crate) log_level: LevelFilter,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.waypoints_path, ARG_SOLVE_WAYPOINTS)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
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

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let waypoints_path = args.waypoints_path.ok_or(CliError::MissingArgument {
            field: ARG_SOLVE_WAYPOINTS,
            env: ENV_SOLVE_WAYPOINTS,
        })?;

        let seconds = args.time_limit.unwrap_or(DEFAULT_TIME_LIMIT_SECS);
        if seconds == 0 {
            return Err(CliError::InvalidTimeLimit {
                field: ARG_SOLVE_TIME_LIMIT,
                value: seconds,
            });
        }

        let engine = args
            .engine
            .as_deref()
            .map(Engine::from_str)
            .transpose()?
            .unwrap_or_default();
        let log_level = args
            .log_level
            .as_deref()
            .map(logging::parse_level)
            .transpose()?
            .unwrap_or(LevelFilter::Info);

        Ok(Self {
            waypoints_path,
            time_limit: Duration::from_secs(seconds),
            engine,
            log_level,
        })
    }
}

/// Builds a solver instance for the current solve invocation.
pub(super) trait SolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError>;
}

pub(super) struct DefaultSolverBuilder;

impl SolverBuilder for DefaultSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
        match config.engine {
            Engine::Gls => Ok(Box::new(GlsSolver::new())),
            Engine::Vrp => build_vrp_solver(),
        }
    }
}

#[cfg(feature = "solver-vrp")]
fn build_vrp_solver() -> Result<Box<dyn Solver>, CliError> {
    Ok(Box::new(meridian_solver_vrp::VrpSolver::new()))
}

#[cfg(not(feature = "solver-vrp"))]
fn build_vrp_solver() -> Result<Box<dyn Solver>, CliError> {
    Err(CliError::MissingFeature {
        feature: "solver-vrp",
        action: "the `vrp` engine",
    })
}

pub(super) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    logging::init(config.log_level)?;
    let mut stdout = std::io::stdout().lock();
    solve_and_render(&config, &DefaultSolverBuilder, &mut stdout)
}

#[cfg(test)]
pub(super) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    solve_and_render(&config, builder, writer)
}

pub(super) fn solve_and_render(
    config: &SolveConfig,
    builder: &dyn SolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    match execute_solve(config, builder) {
        Ok((waypoints, solution)) => {
            render_solution(writer, &waypoints, &solution).map_err(CliError::WriteOutput)
        }
        Err(err @ CliError::Solve {
            source: SolveError::NoSolution,
        }) => {
            render_no_solution(writer).map_err(CliError::WriteOutput)?;
            Err(err)
        }
        Err(err) => Err(err),
    }
}

/// Load, measure and solve: the whole pipeline short of rendering.
pub(super) fn execute_solve(
    config: &SolveConfig,
    builder: &dyn SolverBuilder,
) -> Result<(Vec<Waypoint>, Solution), CliError> {
    log::debug!("reading waypoints from {}", config.waypoints_path);
    let waypoints = load_waypoint_file(&config.waypoints_path)?;
    let matrix = DistanceMatrix::from_waypoints(&waypoints);

    let solver = builder.build(config)?;
    log::info!(
        "solving with the {} engine for up to {}s",
        config.engine,
        config.time_limit.as_secs()
    );
    let request = SolveRequest::new(&matrix, config.time_limit);
    let solution = solver
        .solve(&request)
        .map_err(|source| CliError::Solve { source })?;
    log::info!(
        "route found in {:?}: {:.1} km",
        solution.diagnostics.solve_time,
        solution.total_distance_km
    );
    Ok((waypoints, solution))
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads JSON-encoded waypoint records from disk.
pub(super) fn load_waypoint_file(path: &Utf8Path) -> Result<Vec<Waypoint>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenWaypoints {
        path: path.to_path_buf(),
        source,
    })?;
    load_waypoints(BufReader::new(file)).map_err(|source| CliError::LoadWaypoints {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
