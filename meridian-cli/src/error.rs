//! Error types emitted by the Meridian CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use meridian_core::{LoadError, SolveError};
use thiserror::Error;

/// Errors emitted by the Meridian CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it on the command line or set {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        /// Cargo feature name.
        feature: &'static str,
        /// What the user asked for.
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option name.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option name.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option name.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The time limit was zero.
    #[error("--{field} must be a positive number of seconds, got {value}")]
    InvalidTimeLimit {
        /// Option name.
        field: &'static str,
        /// The rejected value.
        value: u64,
    },
    /// The engine name is not recognised.
    #[error("unknown engine {value:?} (expected `vrp` or `gls`)")]
    UnknownEngine {
        /// The rejected value.
        value: String,
    },
    /// The log level name is not recognised.
    #[error("unknown log level {value:?} (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel {
        /// The rejected value.
        value: String,
    },
    /// Installing the logger failed.
    #[error("failed to initialise logging: {0}")]
    InitLogging(#[source] log::SetLoggerError),
    /// Opening the waypoint file failed.
    #[error("failed to open waypoints at {path:?}: {source}")]
    OpenWaypoints {
        /// The waypoint file.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The waypoint file could not be decoded or holds too few waypoints.
    #[error("failed to load waypoints from {path:?}: {source}")]
    LoadWaypoints {
        /// The waypoint file.
        path: Utf8PathBuf,
        /// Loader error.
        #[source]
        source: LoadError,
    },
    /// The solver rejected the request or found no route.
    #[error("solver failed: {source}")]
    Solve {
        /// Solver error.
        #[source]
        source: SolveError,
    },
    /// Writing the rendered route failed.
    #[error("failed to write solve output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
