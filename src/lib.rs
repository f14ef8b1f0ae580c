//! Facade crate for the Meridian route planner.
//!
//! This crate re-exports the core domain types and the native guided local
//! search engine, and exposes the `vrp-core` engine behind the `solver-vrp`
//! feature flag.

#![forbid(unsafe_code)]

pub use meridian_core::{
    Diagnostics, DistanceMatrix, EARTH_RADIUS_KM, MatrixError, Route, RouteError, Solution,
    SolveError, SolveRequest, SolveRequestValidationError, Solver, Waypoint, WaypointError,
    haversine_km,
};

#[cfg(feature = "serde")]
pub use meridian_core::{LoadError, MIN_WAYPOINTS, load_waypoints, parse_waypoints};

pub use meridian_solver_gls::{GlsSolver, GlsSolverConfig};

#[cfg(feature = "solver-vrp")]
pub use meridian_solver_vrp::{VrpSolver, VrpSolverConfig};
