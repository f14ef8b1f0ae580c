//! Core domain types for the Meridian route planner.
//!
//! Meridian finds a short open path through a set of geographic waypoints with
//! both endpoints fixed: the first waypoint is always visited first and the
//! last waypoint is always visited last. This crate holds everything that is
//! independent of the search engine:
//!
//! - [`Waypoint`] and the JSON [`load_waypoints`] loader,
//! - [`haversine_km`] and the [`DistanceMatrix`] built from it,
//! - the validated [`Route`] and [`Solution`] types,
//! - the [`Solver`] trait that engines implement.
//!
//! Constructors return `Result` to surface invalid input early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod geodesy;
#[cfg(feature = "serde")]
mod loader;
mod matrix;
mod route;
mod solver;
mod waypoint;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use geodesy::{EARTH_RADIUS_KM, haversine_km};
#[cfg(feature = "serde")]
pub use loader::{LoadError, MIN_WAYPOINTS, load_waypoints, parse_waypoints};
pub use matrix::{DistanceMatrix, MatrixError};
pub use route::{Route, RouteError};
pub use solver::{
    Diagnostics, Solution, SolveError, SolveRequest, SolveRequestValidationError, Solver,
};
pub use waypoint::{Waypoint, WaypointError};
