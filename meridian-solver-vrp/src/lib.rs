//! Vehicle Routing Problem backed solver for Meridian.
//!
//! This crate provides [`VrpSolver`], an implementation of the
//! [`Solver`](meridian_core::Solver) trait on top of the `vrp-core`
//! metaheuristics. The open path is modelled as a single vehicle that departs
//! from the fixed start, must serve one job per intermediate waypoint and
//! finishes at the fixed end. The goal first minimises unassigned jobs and then
//! total distance read from the [`DistanceMatrix`](meridian_core::DistanceMatrix).
//!
//! Any failure to model the problem maps to
//! [`SolveError::Engine`](meridian_core::SolveError::Engine); a search that
//! leaves jobs unassigned maps to
//! [`SolveError::NoSolution`](meridian_core::SolveError::NoSolution).

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod solver;
mod vrp;

pub use solver::{VrpSolver, VrpSolverConfig};
