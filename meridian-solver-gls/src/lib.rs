//! Self-contained open-path solver for Meridian.
//!
//! [`GlsSolver`] implements [`Solver`](meridian_core::Solver) without any
//! external optimisation engine. Small instances are solved exactly with a
//! Held-Karp dynamic program. Larger ones start from a path-cheapest-arc
//! construction and are improved by 2-opt and or-opt moves driven by guided
//! local search, which penalises long edges at each local optimum so the
//! search can escape it.
//!
//! The first and last stops of the request never move.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod construction;
mod exact;
mod guided;
mod local_search;
mod penalties;
mod solver;

pub use solver::{GlsSolver, GlsSolverConfig};
