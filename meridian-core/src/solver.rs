use std::time::Duration;

use thiserror::Error;

use crate::{DistanceMatrix, Route, RouteError};

/// Parameters for a solve request.
///
/// The request borrows the distance matrix, names the fixed start and end
/// waypoints and bounds the search with a wall-clock budget.
///
/// # Examples
/// ```rust
/// use std::time::Duration;
/// use meridian_core::{DistanceMatrix, SolveRequest};
///
/// let matrix = DistanceMatrix::from_rows(vec![vec![0.0, 3.0], vec![3.0, 0.0]])?;
/// let request = SolveRequest::new(&matrix, Duration::from_secs(60));
/// assert_eq!((request.start, request.end), (0, 1));
/// assert!(request.validate().is_ok());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveRequest<'a> {
    /// Pairwise distances between all waypoints.
    pub matrix: &'a DistanceMatrix,
    /// Index of the mandatory first stop.
    pub start: usize,
    /// Index of the mandatory last stop.
    pub end: usize,
    /// Upper bound on search effort.
    pub time_budget: Duration,
}

/// Reasons a [`SolveRequest`] is rejected before any search starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveRequestValidationError {
    /// A path needs at least a start and an end.
    #[error("at least 2 waypoints are required, got {count}")]
    TooFewWaypoints {
        /// Waypoints in the matrix.
        count: usize,
    },
    /// An endpoint index is outside the matrix.
    #[error("endpoint {index} is outside the {size} known waypoints")]
    EndpointOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of waypoints.
        size: usize,
    },
    /// Start and end refer to the same waypoint.
    #[error("start and end must differ, both are {index}")]
    SameEndpoints {
        /// The shared index.
        index: usize,
    },
    /// The time budget was zero.
    #[error("time budget must be positive")]
    ZeroTimeBudget,
}

impl<'a> SolveRequest<'a> {
    /// Request a path from the first to the last waypoint of `matrix`.
    pub const fn new(matrix: &'a DistanceMatrix, time_budget: Duration) -> Self {
        Self {
            matrix,
            start: 0,
            end: matrix.size().saturating_sub(1),
            time_budget,
        }
    }

    /// Number of waypoints in the request.
    pub const fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Check the request against the preconditions every solver relies on.
    pub fn validate(&self) -> Result<(), SolveRequestValidationError> {
        let size = self.size();
        if size < 2 {
            return Err(SolveRequestValidationError::TooFewWaypoints { count: size });
        }
        for index in [self.start, self.end] {
            if index >= size {
                return Err(SolveRequestValidationError::EndpointOutOfRange { index, size });
            }
        }
        if self.start == self.end {
            return Err(SolveRequestValidationError::SameEndpoints { index: self.start });
        }
        if self.time_budget.is_zero() {
            return Err(SolveRequestValidationError::ZeroTimeBudget);
        }
        Ok(())
    }

    /// Waypoint indices that are neither the start nor the end, ascending.
    pub fn intermediates(&self) -> Vec<usize> {
        (0..self.size())
            .filter(|&index| index != self.start && index != self.end)
            .collect()
    }

    /// The only feasible route when there is no ordering choice to make.
    ///
    /// Returns `Some` for requests with at most one intermediate stop and
    /// `None` otherwise. Call [`validate`](Self::validate) first.
    pub fn trivial_route(&self) -> Option<Route> {
        let intermediates = self.intermediates();
        if intermediates.len() > 1 {
            return None;
        }
        let mut stops = Vec::with_capacity(intermediates.len() + 2);
        stops.push(self.start);
        stops.extend(intermediates);
        stops.push(self.end);
        self.route(stops).ok()
    }

    /// Validate `stops` as a complete route for this request.
    pub fn route(&self, stops: Vec<usize>) -> Result<Route, RouteError> {
        Route::new(stops, self.start, self.end, self.size())
    }
}

/// Search statistics reported alongside a [`Solution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent inside the solver.
    pub solve_time: Duration,
    /// Engine-specific count of search iterations (local optima or generations).
    pub iterations: u64,
}

/// A validated route together with its length.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The ordered route.
    pub route: Route,
    /// Sum of consecutive matrix distances along the route, in kilometres.
    pub total_distance_km: f64,
    /// Search statistics.
    pub diagnostics: Diagnostics,
}

impl Solution {
    /// Build a solution, measuring the route against `matrix`.
    ///
    /// The total is always recomputed here so every engine reports distances
    /// the same way.
    pub fn new(route: Route, matrix: &DistanceMatrix, diagnostics: Diagnostics) -> Self {
        let total_distance_km = matrix.path_length(route.stops());
        Self {
            route,
            total_distance_km,
            diagnostics,
        }
    }
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Request parameters were invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] SolveRequestValidationError),
    /// The search finished without a feasible route.
    #[error("no solution found within the time budget")]
    NoSolution,
    /// The engine could not model or run the problem.
    #[error("solver engine failed: {message}")]
    Engine {
        /// Engine-provided description.
        message: String,
    },
}

/// Find a fixed-endpoint open path of minimum total distance.
///
/// Implementations must validate the request and return
/// [`SolveError::InvalidRequest`] rather than panicking, must leave the
/// matrix untouched, and must only return routes that satisfy [`Route::new`].
/// Solvers must be `Send + Sync` to operate safely across threads.
pub trait Solver: Send + Sync {
    /// Solve a request, producing a solution or an error.
    fn solve(&self, request: &SolveRequest<'_>) -> Result<Solution, SolveError>;
}
