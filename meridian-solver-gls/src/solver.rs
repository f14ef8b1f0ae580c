//! `GlsSolver`: exact search for small requests, guided local search otherwise.

use std::time::{Duration, Instant};

use meridian_core::{Diagnostics, Solution, SolveError, SolveRequest, Solver};

use crate::exact::{MAX_EXACT_INTERMEDIATES, held_karp};
use crate::guided::GuidedSearch;

/// Budgets beyond a year are clamped so the deadline cannot overflow.
const MAX_BUDGET: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Configuration for [`GlsSolver`].
#[derive(Debug, Clone, PartialEq)]
pub struct GlsSolverConfig {
    /// Scales edge penalties relative to the average edge of the first local
    /// optimum.
    pub lambda_coefficient: f64,
    /// Optional cap on guided search rounds; the time budget always applies.
    pub max_iterations: Option<u64>,
    /// Requests with at most this many intermediate stops are solved exactly.
    ///
    /// Values above 16 are treated as 16.
    pub exact_threshold: usize,
}

impl Default for GlsSolverConfig {
    fn default() -> Self {
        Self {
            lambda_coefficient: 0.1,
            max_iterations: None,
            exact_threshold: 10,
        }
    }
}

/// Native open-path solver with no external engine.
///
/// # Examples
/// ```rust
/// use std::time::Duration;
/// use meridian_core::{DistanceMatrix, SolveRequest, Solver};
/// use meridian_solver_gls::GlsSolver;
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 4.0, 1.0, 5.0],
///     vec![4.0, 0.0, 3.0, 1.0],
///     vec![1.0, 3.0, 0.0, 4.0],
///     vec![5.0, 1.0, 4.0, 0.0],
/// ])?;
/// let request = SolveRequest::new(&matrix, Duration::from_secs(1));
/// let solution = GlsSolver::default().solve(&request)?;
/// assert_eq!(solution.route.stops(), &[0, 2, 1, 3]);
/// assert_eq!(solution.total_distance_km, 5.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GlsSolver {
    config: GlsSolverConfig,
}

impl GlsSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: GlsSolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &GlsSolverConfig {
        &self.config
    }

    fn search(&self, request: &SolveRequest<'_>, started_at: Instant) -> (Vec<usize>, u64) {
        let intermediates = request.size().saturating_sub(2);
        if intermediates <= self.config.exact_threshold.min(MAX_EXACT_INTERMEDIATES) {
            if let Some(order) = held_karp(request) {
                log::debug!("solved {intermediates} intermediate stops exactly");
                return (order, 0);
            }
        }
        let guided = GuidedSearch {
            lambda_coefficient: self.config.lambda_coefficient,
            max_iterations: self.config.max_iterations,
            deadline: started_at + request.time_budget.min(MAX_BUDGET),
        };
        let outcome = guided.run(request);
        (outcome.order, outcome.iterations)
    }
}

impl Solver for GlsSolver {
    fn solve(&self, request: &SolveRequest<'_>) -> Result<Solution, SolveError> {
        request.validate()?;
        let started_at = Instant::now();

        let (route, iterations) = match request.trivial_route() {
            Some(route) => (route, 0),
            None => {
                let (order, iterations) = self.search(request, started_at);
                let route = request.route(order).map_err(|err| {
                    log::warn!("guided local search produced an invalid route: {err}");
                    SolveError::NoSolution
                })?;
                (route, iterations)
            }
        };

        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            iterations,
        };
        let solution = Solution::new(route, request.matrix, diagnostics);
        log::info!(
            "gls solver finished in {:?} after {} iterations: {:.1} km",
            diagnostics.solve_time,
            diagnostics.iterations,
            solution.total_distance_km
        );
        Ok(solution)
    }
}
