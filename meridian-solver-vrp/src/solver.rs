//! `VrpSolver` implementation backed by `vrp-core`.

use std::time::Instant;

use meridian_core::{Diagnostics, Solution, SolveError, SolveRequest, Solver};

use crate::vrp::VrpSolveContext;

/// Configuration for [`VrpSolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VrpSolverConfig {
    /// Optional upper bound on `vrp-core` generations. The request's time
    /// budget always applies.
    pub max_generations: Option<usize>,
}

/// Native solver using `vrp-core` to search for short open paths.
///
/// # Examples
/// ```rust,no_run
/// use std::time::Duration;
/// use meridian_core::{DistanceMatrix, SolveRequest, Solver};
/// use meridian_solver_vrp::VrpSolver;
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 4.0, 1.0, 5.0],
///     vec![4.0, 0.0, 3.0, 1.0],
///     vec![1.0, 3.0, 0.0, 4.0],
///     vec![5.0, 1.0, 4.0, 0.0],
/// ])?;
/// let request = SolveRequest::new(&matrix, Duration::from_secs(1));
/// let solution = VrpSolver::new().solve(&request)?;
/// assert_eq!(solution.route.stops(), &[0, 2, 1, 3]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct VrpSolver {
    config: VrpSolverConfig,
}

impl VrpSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: VrpSolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &VrpSolverConfig {
        &self.config
    }
}

impl Solver for VrpSolver {
    fn solve(&self, request: &SolveRequest<'_>) -> Result<Solution, SolveError> {
        request.validate()?;
        let started_at = Instant::now();

        let route = match request.trivial_route() {
            Some(route) => route,
            None => {
                let stops = VrpSolveContext::new(&self.config).solve(request)?;
                request.route(stops).map_err(|err| {
                    log::warn!("vrp-core returned an infeasible tour: {err}");
                    SolveError::NoSolution
                })?
            }
        };

        // `vrp-core` does not report how many generations it ran.
        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            iterations: 0,
        };
        let solution = Solution::new(route, request.matrix, diagnostics);
        log::info!(
            "vrp solver finished in {:?}: {:.1} km",
            diagnostics.solve_time,
            solution.total_distance_km
        );
        Ok(solution)
    }
}
