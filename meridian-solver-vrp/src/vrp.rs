//! `vrp-core` modelling helpers for `VrpSolver`.
//!
//! This module converts a [`SolveRequest`] into a single-vehicle `vrp-core`
//! problem, runs the solver, and translates the resulting tour back into
//! waypoint indices. Waypoint indices double as `vrp-core` locations, so the
//! transport cost reads the distance matrix directly.

use std::sync::Arc;

use meridian_core::{DistanceMatrix, SolveError, SolveRequest};
use vrp_core::models::common::{Location, Profile};
use vrp_core::models::problem::TravelTime;
use vrp_core::models::solution::Route as VrpRoute;
use vrp_core::prelude::*;

use crate::solver::VrpSolverConfig;

fn define_goal(transport: Arc<dyn TransportCost>) -> GenericResult<GoalContext> {
    let unassigned_feature = MinimizeUnassignedBuilder::new("min-unassigned").build()?;
    let transport_feature = TransportFeatureBuilder::new("min-distance")
        .set_transport_cost(transport)
        .set_time_constrained(false)
        .build_minimize_distance()?;

    GoalContextBuilder::with_features(&[unassigned_feature, transport_feature])?.build()
}

fn define_problem(
    request: &SolveRequest<'_>,
    transport: Arc<dyn TransportCost>,
    goal: GoalContext,
) -> GenericResult<Problem> {
    let jobs = request
        .intermediates()
        .into_iter()
        .map(|location| {
            SingleBuilder::default()
                .id(format!("waypoint{location}").as_str())
                .location(location)?
                .build_as_job()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let vehicle = VehicleBuilder::default()
        .id("traveller")
        .add_detail(
            VehicleDetailBuilder::default()
                .set_start_location(request.start)
                .set_end_location(request.end)
                .build()?,
        )
        .build()?;

    ProblemBuilder::default()
        .add_jobs(jobs.into_iter())
        .add_vehicles(std::iter::once(vehicle))
        .with_goal(goal)
        .with_transport_cost(transport)
        .build()
}

/// Matrix-backed transport cost; travel duration equals distance.
struct MatrixTransportCost {
    matrix: DistanceMatrix,
}

impl MatrixTransportCost {
    const fn new(matrix: DistanceMatrix) -> Self {
        Self { matrix }
    }

    fn distance_km(&self, from: Location, to: Location) -> f64 {
        let result = self.matrix.distance(from, to);
        debug_assert!(
            result.is_some(),
            "Matrix lookup failed: from={from}, to={to}"
        );
        result.unwrap_or(f64::INFINITY)
    }
}

impl TransportCost for MatrixTransportCost {
    // The trait signature includes `route` and `departure` parameters even
    // though this matrix-backed implementation does not use them.
    fn distance(
        &self,
        _route: &VrpRoute,
        from: Location,
        to: Location,
        _departure: TravelTime,
    ) -> Cost {
        self.distance_km(from, to)
    }

    fn duration(
        &self,
        _route: &VrpRoute,
        from: Location,
        to: Location,
        _departure: TravelTime,
    ) -> f64 {
        self.distance_km(from, to)
    }

    fn distance_approx(&self, profile: &Profile, from: usize, to: usize) -> f64 {
        self.duration_approx(profile, from, to)
    }

    fn duration_approx(&self, _profile: &Profile, from: usize, to: usize) -> f64 {
        self.distance_km(from, to)
    }
}

/// Engine environment whose progress messages go through the `log` facade.
///
/// vrp-core's default logger prints to stdout, which would interleave with
/// the rendered route.
fn solver_environment() -> Arc<Environment> {
    let logger: InfoLogger =
        Arc::new(|message: &str| log::debug!(target: "vrp_core", "{message}"));
    Arc::new(Environment {
        logger,
        ..Environment::default()
    })
}

fn engine_error(stage: &str, err: &GenericError) -> SolveError {
    SolveError::Engine {
        message: format!("{stage}: {err}"),
    }
}

/// Whole seconds of search time, never less than one.
fn max_time_seconds(request: &SolveRequest<'_>) -> usize {
    usize::try_from(request.time_budget.as_secs().max(1)).unwrap_or(usize::MAX)
}

/// Context for running a `vrp-core` solve with shared configuration.
pub(super) struct VrpSolveContext<'a> {
    config: &'a VrpSolverConfig,
}

impl<'a> VrpSolveContext<'a> {
    /// Create a new solve context.
    pub(super) const fn new(config: &'a VrpSolverConfig) -> Self {
        Self { config }
    }

    /// Solve `request` and return waypoint indices in visiting order,
    /// endpoints included.
    pub(super) fn solve(&self, request: &SolveRequest<'_>) -> Result<Vec<usize>, SolveError> {
        let transport: Arc<dyn TransportCost> =
            Arc::new(MatrixTransportCost::new(request.matrix.clone()));
        let goal =
            define_goal(transport.clone()).map_err(|err| engine_error("goal definition", &err))?;
        let problem = Arc::new(
            define_problem(request, transport, goal)
                .map_err(|err| engine_error("problem definition", &err))?,
        );

        let max_time = max_time_seconds(request);
        log::debug!(
            "running vrp-core on {} jobs for at most {max_time}s",
            request.size().saturating_sub(2)
        );
        let vrp_config = VrpConfigBuilder::new(problem.clone())
            .set_environment(solver_environment())
            .prebuild()
            .map_err(|err| engine_error("solver configuration", &err))?
            .with_max_time(Some(max_time))
            .with_max_generations(self.config.max_generations)
            .build()
            .map_err(|err| engine_error("solver configuration", &err))?;

        let solution = vrp_core::solver::Solver::new(problem, vrp_config)
            .solve()
            .map_err(|err| engine_error("search", &err))?;

        if !solution.unassigned.is_empty() {
            log::warn!(
                "vrp-core left {} waypoints unassigned",
                solution.unassigned.len()
            );
            return Err(SolveError::NoSolution);
        }

        let visits = solution
            .get_locations()
            .flatten()
            .filter(|&location| location != request.start && location != request.end);
        let mut stops = Vec::with_capacity(request.size());
        stops.push(request.start);
        stops.extend(visits);
        stops.push(request.end);
        Ok(stops)
    }
}
