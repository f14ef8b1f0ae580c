//! Property-based tests for the GLS solver.
//!
//! # Invariants tested
//!
//! - **Route validity:** every waypoint appears once, start first, end last.
//! - **Reported distance:** the total equals the sum of matrix lookups.
//! - **Optimality bound:** guided search never beats the exact optimum.

use std::collections::HashSet;
use std::time::Duration;

use meridian_core::test_support::random_waypoints;
use meridian_core::{DistanceMatrix, SolveRequest, Solver};
use meridian_solver_gls::{GlsSolver, GlsSolverConfig};
use proptest::prelude::*;

fn bounded(max_iterations: u64) -> GlsSolver {
    GlsSolver::with_config(GlsSolverConfig {
        max_iterations: Some(max_iterations),
        ..GlsSolverConfig::default()
    })
}

fn guided_only(max_iterations: u64) -> GlsSolver {
    GlsSolver::with_config(GlsSolverConfig {
        exact_threshold: 0,
        max_iterations: Some(max_iterations),
        ..GlsSolverConfig::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    #[test]
    fn routes_visit_every_waypoint_once(count in 2_usize..30, seed in any::<u64>()) {
        let matrix = DistanceMatrix::from_waypoints(&random_waypoints(count, seed));
        let request = SolveRequest::new(&matrix, Duration::from_secs(5));
        let solution = guided_only(5).solve(&request).expect("solve should succeed");

        let stops = solution.route.stops();
        prop_assert_eq!(stops.len(), count);
        prop_assert_eq!(stops.first().copied(), Some(0));
        prop_assert_eq!(stops.last().copied(), Some(count - 1));
        let unique: HashSet<usize> = stops.iter().copied().collect();
        prop_assert_eq!(unique.len(), count);
    }

    #[test]
    fn reported_distance_matches_matrix(count in 2_usize..20, seed in any::<u64>()) {
        let matrix = DistanceMatrix::from_waypoints(&random_waypoints(count, seed));
        let request = SolveRequest::new(&matrix, Duration::from_secs(5));
        let solution = bounded(20).solve(&request).expect("solve should succeed");
        let expected = matrix.path_length(solution.route.stops());
        prop_assert!((solution.total_distance_km - expected).abs() < 1e-9);
    }

    #[test]
    fn guided_search_is_bounded_by_exact(count in 4_usize..10, seed in any::<u64>()) {
        let matrix = DistanceMatrix::from_waypoints(&random_waypoints(count, seed));
        let request = SolveRequest::new(&matrix, Duration::from_secs(5));
        let exact = GlsSolver::new().solve(&request).expect("exact solve");
        let guided = guided_only(20).solve(&request).expect("guided solve");
        prop_assert!(guided.total_distance_km >= exact.total_distance_km - 1e-6);
    }
}
