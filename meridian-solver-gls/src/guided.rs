//! Guided local search over the path-cheapest-arc start.

use std::time::Instant;

use meridian_core::{DistanceMatrix, SolveRequest};

use crate::construction::path_cheapest_arc;
use crate::local_search::{Descent, descend};
use crate::penalties::Penalties;

/// Limits and tuning for one guided search run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GuidedSearch {
    pub(crate) lambda_coefficient: f64,
    pub(crate) max_iterations: Option<u64>,
    pub(crate) deadline: Instant,
}

/// Best path found and the number of local optima visited.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchOutcome {
    pub(crate) order: Vec<usize>,
    pub(crate) distance: f64,
    pub(crate) iterations: u64,
}

/// `λ = coefficient · cost / edges`, scaling penalties to an average edge.
#[expect(
    clippy::float_arithmetic,
    reason = "lambda is a scaled average edge length"
)]
fn penalty_weight(coefficient: f64, cost: f64, stops: usize) -> f64 {
    let edges = u32::try_from(stops.saturating_sub(1).max(1)).unwrap_or(u32::MAX);
    coefficient * cost / f64::from(edges)
}

impl GuidedSearch {
    /// Run the search for `request`, always returning a complete path.
    #[expect(
        clippy::float_arithmetic,
        reason = "augmented arc costs add weighted penalties to distances"
    )]
    pub(crate) fn run(&self, request: &SolveRequest<'_>) -> SearchOutcome {
        let matrix: &DistanceMatrix = request.matrix;
        let distance = |a: usize, b: usize| matrix.get(a, b);

        let mut current = path_cheapest_arc(request);
        log::debug!(
            "path cheapest arc start has length {:.1} km",
            matrix.path_length(&current)
        );
        let first = descend(&mut current, &distance, self.deadline);
        let mut best = SearchOutcome {
            distance: matrix.path_length(&current),
            order: current.clone(),
            iterations: 1,
        };
        if first == Descent::Interrupted {
            log::debug!("time budget expired during the first descent");
            return best;
        }

        let lambda = penalty_weight(self.lambda_coefficient, best.distance, current.len());
        let mut penalties = Penalties::new(request.size());
        let mut rounds: u64 = 0;

        while !self.exhausted(rounds) && best.distance > 0.0 {
            penalties.penalise_max_utility(&current, matrix);
            let augmented =
                |a: usize, b: usize| matrix.get(a, b) + lambda * f64::from(penalties.get(a, b));
            let outcome = descend(&mut current, &augmented, self.deadline);
            rounds += 1;
            best.iterations += 1;

            let candidate = matrix.path_length(&current);
            if candidate < best.distance {
                log::debug!(
                    "guided search round {rounds} improved the best path to {candidate:.1} km"
                );
                best.distance = candidate;
                best.order.clone_from(&current);
            }
            if outcome == Descent::Interrupted {
                break;
            }
        }
        best
    }

    fn exhausted(&self, rounds: u64) -> bool {
        self.max_iterations.is_some_and(|limit| rounds >= limit) || Instant::now() >= self.deadline
    }
}
