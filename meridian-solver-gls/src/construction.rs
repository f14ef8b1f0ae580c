//! Path-cheapest-arc construction.

use meridian_core::{DistanceMatrix, SolveRequest};

/// Greedily extend a path from the start, always taking the cheapest arc to
/// an unvisited intermediate stop, then close it at the end.
///
/// The result visits every waypoint once and keeps both endpoints in place.
pub(crate) fn path_cheapest_arc(request: &SolveRequest<'_>) -> Vec<usize> {
    let matrix: &DistanceMatrix = request.matrix;
    let mut remaining = request.intermediates();
    let mut order = Vec::with_capacity(request.size());
    order.push(request.start);

    let mut current = request.start;
    while let Some(position) = nearest(matrix, current, &remaining) {
        let next = remaining.swap_remove(position);
        order.push(next);
        current = next;
    }

    order.push(request.end);
    order
}

/// Position in `candidates` of the stop closest to `from`.
///
/// Ties go to the lowest waypoint index so construction is deterministic.
fn nearest(matrix: &DistanceMatrix, from: usize, candidates: &[usize]) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            matrix
                .get(from, **a)
                .total_cmp(&matrix.get(from, **b))
                .then_with(|| a.cmp(b))
        })
        .map(|(position, _)| position)
}
