//! Held-Karp dynamic program for small instances.
//!
//! `cost[mask][j]` is the shortest path that leaves the start, visits exactly
//! the intermediates in `mask` and stops at intermediate `j`. Memory grows as
//! `2^m · m`, so callers cap `m` with [`MAX_EXACT_INTERMEDIATES`].

use meridian_core::SolveRequest;

/// Largest intermediate count the dynamic program accepts.
pub(crate) const MAX_EXACT_INTERMEDIATES: usize = 16;

/// Optimal stop order for `request`, or `None` when it has too many
/// intermediates for the dynamic program.
#[expect(
    clippy::indexing_slicing,
    reason = "table indices are bounded by the mask and intermediate counts"
)]
#[expect(
    clippy::float_arithmetic,
    reason = "path costs are sums of floating-point distances"
)]
pub(crate) fn held_karp(request: &SolveRequest<'_>) -> Option<Vec<usize>> {
    let matrix = request.matrix;
    let stops = request.intermediates();
    let m = stops.len();
    if m > MAX_EXACT_INTERMEDIATES {
        return None;
    }
    if m == 0 {
        return Some(vec![request.start, request.end]);
    }

    let states = 1_usize << m;
    let mut cost = vec![f64::INFINITY; states * m];
    let mut parent = vec![usize::MAX; states * m];
    for (j, &stop) in stops.iter().enumerate() {
        cost[(1 << j) * m + j] = matrix.get(request.start, stop);
    }

    for mask in 1..states {
        for j in 0..m {
            if mask & (1 << j) == 0 {
                continue;
            }
            let here = cost[mask * m + j];
            if !here.is_finite() {
                continue;
            }
            for (k, &next) in stops.iter().enumerate() {
                if mask & (1 << k) != 0 {
                    continue;
                }
                let extended = mask | (1 << k);
                let candidate = here + matrix.get(stops[j], next);
                if candidate < cost[extended * m + k] {
                    cost[extended * m + k] = candidate;
                    parent[extended * m + k] = j;
                }
            }
        }
    }

    let full = states - 1;
    let (mut last, _) = (0..m)
        .map(|j| (j, cost[full * m + j] + matrix.get(stops[j], request.end)))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))?;

    let mut reversed = Vec::with_capacity(m);
    let mut mask = full;
    loop {
        reversed.push(stops[last]);
        let previous = parent[mask * m + last];
        mask &= !(1 << last);
        if previous == usize::MAX {
            break;
        }
        last = previous;
    }

    let mut order = Vec::with_capacity(m + 2);
    order.push(request.start);
    order.extend(reversed.into_iter().rev());
    order.push(request.end);
    Some(order)
}
