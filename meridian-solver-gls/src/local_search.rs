//! First-improvement 2-opt and or-opt descent over an open path.
//!
//! Both neighbourhoods only rearrange interior positions, so the first and
//! last stops never move. Move deltas assume a symmetric arc cost.

use std::time::Instant;

/// Longest segment relocated by or-opt.
const MAX_SEGMENT: usize = 3;

/// Improvements smaller than this are treated as noise to avoid cycling.
const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// How a descent ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Descent {
    /// No 2-opt or or-opt move improves the path.
    LocalOptimum,
    /// The deadline passed before a local optimum was reached.
    Interrupted,
}

/// Apply improving moves to `order` until none remain or `deadline` passes.
pub(crate) fn descend<C>(order: &mut Vec<usize>, arc: &C, deadline: Instant) -> Descent
where
    C: Fn(usize, usize) -> f64,
{
    loop {
        if Instant::now() >= deadline {
            return Descent::Interrupted;
        }
        if two_opt_pass(order, arc) || or_opt_pass(order, arc) {
            continue;
        }
        return Descent::LocalOptimum;
    }
}

/// Reverse the first interior segment whose reversal shortens the path.
#[expect(
    clippy::indexing_slicing,
    reason = "positions are bounded by the loop ranges over `order`"
)]
#[expect(
    clippy::float_arithmetic,
    reason = "move deltas are differences of arc costs"
)]
fn two_opt_pass<C>(order: &mut [usize], arc: &C) -> bool
where
    C: Fn(usize, usize) -> f64,
{
    let len = order.len();
    if len < 4 {
        return false;
    }
    // Edges (i, i+1) and (j, j+1) become (i, j) and (i+1, j+1).
    for i in 0..len - 3 {
        for j in (i + 2)..(len - 1) {
            let (a, b) = (order[i], order[i + 1]);
            let (c, d) = (order[j], order[j + 1]);
            let delta = arc(a, c) + arc(b, d) - arc(a, b) - arc(c, d);
            if delta < -IMPROVEMENT_EPSILON {
                order[i + 1..=j].reverse();
                return true;
            }
        }
    }
    false
}

/// Relocate the first interior segment of up to [`MAX_SEGMENT`] stops whose
/// move, optionally reversed, shortens the path.
#[expect(
    clippy::indexing_slicing,
    reason = "positions are bounded by the loop ranges over `order`"
)]
#[expect(
    clippy::float_arithmetic,
    reason = "move deltas are differences of arc costs"
)]
fn or_opt_pass<C>(order: &mut Vec<usize>, arc: &C) -> bool
where
    C: Fn(usize, usize) -> f64,
{
    let len = order.len();
    for segment_len in 1..=MAX_SEGMENT {
        // Segment occupies [start, start + segment_len) and must stay interior.
        if len < segment_len + 3 {
            break;
        }
        for start in 1..(len - segment_len) {
            let end = start + segment_len - 1;
            let (prev, first, last, next) =
                (order[start - 1], order[start], order[end], order[end + 1]);
            let removal_gain = arc(prev, first) + arc(last, next) - arc(prev, next);

            // Insert between `order[p]` and `order[p + 1]`, skipping edges that
            // touch the segment itself.
            for p in 0..(len - 1) {
                if p + 1 >= start && p <= end {
                    continue;
                }
                let (u, v) = (order[p], order[p + 1]);
                let forward = arc(u, first) + arc(last, v) - arc(u, v);
                let backward = arc(u, last) + arc(first, v) - arc(u, v);
                let reversed = backward < forward;
                let insertion = forward.min(backward);
                if insertion - removal_gain < -IMPROVEMENT_EPSILON {
                    relocate(order, start, segment_len, p, reversed);
                    return true;
                }
            }
        }
    }
    false
}

/// Move `order[start..start + len]` to sit after the stop currently at `after`.
fn relocate(order: &mut Vec<usize>, start: usize, len: usize, after: usize, reversed: bool) {
    let mut segment: Vec<usize> = order.drain(start..start + len).collect();
    if reversed {
        segment.reverse();
    }
    let at = if after < start { after + 1 } else { after + 1 - len };
    order.splice(at..at, segment);
}
