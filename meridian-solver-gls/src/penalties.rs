//! Edge penalties for guided local search.

use meridian_core::DistanceMatrix;

/// Penalty counters for undirected edges.
#[derive(Debug, Clone)]
pub(crate) struct Penalties {
    counts: Vec<u32>,
    size: usize,
}

impl Penalties {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            counts: vec![0; size * size],
            size,
        }
    }

    const fn slot(&self, a: usize, b: usize) -> usize {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        low * self.size + high
    }

    /// Times the edge between `a` and `b` has been penalised.
    pub(crate) fn get(&self, a: usize, b: usize) -> u32 {
        self.counts.get(self.slot(a, b)).copied().unwrap_or_default()
    }

    fn increment(&mut self, a: usize, b: usize) {
        let slot = self.slot(a, b);
        if let Some(count) = self.counts.get_mut(slot) {
            *count = count.saturating_add(1);
        }
    }

    /// Penalise every edge of `order` whose utility `d / (1 + p)` is maximal.
    ///
    /// Returns the number of edges penalised.
    #[expect(
        clippy::float_arithmetic,
        reason = "edge utility is a ratio of floating-point distances"
    )]
    pub(crate) fn penalise_max_utility(&mut self, order: &[usize], matrix: &DistanceMatrix) -> usize {
        let utilities: Vec<((usize, usize), f64)> = order
            .windows(2)
            .filter_map(|pair| match *pair {
                [a, b] => Some(((a, b), matrix.get(a, b) / (1.0 + f64::from(self.get(a, b))))),
                _ => None,
            })
            .collect();
        let Some(max) = utilities
            .iter()
            .map(|(_, utility)| *utility)
            .max_by(f64::total_cmp)
        else {
            return 0;
        };

        let mut penalised = 0;
        for ((a, b), utility) in utilities {
            if max - utility <= f64::EPSILON * max.max(1.0) {
                self.increment(a, b);
                penalised += 1;
            }
        }
        penalised
    }
}
