//! Criterion benchmarks for the GLS solver.
//!
//! Measures a fixed number of guided search rounds across instance sizes so
//! runs are comparable regardless of machine speed.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package meridian-solver-gls
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use meridian_core::test_support::random_waypoints;
use meridian_core::{DistanceMatrix, SolveRequest, Solver};
use meridian_solver_gls::{GlsSolver, GlsSolverConfig};

/// Instance sizes, endpoints included.
const PROBLEM_SIZES: &[usize] = &[25, 50, 100];

/// Seed shared by every generated instance.
const BENCHMARK_SEED: u64 = 0x5EED;

/// Guided search rounds per solve.
const ROUNDS: u64 = 25;

fn bench_solve_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("gls_solve_time");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    let solver = GlsSolver::with_config(GlsSolverConfig {
        max_iterations: Some(ROUNDS),
        exact_threshold: 0,
        ..GlsSolverConfig::default()
    });

    for &size in PROBLEM_SIZES {
        let matrix = DistanceMatrix::from_waypoints(&random_waypoints(size, BENCHMARK_SEED));
        let request = SolveRequest::new(&matrix, Duration::from_secs(60));

        #[expect(
            clippy::as_conversions,
            reason = "Safe conversion for small problem sizes"
        )]
        let throughput_size = size as u64;
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("waypoints", size), &size, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking solve performance, result is intentionally discarded"
                )]
                let _ = solver.solve(&request);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solve_times);
criterion_main!(benches);
