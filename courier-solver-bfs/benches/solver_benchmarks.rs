//! Criterion benchmarks for the BFS solver.
//!
//! Measures solve time across network sizes (50, 100, 200 nodes) and package
//! counts, in parallel and sequential modes, to track performance and detect
//! regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package courier-solver-bfs
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use courier_core::Solver;
use courier_solver_bfs::{BfsSolver, BfsSolverConfig};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

mod bench_support;

use bench_support::{BENCHMARK_SEED, generate_request};

/// Network sizes to benchmark.
const NETWORK_SIZES: &[usize] = &[50, 100, 200];

/// Package counts to benchmark at each size.
const PACKAGE_COUNTS: &[usize] = &[4, 8];

/// Benchmark solve times for each size, package count and execution mode.
fn bench_solve_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_time");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    for &size in NETWORK_SIZES {
        for &packages in PACKAGE_COUNTS {
            let request = generate_request(size, packages, BENCHMARK_SEED);

            #[expect(
                clippy::as_conversions,
                reason = "Safe conversion for small problem sizes"
            )]
            let throughput_size = size as u64;
            group.throughput(Throughput::Elements(throughput_size));

            for parallel in [true, false] {
                let solver = BfsSolver::with_config(BfsSolverConfig {
                    parallel,
                    ..BfsSolverConfig::default()
                });
                let mode = if parallel { "parallel" } else { "sequential" };
                group.bench_with_input(
                    BenchmarkId::new(format!("{mode}/packages_{packages}"), size),
                    &size,
                    |b, _| {
                        b.iter(|| {
                            #[expect(
                                clippy::let_underscore_must_use,
                                reason = "Benchmarking solve performance, result is intentionally discarded"
                            )]
                            let _ = solver.solve(&request);
                        });
                    },
                );
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_solve_times);
criterion_main!(benches);
