//! Benchmark support utilities for the BFS solver.
//!
//! Provides deterministic road networks for reproducible benchmarks: a random
//! spanning tree thickened with extra roads, with packages spread over it.

use courier_core::SolveRequest;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Extra roads added per node on top of the spanning tree.
const EXTRA_ROADS_PER_NODE: usize = 1;

/// Generate a connected network of `node_count` nodes holding
/// `package_count` packages.
///
/// Node `i` joins a random earlier node, then roughly one extra road per node
/// closes cycles. Packages land on distinct random nodes.
#[must_use]
pub fn generate_request(node_count: usize, package_count: usize, seed: u64) -> SolveRequest {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut roads: Vec<(usize, usize)> = (1..node_count)
        .map(|node| (rng.gen_range(0..node), node))
        .collect();
    if node_count > 1 {
        for _ in 0..node_count * EXTRA_ROADS_PER_NODE {
            let from = rng.gen_range(0..node_count);
            let to = rng.gen_range(0..node_count);
            if from != to {
                roads.push((from, to));
            }
        }
    }

    let mut packages = vec![0_u8; node_count];
    let mut placed = 0;
    while placed < package_count.min(node_count) {
        let node = rng.gen_range(0..node_count);
        if let Some(flag) = packages.get_mut(node)
            && *flag == 0
        {
            *flag = 1;
            placed += 1;
        }
    }

    SolveRequest::new(packages, roads)
}
