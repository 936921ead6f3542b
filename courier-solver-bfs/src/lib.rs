//! Exact breadth-first solver for the Courier engine.
//!
//! This crate provides [`BfsSolver`], the default implementation of the
//! [`Solver`](courier_core::Solver) trait. Standing on a node collects every
//! package within a small hop radius of it, so the solver:
//!
//! 1. computes all-pairs hop counts with one BFS per node;
//! 2. reduces each node to a [`CoverageMap`] entry, the mask of packages it
//!    collects;
//! 3. runs one BFS per start node over `(node, collected mask)` states and
//!    closes each fully-covered state with the shortest return leg.
//!
//! Start nodes are independent, so they are searched on the rayon thread pool
//! by default and folded into the cheapest answer with ties going to the
//! lowest start.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod coverage;
mod search;
mod solver;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

use courier_core::{SolveError, SolveRequest, Solver};

pub use coverage::CoverageMap;
pub use solver::{
    BfsSolver, BfsSolverConfig, DEFAULT_COVERAGE_RADIUS, DEFAULT_MAX_PACKAGES, UnreachablePolicy,
};

/// Minimum number of roads for a closed walk collecting every package.
///
/// `packages` holds one `0`/`1` flag per node and `roads` lists undirected
/// roads as node pairs. Uses [`BfsSolver`] with its default configuration.
///
/// # Errors
///
/// Returns [`SolveError`] for malformed input, too many packages, or packages
/// that no closed walk can collect.
///
/// # Examples
/// ```
/// use courier_solver_bfs::min_roads;
///
/// let roads = [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (5, 6), (5, 7)];
/// assert_eq!(min_roads(&[0, 1, 0, 1, 1, 0, 0, 1], &roads)?, 2);
/// # Ok::<(), courier_core::SolveError>(())
/// ```
pub fn min_roads(packages: &[u8], roads: &[(usize, usize)]) -> Result<u32, SolveError> {
    let request = SolveRequest::new(packages.to_vec(), roads.to_vec());
    BfsSolver::new()
        .solve(&request)
        .map(|response| response.roads)
}
