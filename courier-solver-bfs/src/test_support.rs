//! Test-only utilities for `courier-solver-bfs`.
//!
//! The helpers in this module are available to unit tests and behavioural
//! tests. They are gated behind the `test-support` feature (and `cfg(test)`).

use courier_core::{DistanceMatrix, PackageMask, SolveRequest, SolveResponse};

use crate::CoverageMap;

/// Assert that `response.walk` is a closed walk through `request`'s roads
/// whose length matches `response.roads` and that collects every package
/// within `radius` hops.
///
/// An empty walk is accepted only when the response reports zero roads.
///
/// # Panics
///
/// Panics when the request is invalid or any property fails.
///
/// # Examples
/// ```rust
/// use courier_core::{SolveRequest, Solver};
/// use courier_solver_bfs::BfsSolver;
/// use courier_solver_bfs::test_support::assert_valid_walk;
///
/// let request = SolveRequest::new(vec![1, 0, 0, 0, 1], vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
/// let response = BfsSolver::new().solve(&request)?;
/// assert_valid_walk(&request, 2, &response);
/// # Ok::<(), courier_core::SolveError>(())
/// ```
#[expect(
    clippy::expect_used,
    reason = "test helper reports invalid fixtures by panicking"
)]
pub fn assert_valid_walk(request: &SolveRequest, radius: u32, response: &SolveResponse) {
    let walk = &response.walk;
    if walk.nodes().is_empty() {
        assert_eq!(response.roads, 0, "an empty walk must report zero roads");
        return;
    }

    let network = request.network().expect("request network should be valid");
    let packages = request
        .package_set()
        .expect("request packages should be valid");

    assert_eq!(walk.roads(), response.roads, "walk length differs from roads");
    assert!(walk.is_closed(), "walk {:?} is not closed", walk.nodes());
    for pair in walk.nodes().windows(2) {
        if let [from, to] = *pair {
            assert!(
                network.neighbours(from).contains(&to),
                "no road joins {from} and {to}"
            );
        }
    }

    let coverage = CoverageMap::build(&DistanceMatrix::all_pairs(&network), &packages, radius);
    let collected = walk
        .nodes()
        .iter()
        .fold(PackageMask::EMPTY, |mask, &node| mask | coverage.at(node));
    assert_eq!(
        collected,
        packages.full_mask(),
        "walk {:?} leaves packages uncollected",
        walk.nodes()
    );
}
