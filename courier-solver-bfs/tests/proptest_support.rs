//! Proptest strategies for BFS solver property-based tests.
//!
//! Generated requests stay small: search state grows with
//! `nodes * 2^packages`, and every property solves at least once.

use courier_core::SolveRequest;
use proptest::prelude::*;
use proptest::sample::Index;

/// Connected networks are built on a random spanning tree.
#[derive(Debug, Clone)]
pub struct NetworkShape {
    /// Parent choice for nodes `1..n`; node `i` joins a node below `i`.
    pub parents: Vec<Index>,
    /// Additional roads, possibly parallel or looping.
    pub extra_roads: Vec<(Index, Index)>,
    /// Package flag per node.
    pub flags: Vec<bool>,
}

impl NetworkShape {
    /// Materialise the shape as a request, keeping at most `max_packages`
    /// packages.
    pub fn into_request(self, max_packages: usize) -> SolveRequest {
        let node_count = self.flags.len();
        let mut roads: Vec<(usize, usize)> = self
            .parents
            .iter()
            .enumerate()
            .map(|(offset, parent)| {
                let child = offset + 1;
                (parent.index(child), child)
            })
            .collect();
        roads.extend(
            self.extra_roads
                .iter()
                .map(|(from, to)| (from.index(node_count), to.index(node_count))),
        );

        let mut remaining = max_packages;
        let packages = self
            .flags
            .iter()
            .map(|&flag| {
                if flag && remaining > 0 {
                    remaining -= 1;
                    1
                } else {
                    0
                }
            })
            .collect();
        SolveRequest::new(packages, roads)
    }
}

/// Strategy for connected requests with `1..=max_nodes` nodes and at most
/// `max_packages` packages.
pub fn connected_request_strategy(
    max_nodes: usize,
    max_packages: usize,
) -> impl Strategy<Value = SolveRequest> {
    (1..=max_nodes)
        .prop_flat_map(|node_count| {
            (
                proptest::collection::vec(any::<Index>(), node_count - 1),
                proptest::collection::vec((any::<Index>(), any::<Index>()), 0..=node_count),
                proptest::collection::vec(proptest::bool::weighted(0.35), node_count),
            )
        })
        .prop_map(move |(parents, extra_roads, flags)| {
            NetworkShape {
                parents,
                extra_roads,
                flags,
            }
            .into_request(max_packages)
        })
}

/// Strategy for a request together with a relabelling of its nodes.
pub fn relabelled_request_strategy(
    max_nodes: usize,
    max_packages: usize,
) -> impl Strategy<Value = (SolveRequest, Vec<usize>)> {
    connected_request_strategy(max_nodes, max_packages).prop_flat_map(|request| {
        let identity: Vec<usize> = (0..request.node_count()).collect();
        (Just(request), Just(identity).prop_shuffle())
    })
}
