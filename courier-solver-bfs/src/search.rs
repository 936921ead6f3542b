//! Breadth-first search over `(node, collected packages)` states.
//!
//! One search runs per start node. Every road costs one, so a FIFO queue
//! yields states in non-decreasing cost order and a state's first recorded
//! cost is already its minimum. States are only re-queued on a strict
//! improvement.

use std::collections::VecDeque;

use courier_core::{DistanceMatrix, PackageMask, RoadNetwork, Walk};

use crate::CoverageMap;

const UNSEEN: u32 = u32::MAX;

/// Result of searching from one start node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StartOutcome {
    pub(crate) start: usize,
    /// Cheapest closed walk from `start`, if any collects every package.
    pub(crate) roads: Option<u32>,
    pub(crate) states_expanded: u64,
}

/// Full-coverage state with the cheapest outbound cost plus return leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Closure {
    roads: u32,
    node: usize,
    mask: PackageMask,
}

#[derive(Debug)]
struct Exploration {
    best: Option<Closure>,
    states_expanded: u64,
    parents: Vec<Option<(usize, PackageMask)>>,
}

/// Shared, read-only inputs for per-start searches.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StateSearch<'a> {
    network: &'a RoadNetwork,
    distances: &'a DistanceMatrix,
    coverage: &'a CoverageMap,
    full: PackageMask,
    width: usize,
}

impl<'a> StateSearch<'a> {
    pub(crate) const fn new(
        network: &'a RoadNetwork,
        distances: &'a DistanceMatrix,
        coverage: &'a CoverageMap,
        full: PackageMask,
    ) -> Self {
        Self {
            network,
            distances,
            coverage,
            full,
            width: full.index() + 1,
        }
    }

    /// Cheapest closed walk length starting and ending at `start`.
    pub(crate) fn from_start(&self, start: usize) -> StartOutcome {
        let exploration = self.explore(start, false);
        StartOutcome {
            start,
            roads: exploration.best.map(|closure| closure.roads),
            states_expanded: exploration.states_expanded,
        }
    }

    /// Re-run the search from `start` with parent links and rebuild the walk.
    ///
    /// The outbound part follows the search tree; the return leg is any
    /// shortest path back to `start`.
    pub(crate) fn walk_from(&self, start: usize) -> Option<Walk> {
        let exploration = self.explore(start, true);
        let closure = exploration.best?;

        let mut nodes = vec![closure.node];
        let mut cursor = (closure.node, closure.mask);
        while let Some(previous) = exploration
            .parents
            .get(self.encode(cursor.0, cursor.1))
            .copied()
            .flatten()
        {
            nodes.push(previous.0);
            cursor = previous;
        }
        nodes.reverse();

        let back = self.network.shortest_path(closure.node, start)?;
        nodes.extend(back.into_iter().skip(1));
        Some(Walk::new(nodes))
    }

    const fn encode(&self, node: usize, mask: PackageMask) -> usize {
        node * self.width + mask.index()
    }

    fn explore(&self, start: usize, track_parents: bool) -> Exploration {
        let states = self.network.node_count().saturating_mul(self.width);
        let mut cost = vec![UNSEEN; states];
        let mut parents = if track_parents {
            vec![None; states]
        } else {
            Vec::new()
        };

        let mut queue = VecDeque::new();
        let seed = self.coverage.at(start);
        if let Some(slot) = cost.get_mut(self.encode(start, seed)) {
            *slot = 0;
            queue.push_back((start, seed));
        }

        let mut best: Option<Closure> = None;
        let mut states_expanded = 0_u64;
        while let Some((node, mask)) = queue.pop_front() {
            let roads = cost
                .get(self.encode(node, mask))
                .copied()
                .unwrap_or(UNSEEN);
            // Every later state costs at least `roads`.
            if best.is_some_and(|closure| roads >= closure.roads) {
                break;
            }
            states_expanded += 1;

            if mask == self.full
                && let Some(back) = self.distances.get(node, start)
            {
                let total = roads.saturating_add(back);
                if best.is_none_or(|closure| total < closure.roads) {
                    best = Some(Closure {
                        roads: total,
                        node,
                        mask,
                    });
                }
            }

            let next_roads = roads.saturating_add(1);
            for &neighbour in self.network.neighbours(node) {
                let next_mask = mask | self.coverage.at(neighbour);
                let state = self.encode(neighbour, next_mask);
                if let Some(slot) = cost.get_mut(state)
                    && next_roads < *slot
                {
                    *slot = next_roads;
                    if let Some(parent) = parents.get_mut(state) {
                        *parent = Some((node, mask));
                    }
                    queue.push_back((neighbour, next_mask));
                }
            }
        }

        Exploration {
            best,
            states_expanded,
            parents,
        }
    }
}
