//! All-pairs hop counts over a [`RoadNetwork`].

use crate::RoadNetwork;

const UNREACHABLE: u32 = u32::MAX;

/// Square matrix of shortest hop counts, stored row-major.
///
/// Built once per solve and read-only afterwards. `get(i, j) == get(j, i)`
/// and `get(i, i) == Some(0)` for every node.
///
/// # Examples
/// ```
/// use courier_core::{DistanceMatrix, RoadNetwork};
///
/// let network = RoadNetwork::new(4, &[(0, 1), (1, 2)])?;
/// let matrix = DistanceMatrix::all_pairs(&network);
/// assert_eq!(matrix.get(0, 2), Some(2));
/// assert_eq!(matrix.get(3, 0), None);
/// assert!(matrix.within(2, 1, 2));
/// # Ok::<(), courier_core::RoadNetworkError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DistanceMatrix {
    node_count: usize,
    cells: Vec<u32>,
}

impl DistanceMatrix {
    /// Run one breadth-first search per node, `O(n * (n + roads))`.
    #[must_use]
    pub fn all_pairs(network: &RoadNetwork) -> Self {
        let node_count = network.node_count();
        let mut cells = Vec::with_capacity(node_count.saturating_mul(node_count));
        for source in 0..node_count {
            cells.extend(
                network
                    .distances_from(source)
                    .into_iter()
                    .map(|hops| hops.unwrap_or(UNREACHABLE)),
            );
        }
        log::debug!("built {node_count}x{node_count} distance matrix");
        Self { node_count, cells }
    }

    /// Number of rows (and columns).
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Hops between `from` and `to`, or `None` if unreachable or unknown.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<u32> {
        if from >= self.node_count || to >= self.node_count {
            return None;
        }
        self.cells
            .get(from * self.node_count + to)
            .copied()
            .filter(|&hops| hops != UNREACHABLE)
    }

    /// Whether `to` is reachable from `from` in at most `radius` hops.
    #[must_use]
    pub fn within(&self, from: usize, to: usize, radius: u32) -> bool {
        self.get(from, to).is_some_and(|hops| hops <= radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn two_components() -> RoadNetwork {
        RoadNetwork::new(5, &[(0, 1), (1, 2), (3, 4)]).expect("valid network")
    }

    #[rstest]
    fn matrix_is_symmetric_with_zero_diagonal(two_components: RoadNetwork) {
        let matrix = DistanceMatrix::all_pairs(&two_components);
        for i in 0..5 {
            assert_eq!(matrix.get(i, i), Some(0));
            for j in 0..5 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    #[rstest]
    fn components_are_unreachable(two_components: RoadNetwork) {
        let matrix = DistanceMatrix::all_pairs(&two_components);
        assert_eq!(matrix.get(0, 4), None);
        assert_eq!(matrix.get(3, 4), Some(1));
        assert!(!matrix.within(0, 3, u32::MAX - 1));
    }

    #[rstest]
    fn unknown_nodes_are_unreachable(two_components: RoadNetwork) {
        let matrix = DistanceMatrix::all_pairs(&two_components);
        assert_eq!(matrix.get(0, 5), None);
        assert_eq!(matrix.get(7, 0), None);
    }

    #[rstest]
    #[case(0, 2, 2, true)]
    #[case(0, 2, 1, false)]
    #[case(1, 1, 0, true)]
    fn within_respects_radius(
        two_components: RoadNetwork,
        #[case] from: usize,
        #[case] to: usize,
        #[case] radius: u32,
        #[case] expected: bool,
    ) {
        let matrix = DistanceMatrix::all_pairs(&two_components);
        assert_eq!(matrix.within(from, to, radius), expected);
    }

    #[rstest]
    fn empty_network_has_empty_matrix() {
        let matrix = DistanceMatrix::all_pairs(&RoadNetwork::default());
        assert_eq!(matrix.node_count(), 0);
        assert_eq!(matrix.get(0, 0), None);
    }
}
