//! Undirected, unweighted road networks.
//!
//! Nodes are dense indices `0..node_count`. Every road is stored in both
//! directions, so adjacency is symmetric by construction. Parallel roads are
//! kept as given.

use std::collections::VecDeque;

use thiserror::Error;

/// Errors returned by [`RoadNetwork::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoadNetworkError {
    /// A road referenced a node outside `0..node_count`.
    #[error("road {road} references node {node}, but the network has {node_count} nodes")]
    EndpointOutOfRange {
        /// Position of the offending road in the input list.
        road: usize,
        /// The out-of-range endpoint.
        node: usize,
        /// Number of nodes in the network.
        node_count: usize,
    },
}

/// Adjacency representation of a road network.
///
/// # Examples
/// ```
/// use courier_core::RoadNetwork;
///
/// let network = RoadNetwork::new(3, &[(0, 1), (1, 2)])?;
/// assert_eq!(network.neighbours(1), &[0, 2]);
/// assert_eq!(network.road_count(), 2);
/// # Ok::<(), courier_core::RoadNetworkError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoadNetwork {
    adjacency: Vec<Vec<usize>>,
    road_count: usize,
}

impl RoadNetwork {
    /// Validate `roads` against `node_count` and build the adjacency lists.
    ///
    /// # Errors
    ///
    /// Returns [`RoadNetworkError::EndpointOutOfRange`] for the first road
    /// with an endpoint outside `0..node_count`.
    pub fn new(node_count: usize, roads: &[(usize, usize)]) -> Result<Self, RoadNetworkError> {
        let mut adjacency = vec![Vec::new(); node_count];
        for (road, &(from, to)) in roads.iter().enumerate() {
            for node in [from, to] {
                if node >= node_count {
                    return Err(RoadNetworkError::EndpointOutOfRange {
                        road,
                        node,
                        node_count,
                    });
                }
            }
            link(&mut adjacency, from, to);
            link(&mut adjacency, to, from);
        }
        Ok(Self {
            adjacency,
            road_count: roads.len(),
        })
    }

    /// Number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of roads supplied at construction, parallel roads included.
    #[must_use]
    pub const fn road_count(&self) -> usize {
        self.road_count
    }

    /// Nodes one road away from `node`; empty for unknown nodes.
    #[must_use]
    pub fn neighbours(&self, node: usize) -> &[usize] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Hop counts from `source` to every node, `None` where unreachable.
    ///
    /// Breadth-first: a node's distance is fixed the first time it is seen
    /// and it is never revisited.
    ///
    /// # Examples
    /// ```
    /// use courier_core::RoadNetwork;
    ///
    /// let network = RoadNetwork::new(4, &[(0, 1), (1, 2)])?;
    /// assert_eq!(network.distances_from(0), vec![Some(0), Some(1), Some(2), None]);
    /// # Ok::<(), courier_core::RoadNetworkError>(())
    /// ```
    #[must_use]
    pub fn distances_from(&self, source: usize) -> Vec<Option<u32>> {
        let mut distances = vec![None; self.node_count()];
        let Some(origin) = distances.get_mut(source) else {
            return distances;
        };
        *origin = Some(0);

        let mut queue = VecDeque::from([source]);
        while let Some(node) = queue.pop_front() {
            let next = distances
                .get(node)
                .copied()
                .flatten()
                .map_or(0, |hops| hops.saturating_add(1));
            for &neighbour in self.neighbours(node) {
                if let Some(slot) = distances.get_mut(neighbour)
                    && slot.is_none()
                {
                    *slot = Some(next);
                    queue.push_back(neighbour);
                }
            }
        }
        distances
    }

    /// A shortest node sequence from `from` to `to`, both included.
    ///
    /// Returns `None` if either node is unknown or `to` is unreachable.
    ///
    /// # Examples
    /// ```
    /// use courier_core::RoadNetwork;
    ///
    /// let network = RoadNetwork::new(4, &[(0, 1), (1, 2), (2, 3)])?;
    /// assert_eq!(network.shortest_path(3, 1), Some(vec![3, 2, 1]));
    /// assert_eq!(network.shortest_path(2, 2), Some(vec![2]));
    /// # Ok::<(), courier_core::RoadNetworkError>(())
    /// ```
    #[must_use]
    pub fn shortest_path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        if from >= self.node_count() || to >= self.node_count() {
            return None;
        }
        let mut parents: Vec<Option<usize>> = vec![None; self.node_count()];
        let mut seen = vec![false; self.node_count()];
        if let Some(origin) = seen.get_mut(from) {
            *origin = true;
        }

        let mut queue = VecDeque::from([from]);
        while let Some(node) = queue.pop_front() {
            if node == to {
                break;
            }
            for &neighbour in self.neighbours(node) {
                if let Some(flag) = seen.get_mut(neighbour)
                    && !*flag
                {
                    *flag = true;
                    if let Some(parent) = parents.get_mut(neighbour) {
                        *parent = Some(node);
                    }
                    queue.push_back(neighbour);
                }
            }
        }

        if !seen.get(to).copied().unwrap_or(false) {
            return None;
        }
        let mut path = vec![to];
        let mut current = to;
        while let Some(previous) = parents.get(current).copied().flatten() {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

fn link(adjacency: &mut [Vec<usize>], from: usize, to: usize) {
    if let Some(neighbours) = adjacency.get_mut(from) {
        neighbours.push(to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn roads_are_stored_in_both_directions() {
        let network = RoadNetwork::new(3, &[(0, 2)]).expect("valid network");
        assert_eq!(network.neighbours(0), &[2]);
        assert_eq!(network.neighbours(2), &[0]);
        assert!(network.neighbours(1).is_empty());
    }

    #[rstest]
    fn parallel_roads_are_kept() {
        let network = RoadNetwork::new(2, &[(0, 1), (1, 0)]).expect("valid network");
        assert_eq!(network.neighbours(0), &[1, 1]);
        assert_eq!(network.road_count(), 2);
    }

    #[rstest]
    #[case::from_endpoint(&[(3, 0)], 0, 3)]
    #[case::to_endpoint(&[(0, 1), (1, 7)], 1, 7)]
    fn out_of_range_endpoint_is_rejected(
        #[case] roads: &[(usize, usize)],
        #[case] road: usize,
        #[case] node: usize,
    ) {
        let err = RoadNetwork::new(3, roads).expect_err("endpoint should be rejected");
        assert_eq!(
            err,
            RoadNetworkError::EndpointOutOfRange {
                road,
                node,
                node_count: 3,
            }
        );
    }

    #[rstest]
    fn unknown_node_has_no_neighbours() {
        let network = RoadNetwork::new(1, &[]).expect("valid network");
        assert!(network.neighbours(5).is_empty());
    }

    #[rstest]
    fn distances_follow_bfs_layers() {
        let network =
            RoadNetwork::new(5, &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]).expect("valid network");
        assert_eq!(
            network.distances_from(0),
            vec![Some(0), Some(1), Some(1), Some(2), Some(3)]
        );
    }

    #[rstest]
    fn distances_from_unknown_source_are_all_unreachable() {
        let network = RoadNetwork::new(2, &[(0, 1)]).expect("valid network");
        assert_eq!(network.distances_from(9), vec![None, None]);
    }

    #[rstest]
    fn self_loop_does_not_disturb_distances() {
        let network = RoadNetwork::new(2, &[(0, 0), (0, 1)]).expect("valid network");
        assert_eq!(network.distances_from(0), vec![Some(0), Some(1)]);
    }

    #[rstest]
    fn shortest_path_is_none_across_components() {
        let network = RoadNetwork::new(4, &[(0, 1), (2, 3)]).expect("valid network");
        assert_eq!(network.shortest_path(0, 3), None);
        assert_eq!(network.shortest_path(0, 10), None);
    }

    #[rstest]
    fn shortest_path_length_matches_distance() {
        let network =
            RoadNetwork::new(6, &[(0, 1), (1, 2), (2, 3), (0, 4), (4, 5), (5, 3)]).expect("valid");
        let path = network.shortest_path(0, 3).expect("reachable");
        let hops = network.distances_from(0)[3].expect("reachable");
        assert_eq!(path.len() - 1, hops as usize);
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&3));
    }
}
