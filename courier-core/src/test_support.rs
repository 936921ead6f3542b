//! Request builders shared by unit, behaviour and property tests.

use crate::SolveRequest;

/// Roads joining node `i` to `i + 1` for every node in `0..node_count`.
///
/// # Examples
/// ```
/// use courier_core::test_support::chain_roads;
///
/// assert_eq!(chain_roads(3), vec![(0, 1), (1, 2)]);
/// assert!(chain_roads(1).is_empty());
/// ```
#[must_use]
pub fn chain_roads(node_count: usize) -> Vec<(usize, usize)> {
    (1..node_count).map(|node| (node - 1, node)).collect()
}

/// Request over a straight chain carrying the given flags.
#[must_use]
pub fn chain_request(packages: &[u8]) -> SolveRequest {
    SolveRequest::new(packages.to_vec(), chain_roads(packages.len()))
}

/// Six-node chain with packages at both ends and in the middle.
///
/// Minimum walk: 2 roads.
#[must_use]
pub fn chain_scenario() -> SolveRequest {
    chain_request(&[1, 0, 0, 1, 0, 1])
}

/// Eight-node tree with packages on two branches.
///
/// Minimum walk: 2 roads.
#[must_use]
pub fn tree_scenario() -> SolveRequest {
    SolveRequest::new(
        vec![0, 1, 0, 1, 1, 0, 0, 1],
        vec![(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (5, 6), (5, 7)],
    )
}

/// Two components, each holding a package.
///
/// No closed walk can bring both packages within range.
#[must_use]
pub fn split_scenario() -> SolveRequest {
    SolveRequest::new(vec![1, 0, 0, 0, 1], vec![(0, 1), (3, 4)])
}

/// Relabel nodes so node `i` becomes `permutation[i]`.
///
/// Package flags move with their nodes and every road is rewritten. Entries
/// of `permutation` missing for a node leave that node's label unchanged.
///
/// # Examples
/// ```
/// use courier_core::SolveRequest;
/// use courier_core::test_support::relabel;
///
/// let request = SolveRequest::new(vec![1, 0, 0], vec![(0, 1)]);
/// let relabelled = relabel(&request, &[2, 0, 1]);
/// assert_eq!(relabelled.packages, vec![0, 0, 1]);
/// assert_eq!(relabelled.roads, vec![(2, 0)]);
/// ```
#[must_use]
pub fn relabel(request: &SolveRequest, permutation: &[usize]) -> SolveRequest {
    let label = |node: usize| permutation.get(node).copied().unwrap_or(node);
    let mut packages = vec![0; request.packages.len()];
    for (node, &flag) in request.packages.iter().enumerate() {
        if let Some(slot) = packages.get_mut(label(node)) {
            *slot = flag;
        }
    }
    let roads = request
        .roads
        .iter()
        .map(|&(from, to)| (label(from), label(to)))
        .collect();
    SolveRequest::new(packages, roads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenarios_are_valid_requests() {
        for request in [chain_scenario(), tree_scenario(), split_scenario()] {
            assert!(request.validate().is_ok(), "{request:?} should validate");
        }
    }

    #[test]
    fn identity_relabel_is_a_no_op() {
        let request = tree_scenario();
        let identity: Vec<usize> = (0..request.node_count()).collect();
        assert_eq!(relabel(&request, &identity), request);
    }
}
