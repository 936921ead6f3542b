//! Packages already collected by standing at each node.

use courier_core::{DistanceMatrix, PackageMask, PackageSet};

/// Per-node masks of packages within the coverage radius.
///
/// Bit `p` of `at(u)` is set when package `p` lies at most `radius` hops from
/// `u`. Read-only once built.
///
/// # Examples
/// ```
/// use courier_core::{DistanceMatrix, PackageMask, PackageSet, RoadNetwork};
/// use courier_solver_bfs::CoverageMap;
///
/// let network = RoadNetwork::new(4, &[(0, 1), (1, 2), (2, 3)])?;
/// let packages = PackageSet::from_flags(&[1, 0, 0, 1])?;
/// let coverage = CoverageMap::build(&DistanceMatrix::all_pairs(&network), &packages, 2);
/// assert_eq!(coverage.at(0), PackageMask::single(0));
/// assert_eq!(coverage.at(2), PackageMask::full(2));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoverageMap {
    masks: Vec<PackageMask>,
}

impl CoverageMap {
    /// Compute the mask of every node in `distances`.
    #[must_use]
    pub fn build(distances: &DistanceMatrix, packages: &PackageSet, radius: u32) -> Self {
        let masks = (0..distances.node_count())
            .map(|node| {
                packages
                    .iter()
                    .filter(|&(_, location)| distances.within(node, location, radius))
                    .fold(PackageMask::EMPTY, |mask, (index, _)| mask.with(index))
            })
            .collect();
        Self { masks }
    }

    /// Packages covered from `node`; empty for unknown nodes.
    #[must_use]
    pub fn at(&self, node: usize) -> PackageMask {
        self.masks.get(node).copied().unwrap_or_default()
    }

    /// Number of nodes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.masks.len()
    }

    /// Whether the map covers no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}
