//! Closed walks through a road network.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered node sequence where consecutive nodes share a road.
///
/// Solvers return a closed walk: it starts and ends at the same node, and
/// its road count equals the reported minimum.
///
/// # Examples
/// ```
/// use courier_core::Walk;
///
/// let walk = Walk::new(vec![2, 1, 2]);
/// assert_eq!(walk.start(), Some(2));
/// assert_eq!(walk.roads(), 2);
/// assert!(walk.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Walk {
    nodes: Vec<usize>,
}

impl Walk {
    /// Construct a walk from its nodes in travel order.
    #[must_use]
    pub const fn new(nodes: Vec<usize>) -> Self {
        Self { nodes }
    }

    /// A walk that goes nowhere.
    ///
    /// # Examples
    /// ```
    /// use courier_core::Walk;
    ///
    /// let walk = Walk::empty();
    /// assert!(walk.nodes().is_empty());
    /// assert_eq!(walk.roads(), 0);
    /// ```
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Visited nodes in order.
    #[must_use]
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// First node, if any.
    #[must_use]
    pub fn start(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    /// Number of roads travelled.
    #[must_use]
    pub fn roads(&self) -> u32 {
        u32::try_from(self.nodes.len().saturating_sub(1)).unwrap_or(u32::MAX)
    }

    /// Whether the walk ends where it started.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.nodes.first() == self.nodes.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_node_walk_travels_no_roads() {
        let walk = Walk::new(vec![4]);
        assert_eq!(walk.roads(), 0);
        assert!(walk.is_closed());
    }

    #[test]
    fn open_walk_is_not_closed() {
        let walk = Walk::new(vec![0, 1, 2]);
        assert!(!walk.is_closed());
        assert_eq!(walk.roads(), 2);
    }
}
