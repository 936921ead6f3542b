//! Solve requests, responses and the [`Solver`] trait.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PackageSet, PackageSetError, RoadNetwork, RoadNetworkError, Walk};

/// Parameters for a solve request.
///
/// `packages` holds one `0`/`1` flag per node, so its length is the node
/// count. `roads` lists undirected roads as node pairs.
///
/// # Examples
/// ```rust
/// use courier_core::SolveRequest;
///
/// let request = SolveRequest::new(vec![1, 0, 1], vec![(0, 1), (1, 2)]);
/// assert!(request.validate().is_ok());
/// assert_eq!(request.node_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveRequest {
    /// Package flag per node.
    pub packages: Vec<u8>,
    /// Undirected roads between node indices.
    #[cfg_attr(feature = "serde", serde(default))]
    pub roads: Vec<(usize, usize)>,
}

/// Reasons a [`SolveRequest`] is rejected before solving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveRequestValidationError {
    /// The package flags were malformed.
    #[error(transparent)]
    Packages(#[from] PackageSetError),
    /// A road referenced a node that does not exist.
    #[error(transparent)]
    Roads(#[from] RoadNetworkError),
}

impl SolveRequest {
    /// Construct a request from package flags and roads.
    #[must_use]
    pub const fn new(packages: Vec<u8>, roads: Vec<(usize, usize)>) -> Self {
        Self { packages, roads }
    }

    /// Number of nodes described by the request.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.packages.len()
    }

    /// Check flags and road endpoints without building anything else.
    ///
    /// # Errors
    ///
    /// Returns the first [`SolveRequestValidationError`] found; package flags
    /// are checked before roads.
    pub fn validate(&self) -> Result<(), SolveRequestValidationError> {
        self.package_set()?;
        self.network()?;
        Ok(())
    }

    /// Package locations named by the flags.
    ///
    /// # Errors
    ///
    /// Returns [`SolveRequestValidationError::Packages`] for malformed flags.
    pub fn package_set(&self) -> Result<PackageSet, SolveRequestValidationError> {
        Ok(PackageSet::from_flags(&self.packages)?)
    }

    /// Road network over `node_count()` nodes.
    ///
    /// # Errors
    ///
    /// Returns [`SolveRequestValidationError::Roads`] for an out-of-range
    /// endpoint.
    pub fn network(&self) -> Result<RoadNetwork, SolveRequestValidationError> {
        Ok(RoadNetwork::new(self.node_count(), &self.roads)?)
    }
}

/// Diagnostic information about a solve.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent solving.
    pub solve_time: Duration,
    /// Number of start nodes searched.
    pub starts_evaluated: u64,
    /// Number of `(node, packages)` states taken off search queues.
    pub states_expanded: u64,
    /// Number of packages in the request.
    pub package_count: usize,
}

/// Response from a successful solve.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveResponse {
    /// Minimum number of roads travelled, return leg included.
    pub roads: u32,
    /// A closed walk achieving `roads`.
    pub walk: Walk,
    /// Diagnostics about the solve.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Request parameters were invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] SolveRequestValidationError),
    /// The request holds more packages than the solver is configured for.
    #[error("{count} packages exceed the solver limit of {limit}")]
    TooManyPackages {
        /// Packages in the request.
        count: usize,
        /// Configured limit.
        limit: usize,
    },
    /// No closed walk from any start brings every package within range.
    #[error("no walk brings all {packages} packages within range")]
    CoverageUnreachable {
        /// Packages in the request.
        packages: usize,
    },
}

/// Find the cheapest closed walk collecting every package.
///
/// Implementations should return [`SolveError::InvalidRequest`] for invalid
/// parameters rather than panicking.
/// Solvers must be `Send + Sync` to operate safely across threads.
pub trait Solver: Send + Sync {
    /// Solve a request, producing a walk or an error.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] when the request is invalid or cannot be
    /// satisfied.
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError>;
}
