//! `BfsSolver`: exact multi-start search over coverage states.

use std::time::Instant;

use courier_core::{
    Diagnostics, DistanceMatrix, PackageMask, SolveError, SolveRequest, SolveResponse, Solver,
    Walk,
};
use rayon::prelude::*;

use crate::CoverageMap;
use crate::search::{StartOutcome, StateSearch};

/// Hop radius within which a package counts as collected.
pub const DEFAULT_COVERAGE_RADIUS: u32 = 2;

/// Default ceiling on packages per request.
///
/// Search state grows with `nodes * 2^packages`; this keeps memory bounded.
pub const DEFAULT_MAX_PACKAGES: usize = 20;

/// What to report when no walk can collect every package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnreachablePolicy {
    /// Fail with [`SolveError::CoverageUnreachable`].
    #[default]
    Error,
    /// Report zero roads and an empty walk.
    Zero,
}

/// Configuration for [`BfsSolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsSolverConfig {
    /// Maximum hop distance at which a node collects a package.
    pub coverage_radius: u32,
    /// Largest package count accepted. Values above
    /// [`PackageMask::CAPACITY`] are clamped to it.
    pub max_packages: usize,
    /// Search start nodes on the rayon thread pool.
    pub parallel: bool,
    /// Outcome when the packages cannot all be collected.
    pub unreachable: UnreachablePolicy,
}

impl Default for BfsSolverConfig {
    fn default() -> Self {
        Self {
            coverage_radius: DEFAULT_COVERAGE_RADIUS,
            max_packages: DEFAULT_MAX_PACKAGES,
            parallel: true,
            unreachable: UnreachablePolicy::default(),
        }
    }
}

impl BfsSolverConfig {
    /// Package limit actually enforced.
    #[must_use]
    pub const fn package_limit(&self) -> usize {
        if self.max_packages > PackageMask::CAPACITY {
            PackageMask::CAPACITY
        } else {
            self.max_packages
        }
    }
}

/// Exact solver: one breadth-first search per start node over
/// `(node, collected packages)` states.
///
/// Ties between starts resolve to the lowest start index, so the returned
/// walk is the same whether or not the search runs in parallel.
///
/// # Examples
/// ```
/// use courier_core::{SolveRequest, Solver};
/// use courier_solver_bfs::BfsSolver;
///
/// let request = SolveRequest::new(
///     vec![1, 0, 0, 1, 0, 1],
///     vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)],
/// );
/// let response = BfsSolver::default().solve(&request)?;
/// assert_eq!(response.roads, 2);
/// assert!(response.walk.is_closed());
/// # Ok::<(), courier_core::SolveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BfsSolver {
    config: BfsSolverConfig,
}

impl BfsSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: BfsSolverConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &BfsSolverConfig {
        &self.config
    }

    fn search_all(&self, search: &StateSearch<'_>, node_count: usize) -> Summary {
        if self.config.parallel {
            (0..node_count)
                .into_par_iter()
                .map(|start| Summary::from(search.from_start(start)))
                .reduce(Summary::default, Summary::merge)
        } else {
            (0..node_count)
                .map(|start| Summary::from(search.from_start(start)))
                .fold(Summary::default(), Summary::merge)
        }
    }

    fn unreachable(
        &self,
        package_count: usize,
        diagnostics: Diagnostics,
    ) -> Result<SolveResponse, SolveError> {
        match self.config.unreachable {
            UnreachablePolicy::Error => Err(SolveError::CoverageUnreachable {
                packages: package_count,
            }),
            UnreachablePolicy::Zero => {
                log::warn!("no walk collects all {package_count} packages; reporting zero roads");
                Ok(SolveResponse {
                    roads: 0,
                    walk: Walk::empty(),
                    diagnostics,
                })
            }
        }
    }
}

impl Solver for BfsSolver {
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError> {
        let started_at = Instant::now();
        let packages = request.package_set()?;
        let network = request.network()?;
        let package_count = packages.len();

        if packages.is_empty() {
            log::debug!("no packages to collect");
            return Ok(SolveResponse {
                roads: 0,
                walk: Walk::empty(),
                diagnostics: Diagnostics {
                    solve_time: started_at.elapsed(),
                    ..Diagnostics::default()
                },
            });
        }

        let limit = self.config.package_limit();
        if package_count > limit {
            return Err(SolveError::TooManyPackages {
                count: package_count,
                limit,
            });
        }

        let distances = DistanceMatrix::all_pairs(&network);
        let coverage = CoverageMap::build(&distances, &packages, self.config.coverage_radius);
        let full = packages.full_mask();

        let search = StateSearch::new(&network, &distances, &coverage, full);
        let summary = self.search_all(&search, network.node_count());
        log::debug!(
            "searched {} starts, expanded {} states",
            summary.starts_evaluated,
            summary.states_expanded
        );

        let best = summary
            .best
            .and_then(|(roads, start)| search.walk_from(start).map(|walk| (roads, walk)));
        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            starts_evaluated: summary.starts_evaluated,
            states_expanded: summary.states_expanded,
            package_count,
        };

        match best {
            Some((roads, walk)) => Ok(SolveResponse {
                roads,
                walk,
                diagnostics,
            }),
            None => self.unreachable(package_count, diagnostics),
        }
    }
}

/// Per-start outcomes folded into one answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Summary {
    /// Lowest `(roads, start)` seen.
    best: Option<(u32, usize)>,
    starts_evaluated: u64,
    states_expanded: u64,
}

impl Summary {
    fn merge(self, other: Self) -> Self {
        let best = match (self.best, other.best) {
            (Some(lhs), Some(rhs)) => Some(lhs.min(rhs)),
            (lhs, rhs) => lhs.or(rhs),
        };
        Self {
            best,
            starts_evaluated: self.starts_evaluated.saturating_add(other.starts_evaluated),
            states_expanded: self.states_expanded.saturating_add(other.states_expanded),
        }
    }
}

impl From<StartOutcome> for Summary {
    fn from(outcome: StartOutcome) -> Self {
        Self {
            best: outcome.roads.map(|roads| (roads, outcome.start)),
            starts_evaluated: 1,
            states_expanded: outcome.states_expanded,
        }
    }
}
