//! Facade crate for the Courier engine.
//!
//! This crate re-exports the core domain types and exposes the breadth-first
//! solver behind the `solver-bfs` feature.
//!
//! # Examples
//! ```
//! # #[cfg(feature = "solver-bfs")]
//! # {
//! use courier_engine::min_roads;
//!
//! let roads = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)];
//! assert_eq!(min_roads(&[1, 0, 0, 1, 0, 1], &roads), Ok(2));
//! # }
//! ```

#![forbid(unsafe_code)]

pub use courier_core::{
    Diagnostics, DistanceMatrix, PackageMask, PackageSet, PackageSetError, RoadNetwork,
    RoadNetworkError, SolveError, SolveRequest, SolveRequestValidationError, SolveResponse,
    Solver, Walk,
};

#[cfg(feature = "solver-bfs")]
pub use courier_solver_bfs::{
    BfsSolver, BfsSolverConfig, CoverageMap, UnreachablePolicy, min_roads,
};
