//! Core domain types for the Courier engine.
//!
//! A courier walks an undirected road network and collects every package
//! that lies within a small hop radius of some node on the walk. This crate
//! models the inputs of that problem and the contract solvers implement:
//!
//! - [`RoadNetwork`]: validated adjacency built from a list of roads.
//! - [`PackageSet`] and [`PackageMask`]: package locations and bitsets over
//!   them.
//! - [`DistanceMatrix`]: all-pairs hop counts.
//! - [`SolveRequest`], [`SolveResponse`] and the [`Solver`] trait.
//!
//! Constructors return `Result` so malformed input is rejected before any
//! search runs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
pub mod network;
pub mod packages;
pub mod solver;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod walk;

pub use distance::DistanceMatrix;
pub use network::{RoadNetwork, RoadNetworkError};
pub use packages::{PackageMask, PackageSet, PackageSetError};
pub use solver::{
    Diagnostics, SolveError, SolveRequest, SolveRequestValidationError, SolveResponse, Solver,
};
pub use walk::Walk;
