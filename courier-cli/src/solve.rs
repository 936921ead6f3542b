//! Solve command implementation for the Courier CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use courier_core::{PackageMask, SolveRequest, SolveResponse, Solver};
use courier_solver_bfs::{
    BfsSolver, BfsSolverConfig, DEFAULT_COVERAGE_RADIUS, DEFAULT_MAX_PACKAGES, UnreachablePolicy,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_SOLVE_ALLOW_UNREACHABLE, ARG_SOLVE_COVERAGE_RADIUS, ARG_SOLVE_MAX_PACKAGES,
    ARG_SOLVE_REQUEST, ARG_SOLVE_SEQUENTIAL, CliError, ENV_SOLVE_REQUEST,
};

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Solve a courier request. The request is a JSON-encoded \
                 SolveRequest holding one 0/1 package flag per node and the \
                 list of roads as node pairs. The response, including the \
                 walk and search diagnostics, is printed as JSON.",
    about = "Find the shortest closed walk collecting every package"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file containing a SolveRequest.
    #[arg(value_name = "path")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Hop distance within which a package is collected.
    #[arg(long = ARG_SOLVE_COVERAGE_RADIUS, value_name = "hops")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) coverage_radius: Option<u32>,
    /// Refuse requests holding more packages than this.
    #[arg(long = ARG_SOLVE_MAX_PACKAGES, value_name = "count")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) max_packages: Option<usize>,
    /// Search start nodes one at a time instead of on the thread pool.
    #[arg(long = ARG_SOLVE_SEQUENTIAL)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) sequential: bool,
    /// Report zero roads instead of failing when no walk collects every
    /// package.
    #[arg(long = ARG_SOLVE_ALLOW_UNREACHABLE)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) allow_unreachable: bool,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Solver settings.
    pub(crate) solver: BfsSolverConfig,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_SOLVE_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SOLVE_REQUEST,
            env: ENV_SOLVE_REQUEST,
        })?;

        let max_packages = args.max_packages.unwrap_or(DEFAULT_MAX_PACKAGES);
        if max_packages > PackageMask::CAPACITY {
            return Err(CliError::PackageLimitTooLarge {
                field: ARG_SOLVE_MAX_PACKAGES,
                value: max_packages,
                capacity: PackageMask::CAPACITY,
            });
        }

        let unreachable = if args.allow_unreachable {
            UnreachablePolicy::Zero
        } else {
            UnreachablePolicy::Error
        };

        Ok(Self {
            request_path,
            solver: BfsSolverConfig {
                coverage_radius: args.coverage_radius.unwrap_or(DEFAULT_COVERAGE_RADIUS),
                max_packages,
                parallel: !args.sequential,
                unreachable,
            },
        })
    }
}

/// Builds a solver instance for the current solve invocation.
pub(super) trait SolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError>;
}

pub(super) struct DefaultSolveSolverBuilder;

impl SolveSolverBuilder for DefaultSolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
        Ok(Box::new(BfsSolver::with_config(config.solver.clone())))
    }
}

pub(super) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultSolveSolverBuilder;
    run_solve_with(args, &builder, &mut stdout)
}

pub(super) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let response = execute_solve(args, builder)?;
    write_solve_response(writer, &response)
}

fn execute_solve(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
) -> Result<SolveResponse, CliError> {
    let config = resolve_solve_config(args)?;
    let request = load_solve_request(&config.request_path)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidSolveRequest {
            path: config.request_path.clone(),
            source,
        })?;
    log::debug!(
        "solving {} ({} nodes, {} roads) with {:?}",
        config.request_path,
        request.node_count(),
        request.roads.len(),
        config.solver
    );
    let solver = builder.build(&config)?;
    solver
        .solve(&request)
        .map_err(|source| CliError::Solve { source })
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`SolveRequest`] from disk.
pub(super) fn load_solve_request(path: &Utf8Path) -> Result<SolveRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenSolveRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseSolveRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_solve_response(writer: &mut dyn Write, response: &SolveResponse) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerializeSolveResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteSolveOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteSolveOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
