//! Minimum-weight vertex cover on random graphs, formulated as a 0/1 integer
//! program and handed to an external ILP backend.

pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod formulate;
pub mod graph;
pub mod models;
pub mod pipeline;
pub mod report;

pub use domain::solver::Solver;
pub use domain::solver_factory::{create_solver, SolverType};
pub use error::{CoverError, Result};
pub use models::{Cover, CoverModel, Edge, Graph, SolveOutcome};
pub use pipeline::{run, run_with, solve_graph, RunOptions};
