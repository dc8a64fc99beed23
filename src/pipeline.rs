use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

use crate::domain::solver::Solver;
use crate::domain::solver_factory::{create_solver, SolverType};
use crate::domain::verify::verify_cover;
use crate::error::{CoverError, Result};
use crate::formulate::formulate;
use crate::graph::random_graph;
use crate::models::{Cover, CoverModel, Graph, SolveOutcome};
use crate::report::Report;

/// Parameters of one generate → formulate → solve → verify run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunOptions {
    pub p: f64,
    pub n: usize,
    pub seed: u64,
    pub solver: SolverType,
}

pub fn check_probability(p: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(CoverError::InvalidArgument(format!(
            "edge probability must be within [0, 1], got {}",
            p
        )))
    }
}

/// Runs the whole pipeline with the backend named in `options`.
pub fn run(options: &RunOptions) -> Result<Report> {
    let solver = create_solver(options.solver);
    run_with(options, solver.as_ref())
}

/// Runs the whole pipeline against an already constructed backend.
pub fn run_with(options: &RunOptions, solver: &dyn Solver) -> Result<Report> {
    check_probability(options.p)?;

    let started = Instant::now();
    let mut rng = SmallRng::seed_from_u64(options.seed);
    let graph = random_graph(options.n, options.p, &mut rng);
    let model = formulate(&graph)?;
    let compile_time = started.elapsed();
    log::info!(
        "compiled {} nodes, {} edges in {:.3}s (seed {})",
        graph.node_count(),
        graph.edge_count(),
        compile_time.as_secs_f64(),
        options.seed
    );

    let (cover, solve_time) = solve_and_verify(&graph, &model, solver)?;

    Ok(Report::new(
        solver.name(),
        options.seed,
        graph,
        cover,
        compile_time,
        solve_time,
    ))
}

/// Hands `model` to `solver`, then checks the returned cover against `graph`.
pub fn solve_and_verify(
    graph: &Graph,
    model: &CoverModel,
    solver: &dyn Solver,
) -> Result<(Cover, Duration)> {
    let started = Instant::now();
    let outcome = solver.solve(model).map_err(|e| CoverError::SolverFailure {
        solver: solver.name().to_string(),
        status: format!("rejected input: {}", e),
    })?;
    let solve_time = started.elapsed();
    log::info!(
        "{} finished with status {} in {:.3}s",
        solver.name(),
        outcome.status(),
        solve_time.as_secs_f64()
    );

    let assignment = match outcome {
        SolveOutcome::Optimal { assignment, objective } => {
            log::debug!("{} reported objective {}", solver.name(), objective);
            assignment
        }
        SolveOutcome::Infeasible | SolveOutcome::Timeout => {
            return Err(CoverError::SolverFailure {
                solver: solver.name().to_string(),
                status: outcome.status().to_string(),
            });
        }
        SolveOutcome::Error(detail) => {
            return Err(CoverError::SolverFailure {
                solver: solver.name().to_string(),
                status: format!("error: {}", detail),
            });
        }
    };

    let cover = Cover::from_assignment(&assignment, graph);
    verify_cover(graph, &cover)?;
    Ok((cover, solve_time))
}

/// Formulates `graph` and solves it, for callers that bring their own graph.
pub fn solve_graph(graph: &Graph, solver: &dyn Solver) -> Result<Cover> {
    let model = formulate(graph)?;
    solve_and_verify(graph, &model, solver).map(|(cover, _)| cover)
}
