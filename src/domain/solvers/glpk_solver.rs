use crate::convert::{from_glpk_solution, ge_to_glpk_le, to_borrowed_objective};
use crate::domain::solver::{solve_unconstrained, Solver};
use crate::domain::validate::{validate_objective, SolveInputError};
use crate::models::{CoverModel, SolveOutcome, SolverDirection};

use glpk_rust::{solve_ilps as glpk_solve_ilps, Solution};

const NO_TERMINAL_OUTPUT: bool = false;

/// GLPK solver implementation
pub struct GlpkSolver;

impl GlpkSolver {
    pub fn new() -> Self {
        GlpkSolver
    }
}

impl Default for GlpkSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for GlpkSolver {
    fn solve(&self, model: &CoverModel) -> Result<SolveOutcome, SolveInputError> {
        validate_objective(model.variables(), &model.objective)?;

        if let Some(outcome) = solve_unconstrained(model) {
            return Ok(outcome);
        }

        let mut glpk_polyhedron = ge_to_glpk_le(&model.polyhedron);
        let objectives = vec![to_borrowed_objective(&model.objective)];
        let maximize = model.direction == SolverDirection::Maximize;

        // Call the GLPK library solver
        let lib_solutions: Vec<Solution> = glpk_solve_ilps(
            &mut glpk_polyhedron,
            objectives,
            maximize,
            NO_TERMINAL_OUTPUT,
        );

        let outcome = match lib_solutions.first() {
            Some(solution) => from_glpk_solution(solution, model),
            None => SolveOutcome::Error("GLPK returned no solution".to_string()),
        };
        Ok(outcome)
    }

    fn name(&self) -> &str {
        "GLPK"
    }
}
