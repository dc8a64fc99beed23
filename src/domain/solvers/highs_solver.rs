use crate::convert::objective_value;
use crate::domain::solver::{solve_unconstrained, Solver};
use crate::domain::validate::{validate_objective, SolveInputError};
use crate::models::{CoverModel, SolveOutcome, SolverDirection};

use ::highs::{ColProblem, HighsModelStatus, Sense};

/// HiGHS solver implementation
pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        HighsSolver
    }

    /// Map a non-optimal HiGHS status onto our outcome
    fn convert_status(model_status: HighsModelStatus) -> SolveOutcome {
        match model_status {
            HighsModelStatus::Infeasible => SolveOutcome::Infeasible,
            HighsModelStatus::ReachedTimeLimit | HighsModelStatus::ReachedIterationLimit => {
                SolveOutcome::Timeout
            }
            other => SolveOutcome::Error(format!("{:?}", other)),
        }
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for HighsSolver {
    fn solve(&self, model: &CoverModel) -> Result<SolveOutcome, SolveInputError> {
        validate_objective(model.variables(), &model.objective)?;

        if let Some(outcome) = solve_unconstrained(model) {
            return Ok(outcome);
        }

        let sense = match model.direction {
            SolverDirection::Maximize => Sense::Maximise,
            SolverDirection::Minimize => Sense::Minimise,
        };

        let polyhedron = &model.polyhedron;
        let mut problem = ColProblem::new();

        // First, add all constraint rows as `row >= b`
        let n_rows = polyhedron.a.shape.nrows;
        let mut rows = Vec::with_capacity(n_rows);
        for row_idx in 0..n_rows {
            let rhs = polyhedron.b.get(row_idx).copied().unwrap_or(0) as f64;
            rows.push(problem.add_row(rhs..));
        }

        // Build sparse matrix data: for each column, collect its row entries
        let n_cols = polyhedron.a.shape.ncols;
        let mut col_data: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n_cols];
        for ((&row, &col), &val) in polyhedron
            .a
            .rows
            .iter()
            .zip(&polyhedron.a.cols)
            .zip(&polyhedron.a.vals)
        {
            let (row, col) = (row as usize, col as usize);
            if col < n_cols && row < n_rows {
                col_data[col].push((row, val as f64));
            }
        }

        for (col_idx, var) in polyhedron.variables.iter().enumerate() {
            let obj_coeff = model.objective.get(&var.id).copied().unwrap_or(0.0);
            let (lower, upper) = var.bound;

            let row_factors: Vec<_> = col_data
                .get(col_idx)
                .map(|entries| {
                    entries
                        .iter()
                        .map(|(row_idx, val)| (rows[*row_idx], *val))
                        .collect()
                })
                .unwrap_or_default();

            problem.add_integer_column(obj_coeff, lower as f64..=upper as f64, &row_factors);
        }

        let mut highs_model = problem.optimise(sense);
        highs_model.set_option("output_flag", false);
        let solved = highs_model.solve();

        let model_status = solved.status();
        if !matches!(model_status, HighsModelStatus::Optimal) {
            return Ok(Self::convert_status(model_status));
        }

        let solution_values = solved.get_solution();
        let assignment: Vec<bool> = (0..polyhedron.variables.len())
            .map(|col_idx| {
                solution_values
                    .columns()
                    .get(col_idx)
                    .copied()
                    .unwrap_or(0.0)
                    .round()
                    > 0.0
            })
            .collect();
        let objective = objective_value(model, &assignment);

        Ok(SolveOutcome::Optimal { assignment, objective })
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
