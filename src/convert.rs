use crate::models::{
    CoverModel, IntegerSparseMatrix, Objective, SolveOutcome, SparseGEIntegerPolyhedron,
};
use std::collections::HashMap;

use glpk_rust::{
    Bound, IntegerSparseMatrix as GlpkMatrix, Solution, SparseLEIntegerPolyhedron as GlpkPoly,
    Status as GlpkStatus, Variable as GlpkVar,
};

pub fn to_borrowed_objective(obj: &Objective) -> HashMap<&str, f64> {
    obj.iter().map(|(k, v)| (k.as_str(), *v)).collect()
}

/// Convert a GE polyhedron (A x >= b) to a GLPK LE polyhedron (A' x <= b')
/// by negating A and b, borrowing variable ids from `ge`.
pub fn ge_to_glpk_le(ge: &SparseGEIntegerPolyhedron) -> GlpkPoly<'_> {
    let mut a = to_glpk_matrix(&ge.a);
    a.vals = a.vals.into_iter().map(|v| -v).collect();

    let b: Vec<Bound> = ge.b.iter().map(|&v| (0, -v)).collect();

    let variables: Vec<GlpkVar<'_>> = ge
        .variables
        .iter()
        .map(|v| GlpkVar {
            id: v.id.as_str(),
            bound: v.bound,
        })
        .collect();

    GlpkPoly {
        a,
        b,
        variables,
        double_bound: false,
    }
}

fn to_glpk_matrix(m: &IntegerSparseMatrix) -> GlpkMatrix {
    GlpkMatrix {
        rows: m.rows.clone(),
        cols: m.cols.clone(),
        vals: m.vals.clone(),
    }
}

pub fn glpk_status_name(status: &GlpkStatus) -> &'static str {
    match status {
        GlpkStatus::Undefined => "Undefined",
        GlpkStatus::Feasible => "Feasible",
        GlpkStatus::Infeasible => "Infeasible",
        GlpkStatus::NoFeasible => "NoFeasible",
        GlpkStatus::Optimal => "Optimal",
        GlpkStatus::Unbounded => "Unbounded",
        GlpkStatus::SimplexFailed => "SimplexFailed",
        GlpkStatus::MIPFailed => "MIPFailed",
        GlpkStatus::EmptySpace => "EmptySpace",
    }
}

/// Reads a GLPK solution back in variable order. Variables the solver left
/// out of its assignment count as zero.
pub fn from_glpk_solution(solution: &Solution, model: &CoverModel) -> SolveOutcome {
    match solution.status {
        GlpkStatus::Optimal => {
            let assignment: Vec<bool> = model
                .variables()
                .iter()
                .map(|v| solution.solution.get(v.id.as_str()).copied().unwrap_or(0) > 0)
                .collect();
            let objective = objective_value(model, &assignment);
            SolveOutcome::Optimal { assignment, objective }
        }
        GlpkStatus::Infeasible | GlpkStatus::NoFeasible | GlpkStatus::EmptySpace => {
            SolveOutcome::Infeasible
        }
        GlpkStatus::Feasible => SolveOutcome::Timeout,
        ref other => {
            let name = glpk_status_name(other);
            SolveOutcome::Error(match &solution.error {
                Some(detail) => format!("{}: {}", name, detail),
                None => name.to_string(),
            })
        }
    }
}

/// Objective value of `assignment`, recomputed from the model's coefficients.
pub fn objective_value(model: &CoverModel, assignment: &[bool]) -> f64 {
    model
        .variables()
        .iter()
        .zip(assignment)
        .filter(|(_, picked)| **picked)
        .filter_map(|(v, _)| model.objective.get(&v.id))
        .sum()
}
