use crate::convert::objective_value;
use crate::domain::validate::SolveInputError;
use crate::models::{CoverModel, SolveOutcome, SolverDirection};

/// Common interface for ILP solver backends
pub trait Solver: Send + Sync {
    /// Solve a single integer program
    ///
    /// # Arguments
    /// * `model` - Variables, `A x >= b` constraints, objective and direction
    ///
    /// # Returns
    /// The backend's final status, with the assignment when it is optimal.
    /// `Err` means the model was rejected before reaching the backend.
    fn solve(&self, model: &CoverModel) -> Result<SolveOutcome, SolveInputError>;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}

/// Answers a model with no constraint rows directly: each variable sits at
/// whichever bound is best for its own coefficient.
///
/// Returns `None` when the model has constraints.
pub fn solve_unconstrained(model: &CoverModel) -> Option<SolveOutcome> {
    if model.constraint_count() > 0 {
        return None;
    }

    let assignment: Vec<bool> = model
        .variables()
        .iter()
        .map(|v| {
            let coeff = model.objective.get(&v.id).copied().unwrap_or(0.0);
            let (lower, upper) = v.bound;
            let value = match model.direction {
                SolverDirection::Minimize if coeff < 0.0 => upper,
                SolverDirection::Maximize if coeff > 0.0 => upper,
                _ => lower,
            };
            value > 0
        })
        .collect();
    let objective = objective_value(model, &assignment);

    Some(SolveOutcome::Optimal { assignment, objective })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulate::formulate;
    use crate::models::{Edge, Graph};

    #[test]
    fn test_solve_unconstrained_given_edgeless_graph_should_pick_nothing() {
        let model = formulate(&Graph::new(vec![1.0, 2.0, 3.0], vec![])).unwrap();
        assert_eq!(
            solve_unconstrained(&model),
            Some(SolveOutcome::Optimal {
                assignment: vec![false, false, false],
                objective: 0.0,
            })
        );
    }

    #[test]
    fn test_solve_unconstrained_given_empty_model_should_be_optimal_and_empty() {
        let model = formulate(&Graph::empty()).unwrap();
        assert_eq!(
            solve_unconstrained(&model),
            Some(SolveOutcome::Optimal { assignment: vec![], objective: 0.0 })
        );
    }

    #[test]
    fn test_solve_unconstrained_given_maximize_should_raise_positive_coefficients() {
        let mut model = formulate(&Graph::new(vec![1.0, 2.0], vec![])).unwrap();
        model.direction = SolverDirection::Maximize;
        model.objective.insert("x1".to_string(), -2.0);
        assert_eq!(
            solve_unconstrained(&model),
            Some(SolveOutcome::Optimal {
                assignment: vec![true, false],
                objective: 1.0,
            })
        );
    }

    #[test]
    fn test_solve_unconstrained_given_constraints_should_defer_to_backend() {
        let model = formulate(&Graph::new(vec![1.0, 1.0], vec![Edge::new(0, 1, 1.0)])).unwrap();
        assert_eq!(solve_unconstrained(&model), None);
    }
}
