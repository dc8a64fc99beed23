use std::collections::HashSet;

use crate::models::{Graph, Objective, Variable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveInputError {
    pub details: String,
}

impl std::fmt::Display for SolveInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.details)
    }
}

/// Checks that every edge joins two distinct existing nodes and that every
/// node weight is a finite positive number.
pub fn validate_graph(graph: &Graph) -> Result<(), SolveInputError> {
    let n = graph.node_count();

    for (node, weight) in graph.node_weights.iter().enumerate() {
        if !weight.is_finite() || *weight <= 0.0 {
            return Err(SolveInputError {
                details: format!("Node {} has invalid weight {}", node, weight),
            });
        }
    }

    for (index, edge) in graph.edges.iter().enumerate() {
        if edge.a >= n || edge.b >= n {
            return Err(SolveInputError {
                details: format!(
                    "Edge {} ({}, {}) references a node outside 0..{}",
                    index, edge.a, edge.b, n,
                ),
            });
        }
        if edge.a == edge.b {
            return Err(SolveInputError {
                details: format!("Edge {} is a self-loop on node {}", index, edge.a),
            });
        }
    }

    Ok(())
}

pub fn validate_objective(
    variables: &[Variable],
    objective: &Objective,
) -> Result<(), SolveInputError> {
    let variable_ids: HashSet<&str> = variables
        .iter()
        .map(|v| v.id.as_str())
        .collect();

    for objective_variable in objective.keys() {
        if !variable_ids.contains(objective_variable.as_str()) {
            return Err(
                SolveInputError {
                    details: format!(
                        "Objective contains missing variable {}",
                        objective_variable,
                    ),
                },
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Edge;
    use std::collections::HashMap;

    #[test]
    fn test_validate_objective_given_valid_objective_should_return_ok() {
        let variables = vec![
            Variable { id: "x0".into(), bound: (0, 1) },
            Variable { id: "x1".into(), bound: (0, 1) },
        ];
        let objective = HashMap::from([("x0".to_string(), 1.0), ("x1".to_string(), 2.0)]);
        assert!(
            validate_objective(&variables, &objective).is_ok()
        );
    }

    #[test]
    fn test_validate_objective_given_missing_variable_should_return_error() {
        let variables = vec![
            Variable { id: "x0".into(), bound: (0, 1) },
        ];
        let objective = HashMap::from([("x0".to_string(), 1.0), ("missing".to_string(), 2.0)]);
        let err = validate_objective(&variables, &objective).unwrap_err();
        assert!(err.details.contains("missing"));
    }

    #[test]
    fn test_validate_graph_given_well_formed_graph_should_return_ok() {
        let graph = Graph::new(vec![1.0, 2.0, 3.0], vec![Edge::new(0, 1, 0.5), Edge::new(1, 2, 0.5)]);
        assert!(validate_graph(&graph).is_ok());
    }

    #[test]
    fn test_validate_graph_given_empty_graph_should_return_ok() {
        assert!(validate_graph(&Graph::empty()).is_ok());
    }

    #[test]
    fn test_validate_graph_given_out_of_range_edge_should_return_error() {
        let graph = Graph::new(vec![1.0, 1.0], vec![Edge::new(0, 2, 1.0)]);
        let err = validate_graph(&graph).unwrap_err();
        assert!(err.details.contains("(0, 2)"));
    }

    #[test]
    fn test_validate_graph_given_self_loop_should_return_error() {
        let graph = Graph::new(vec![1.0, 1.0], vec![Edge::new(1, 1, 1.0)]);
        assert!(validate_graph(&graph).unwrap_err().details.contains("self-loop"));
    }

    #[test]
    fn test_validate_graph_given_non_positive_weight_should_return_error() {
        for weight in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let graph = Graph::new(vec![1.0, weight], vec![]);
            assert!(validate_graph(&graph).is_err());
        }
    }
}
