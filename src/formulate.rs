use std::collections::HashMap;

use crate::domain::validate::validate_graph;
use crate::error::{CoverError, Result};
use crate::models::{
    CoverModel, Graph, IntegerSparseMatrix, Objective, Shape, SolverDirection,
    SparseGEIntegerPolyhedron, Variable,
};

pub fn variable_id(node: usize) -> String {
    format!("x{}", node)
}

/// One binary variable per node.
pub fn cover_variables(graph: &Graph) -> Vec<Variable> {
    (0..graph.node_count())
        .map(|node| Variable {
            id: variable_id(node),
            bound: (0, 1),
        })
        .collect()
}

/// One row `x_a + x_b >= 1` per edge, in edge order.
pub fn cover_constraints(graph: &Graph) -> (IntegerSparseMatrix, Vec<i32>) {
    let nnz = graph.edge_count() * 2;
    let mut rows = Vec::with_capacity(nnz);
    let mut cols = Vec::with_capacity(nnz);

    for (row, edge) in graph.edges.iter().enumerate() {
        for col in [edge.a, edge.b] {
            rows.push(row as i32);
            cols.push(col as i32);
        }
    }

    let a = IntegerSparseMatrix {
        rows,
        cols,
        vals: vec![1; nnz],
        shape: Shape {
            nrows: graph.edge_count(),
            ncols: graph.node_count(),
        },
    };
    (a, vec![1; graph.edge_count()])
}

/// Total selected node weight.
pub fn cover_objective(graph: &Graph) -> Objective {
    graph
        .node_weights
        .iter()
        .enumerate()
        .map(|(node, &weight)| (variable_id(node), weight))
        .collect::<HashMap<_, _>>()
}

/// Builds the minimum-weight vertex cover program for `graph`.
///
/// Fails with [`CoverError::MalformedGraph`] before building anything if an
/// edge is out of range or a self-loop, or a node weight is not positive.
pub fn formulate(graph: &Graph) -> Result<CoverModel> {
    validate_graph(graph).map_err(|e| CoverError::MalformedGraph(e.details))?;

    let variables = cover_variables(graph);
    let (a, b) = cover_constraints(graph);
    let objective = cover_objective(graph);

    log::debug!(
        "formulated {} variables and {} constraints",
        variables.len(),
        b.len()
    );

    Ok(CoverModel {
        polyhedron: SparseGEIntegerPolyhedron { a, b, variables },
        objective,
        direction: SolverDirection::Minimize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Edge;

    fn path_graph() -> Graph {
        Graph::new(
            vec![1.5, 0.25, 2.0],
            vec![Edge::new(0, 1, 0.1), Edge::new(1, 2, 0.2)],
        )
    }

    #[test]
    fn test_formulate_given_path_should_emit_one_binary_variable_per_node() {
        let model = formulate(&path_graph()).unwrap();
        let ids: Vec<&str> = model.variables().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["x0", "x1", "x2"]);
        assert!(model.variables().iter().all(|v| v.bound == (0, 1)));
    }

    #[test]
    fn test_formulate_given_path_should_emit_one_covering_row_per_edge() {
        let model = formulate(&path_graph()).unwrap();
        let a = &model.polyhedron.a;
        assert_eq!(model.constraint_count(), 2);
        assert_eq!(a.shape, Shape { nrows: 2, ncols: 3 });
        assert_eq!(a.rows, vec![0, 0, 1, 1]);
        assert_eq!(a.cols, vec![0, 1, 1, 2]);
        assert_eq!(a.vals, vec![1, 1, 1, 1]);
        assert_eq!(model.polyhedron.b, vec![1, 1]);
    }

    #[test]
    fn test_formulate_given_path_should_minimize_node_weights() {
        let model = formulate(&path_graph()).unwrap();
        assert_eq!(model.direction, SolverDirection::Minimize);
        assert_eq!(model.objective.len(), 3);
        assert_eq!(model.objective["x0"], 1.5);
        assert_eq!(model.objective["x1"], 0.25);
        assert_eq!(model.objective["x2"], 2.0);
    }

    #[test]
    fn test_formulate_given_empty_graph_should_emit_empty_model() {
        let model = formulate(&Graph::empty()).unwrap();
        assert!(model.variables().is_empty());
        assert_eq!(model.constraint_count(), 0);
        assert!(model.objective.is_empty());
    }

    #[test]
    fn test_formulate_given_edge_to_missing_node_should_fail_fast() {
        let graph = Graph::new(vec![1.0, 1.0], vec![Edge::new(0, 1, 1.0), Edge::new(1, 5, 1.0)]);
        match formulate(&graph) {
            Err(CoverError::MalformedGraph(details)) => assert!(details.contains("(1, 5)")),
            other => panic!("expected MalformedGraph, got {:?}", other),
        }
    }
}
