use serde::Serialize;
use std::collections::HashMap;

/// Variable bounds (lower, upper), matching glpk_rust's `Bound`.
pub type Bound = (i32, i32);

// ---------- Graph ----------

/// An undirected edge between nodes `a` and `b` carrying weight `w`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub w: f64,
}

impl Edge {
    pub fn new(a: usize, b: usize, w: f64) -> Self {
        Edge { a, b, w }
    }
}

/// Weighted undirected graph over nodes `0..node_count()`.
///
/// Construction does not validate edges; the formulator rejects malformed
/// graphs before anything reaches a solver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    pub node_weights: Vec<f64>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(node_weights: Vec<f64>, edges: Vec<Edge>) -> Self {
        Graph { node_weights, edges }
    }

    pub fn empty() -> Self {
        Graph::new(Vec::new(), Vec::new())
    }

    pub fn node_count(&self) -> usize {
        self.node_weights.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

// ---------- ILP model ----------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub id: String,
    pub bound: Bound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub nrows: usize,
    pub ncols: usize,
}

/// Coordinate-format sparse integer matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegerSparseMatrix {
    pub rows: Vec<i32>,
    pub cols: Vec<i32>,
    pub vals: Vec<i32>,
    pub shape: Shape,
}

/// Constraints `A x >= b` over bounded integer variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SparseGEIntegerPolyhedron {
    #[serde(rename = "A")]
    pub a: IntegerSparseMatrix,
    pub b: Vec<i32>,
    pub variables: Vec<Variable>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverDirection {
    Maximize,
    Minimize,
}

pub type Objective = HashMap<String, f64>;

/// A complete integer program ready to hand to a solver backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverModel {
    pub polyhedron: SparseGEIntegerPolyhedron,
    pub objective: Objective,
    pub direction: SolverDirection,
}

impl CoverModel {
    pub fn variables(&self) -> &[Variable] {
        &self.polyhedron.variables
    }

    pub fn constraint_count(&self) -> usize {
        self.polyhedron.a.shape.nrows
    }
}

// ---------- Solver results ----------

/// What a backend reports after solving a [`CoverModel`].
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// Proven optimum. `assignment[i]` is the value of the i-th variable.
    Optimal { assignment: Vec<bool>, objective: f64 },
    Infeasible,
    /// The backend stopped on a limit before proving optimality.
    Timeout,
    Error(String),
}

impl SolveOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            SolveOutcome::Optimal { .. } => "optimal",
            SolveOutcome::Infeasible => "infeasible",
            SolveOutcome::Timeout => "timeout",
            SolveOutcome::Error(_) => "error",
        }
    }
}

/// The nodes picked by the solver, sorted ascending, with their total weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cover {
    pub nodes: Vec<usize>,
    pub weight: f64,
}

impl Cover {
    /// Builds a cover from the given nodes, summing their weights in `graph`.
    /// Nodes outside the graph contribute no weight.
    pub fn from_nodes(mut nodes: Vec<usize>, graph: &Graph) -> Self {
        nodes.sort_unstable();
        nodes.dedup();
        let weight = nodes
            .iter()
            .filter_map(|&node| graph.node_weights.get(node))
            .sum();
        Cover { nodes, weight }
    }

    /// Nodes whose variable is set in `assignment`.
    pub fn from_assignment(assignment: &[bool], graph: &Graph) -> Self {
        let nodes = assignment
            .iter()
            .enumerate()
            .filter_map(|(node, &picked)| picked.then_some(node))
            .collect();
        Cover::from_nodes(nodes, graph)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: usize) -> bool {
        self.nodes.binary_search(&node).is_ok()
    }
}
