use crate::error::{CoverError, Result};
use crate::models::{Cover, Edge, Graph};

/// First edge of `graph` with neither endpoint in `cover`.
pub fn first_uncovered<'g>(graph: &'g Graph, cover: &Cover) -> Option<&'g Edge> {
    graph
        .edges
        .iter()
        .find(|edge| !cover.contains(edge.a) && !cover.contains(edge.b))
}

/// Re-checks a solver's cover against the graph it was built from.
///
/// An uncovered edge means the formulation or the backend is broken, so the
/// error is always fatal for the run.
pub fn verify_cover(graph: &Graph, cover: &Cover) -> Result<()> {
    match first_uncovered(graph, cover) {
        Some(edge) => Err(CoverError::VerificationFailure { a: edge.a, b: edge.b }),
        None => Ok(()),
    }
}
