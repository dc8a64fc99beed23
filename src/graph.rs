use rand::distributions::Open01;
use rand::Rng;

use crate::models::{Edge, Graph};

/// Random draw from the standard exponential distribution, strictly positive.
pub fn rand_exp<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u: f64 = rng.sample(Open01);
    -u.ln()
}

/// Generates a random graph on `n` nodes where each unordered pair is joined
/// with probability `p`.
///
/// Node weights are drawn first, then pairs `(a, b)` with `a < b` are visited
/// in lexicographic order. The same seeded `rng` always yields the same graph.
pub fn random_graph<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Graph {
    let node_weights: Vec<f64> = (0..n).map(|_| rand_exp(rng)).collect();

    let mut edges = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen::<f64>() < p {
                edges.push(Edge::new(a, b, rand_exp(rng)));
            }
        }
    }

    log::debug!("generated graph with {} nodes and {} edges", n, edges.len());
    Graph::new(node_weights, edges)
}
