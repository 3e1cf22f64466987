use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::adjacency::{AdjacencyList, GraphBuilder};
use crate::graph::arc::Arc;
use crate::Result;

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generates a random directed graph with `arc_count` arcs and lengths in `1..=max_length`.
///
/// A Hamiltonian chain `1 -> 2 -> ... -> n` is always included so every node is
/// reachable from node 1; the remaining arcs are uniform random pairs without
/// self-loops. Parallel arcs may be drawn and are collapsed by the builder.
pub fn random_graph(
    node_count: usize,
    arc_count: usize,
    max_length: i64,
    seed: Option<u64>,
) -> Result<AdjacencyList<i64>> {
    let mut rng = rng_from(seed);
    let max_length = max_length.max(1);
    let mut arcs = Vec::with_capacity(arc_count.max(node_count));

    for v in 1..node_count {
        arcs.push(Arc::new(v, v + 1, rng.gen_range(1..=max_length)));
    }

    if node_count > 1 {
        while arcs.len() < arc_count {
            let from = rng.gen_range(1..=node_count);
            let to = rng.gen_range(1..=node_count);
            if from != to {
                arcs.push(Arc::new(from, to, rng.gen_range(1..=max_length)));
            }
        }
    }

    AdjacencyList::build(node_count, arcs)
}

/// Generates a `width x height` grid with arcs in all four directions.
///
/// Node `(x, y)` has ID `y * width + x + 1`.
pub fn grid_graph(
    width: usize,
    height: usize,
    max_length: i64,
    seed: Option<u64>,
) -> Result<AdjacencyList<i64>> {
    let mut rng = rng_from(seed);
    let max_length = max_length.max(1);
    let id = |x: usize, y: usize| y * width + x + 1;
    let mut builder = GraphBuilder::new(width * height);

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                builder.add_arc(id(x, y), id(x + 1, y), rng.gen_range(1..=max_length));
                builder.add_arc(id(x + 1, y), id(x, y), rng.gen_range(1..=max_length));
            }
            if y + 1 < height {
                builder.add_arc(id(x, y), id(x, y + 1), rng.gen_range(1..=max_length));
                builder.add_arc(id(x, y + 1), id(x, y), rng.gen_range(1..=max_length));
            }
        }
    }

    builder.build()
}

/// Generates a random DAG whose arcs may carry negative lengths.
///
/// Arcs only go from lower to higher node IDs, so no cycle (negative or
/// otherwise) can exist. Lengths are drawn from `min_length..=max_length`.
pub fn random_dag(
    node_count: usize,
    arc_count: usize,
    min_length: i64,
    max_length: i64,
    seed: Option<u64>,
) -> Result<AdjacencyList<i64>> {
    let mut rng = rng_from(seed);
    let max_length = max_length.max(min_length);
    let mut arcs = Vec::with_capacity(arc_count.max(node_count));

    for v in 1..node_count {
        arcs.push(Arc::new(v, v + 1, rng.gen_range(min_length..=max_length)));
    }

    if node_count > 1 {
        while arcs.len() < arc_count {
            let a = rng.gen_range(1..=node_count);
            let b = rng.gen_range(1..=node_count);
            if a != b {
                let (from, to) = if a < b { (a, b) } else { (b, a) };
                arcs.push(Arc::new(from, to, rng.gen_range(min_length..=max_length)));
            }
        }
    }

    AdjacencyList::build(node_count, arcs)
}
