use std::time::Instant;

use log::debug;

use crate::algorithm::traits::{check_non_negative, check_source, improves};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::DistanceHeap;
use crate::graph::{Graph, NodeId, Weight};
use crate::Result;

/// Classic Dijkstra's algorithm on a binary heap with lazy deletion
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn supports_negative_weights(&self) -> bool {
        false
    }

    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathResult<W>> {
        check_source(graph, source)?;
        check_non_negative(graph)?;

        let n = graph.node_count();
        let mut result: ShortestPathResult<W> = ShortestPathResult::new("dijkstra", n, source);
        let start = Instant::now();

        let mut visited = vec![false; n + 1];
        let mut heap = DistanceHeap::with_capacity(n);
        heap.push(source, W::zero());

        while let Some((u, _)) = heap.pop() {
            // Stale duplicate
            if visited[u] {
                continue;
            }
            visited[u] = true;

            let Some(dist_u) = result.distances[u] else {
                continue;
            };

            for arc in graph.outgoing(u) {
                let v = arc.to;
                if visited[v] {
                    continue;
                }
                result.relaxations += 1;

                let Some(candidate) = dist_u.checked_add(&arc.length) else {
                    continue;
                };
                if improves(candidate, result.distances[v]) {
                    result.distances[v] = Some(candidate);
                    result.predecessors[v] = Some(u);
                }
                heap.push(v, candidate);
            }
        }

        result.elapsed = start.elapsed();
        debug!(
            "dijkstra from {}: {} relaxations, {} heap pushes, {:?}",
            source,
            result.relaxations,
            heap.pushes(),
            result.elapsed
        );
        Ok(result)
    }
}
