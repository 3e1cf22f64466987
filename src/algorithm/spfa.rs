use std::collections::VecDeque;
use std::time::Instant;

use log::debug;

use crate::algorithm::traits::{check_source, improves};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Shortest Path Faster Algorithm: Bellman-Ford driven by a FIFO queue.
///
/// Accepts negative arc lengths. A negative cycle reachable from the source is
/// reported as [`Error::NegativeCycle`] instead of looping forever.
#[derive(Debug, Default, Clone, Copy)]
pub struct Spfa;

impl Spfa {
    pub fn new() -> Self {
        Spfa
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Spfa
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "spfa"
    }

    fn supports_negative_weights(&self) -> bool {
        true
    }

    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathResult<W>> {
        check_source(graph, source)?;

        let n = graph.node_count();
        let mut result: ShortestPathResult<W> = ShortestPathResult::new("spfa", n, source);
        let start = Instant::now();

        let mut queue = VecDeque::with_capacity(n);
        let mut in_queue = vec![false; n + 1];
        // Arcs on the walk behind each label; reaching n means a repeated node
        let mut hops = vec![0usize; n + 1];

        in_queue[source] = true;
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            in_queue[u] = false;
            let Some(dist_u) = result.distances[u] else {
                continue;
            };

            for arc in graph.outgoing(u) {
                result.relaxations += 1;

                let v = arc.to;
                let Some(candidate) = dist_u.checked_add(&arc.length) else {
                    continue;
                };
                if !improves(candidate, result.distances[v]) {
                    continue;
                }

                result.distances[v] = Some(candidate);
                result.predecessors[v] = Some(u);
                hops[v] = hops[u] + 1;
                if hops[v] >= n {
                    debug!("spfa from {}: negative cycle through node {}", source, v);
                    return Err(Error::NegativeCycle {
                        start: source,
                        node: v,
                    });
                }

                if !in_queue[v] {
                    in_queue[v] = true;
                    queue.push_back(v);
                }
            }
        }

        result.elapsed = start.elapsed();
        debug!(
            "spfa from {}: {} relaxations, {:?}",
            source, result.relaxations, result.elapsed
        );
        Ok(result)
    }
}
