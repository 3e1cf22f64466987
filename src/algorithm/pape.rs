use std::collections::VecDeque;
use std::time::Instant;

use log::debug;

use crate::algorithm::traits::{check_source, improves};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// D'Esopo-Pape label correcting algorithm.
///
/// Like [`Spfa`](crate::algorithm::spfa::Spfa) but on a deque: a node whose
/// label improves goes to the back the first time it is queued and to the
/// front on every later insertion, so corrections to nodes that already
/// propagated a label are handled first. A node already waiting in the deque
/// is not inserted again.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pape;

impl Pape {
    pub fn new() -> Self {
        Pape
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Pape
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "pape"
    }

    fn supports_negative_weights(&self) -> bool {
        true
    }

    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathResult<W>> {
        check_source(graph, source)?;

        let n = graph.node_count();
        let mut result: ShortestPathResult<W> = ShortestPathResult::new("pape", n, source);
        let start = Instant::now();

        let mut deque = VecDeque::with_capacity(n);
        let mut in_queue = vec![false; n + 1];
        let mut ever_queued = vec![false; n + 1];
        let mut hops = vec![0usize; n + 1];
        let mut front_insertions = 0usize;

        in_queue[source] = true;
        ever_queued[source] = true;
        deque.push_front(source);

        while let Some(u) = deque.pop_front() {
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
                    debug!("pape from {}: negative cycle through node {}", source, v);
                    return Err(Error::NegativeCycle {
                        start: source,
                        node: v,
                    });
                }

                if in_queue[v] {
                    continue;
                }
                in_queue[v] = true;
                if ever_queued[v] {
                    front_insertions += 1;
                    deque.push_front(v);
                } else {
                    ever_queued[v] = true;
                    deque.push_back(v);
                }
            }
        }

        result.elapsed = start.elapsed();
        debug!(
            "pape from {}: {} relaxations, {} front insertions, {:?}",
            source, result.relaxations, front_insertions, result.elapsed
        );
        Ok(result)
    }
}
