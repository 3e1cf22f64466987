use std::time::Instant;

use log::debug;

use crate::algorithm::traits::{check_non_negative, check_source, improves};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::bucket_queue::DEFAULT_MAX_BUCKETS;
use crate::data_structures::BucketQueue;
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// How Dial estimates the number of buckets to preallocate.
///
/// The estimate is only a hint: the bucket array grows whenever a tentative
/// distance lands past its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketSizing {
    /// Sum of arc lengths over whole adjacency lists until more than
    /// `node_count` arcs have been seen
    SampledArcs,
    /// `(node_count - 1) * max_arc_length`, an upper bound on any shortest distance
    NodesTimesMaxArc,
}

/// Dial's algorithm: Dijkstra with an array of buckets indexed by distance
#[derive(Debug, Clone, Copy)]
pub struct Dial {
    sizing: BucketSizing,
    max_preallocated_buckets: usize,
    max_buckets: usize,
}

impl Dial {
    /// Create a new Dial instance with sampled bucket sizing
    pub fn new() -> Self {
        Dial {
            sizing: BucketSizing::SampledArcs,
            max_preallocated_buckets: 1 << 22,
            max_buckets: DEFAULT_MAX_BUCKETS,
        }
    }

    /// Set the strategy used to presize the bucket array
    pub fn with_sizing(mut self, sizing: BucketSizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Cap the number of buckets allocated up front
    pub fn with_max_preallocated_buckets(mut self, max: usize) -> Self {
        self.max_preallocated_buckets = max.max(1);
        self
    }

    /// Cap the bucket array after growth; a run needing a larger distance
    /// fails with [`Error::BucketLimit`]
    pub fn with_max_buckets(mut self, max: usize) -> Self {
        self.max_buckets = max.max(1);
        self
    }

    /// Estimated largest finite distance, used to presize the bucket array
    pub fn estimate_max_distance<W, G>(&self, graph: &G) -> usize
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.node_count();
        match self.sizing {
            BucketSizing::SampledArcs => {
                let mut total = 0usize;
                let mut seen = 0usize;
                for node in 1..=n {
                    for arc in graph.outgoing(node) {
                        total = total.saturating_add(arc.length.to_usize().unwrap_or(0));
                        seen += 1;
                    }
                    if seen > n {
                        break;
                    }
                }
                total
            }
            BucketSizing::NodesTimesMaxArc => graph
                .max_arc_length()
                .and_then(|max| max.to_usize())
                .map_or(0, |max| max.saturating_mul(n.saturating_sub(1))),
        }
    }
}

impl Default for Dial {
    fn default() -> Self {
        Self::new()
    }
}

fn bucket_index<W: Weight>(distance: W) -> Result<usize> {
    distance.to_usize().ok_or_else(|| {
        Error::AlgorithmError(format!("distance {} cannot index a bucket", distance))
    })
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dial
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "dial"
    }

    fn supports_negative_weights(&self) -> bool {
        false
    }

    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathResult<W>> {
        check_source(graph, source)?;
        check_non_negative(graph)?;

        let n = graph.node_count();
        let mut result: ShortestPathResult<W> = ShortestPathResult::new("dial", n, source);
        let start = Instant::now();

        let estimate = self.estimate_max_distance::<W, G>(graph);
        let preallocated = estimate
            .min(self.max_preallocated_buckets)
            .min(self.max_buckets - 1);
        let mut buckets =
            BucketQueue::with_max_key(preallocated).with_max_buckets(self.max_buckets);
        let mut visited = vec![false; n + 1];
        buckets.push(0, source)?;

        while let Some((_, u)) = buckets.pop() {
            if visited[u] {
                continue;
            }
            visited[u] = true;

            let Some(dist_u) = result.distances[u] else {
                continue;
            };

            for arc in graph.outgoing(u) {
                result.relaxations += 1;

                let v = arc.to;
                let Some(candidate) = dist_u.checked_add(&arc.length) else {
                    continue;
                };
                if improves(candidate, result.distances[v]) {
                    buckets.push(bucket_index(candidate)?, v)?;
                    result.distances[v] = Some(candidate);
                    result.predecessors[v] = Some(u);
                }
            }
        }

        result.elapsed = start.elapsed();
        debug!(
            "dial from {}: {} relaxations, {} buckets (estimate {}, {} regrowths), {:?}",
            source,
            result.relaxations,
            buckets.bucket_count(),
            estimate,
            buckets.regrowths(),
            result.elapsed
        );
        Ok(result)
    }
}
