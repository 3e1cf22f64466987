use std::time::Duration;

use serde::Serialize;

use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Outcome of one shortest path run.
///
/// Distances and predecessors have `node_count + 1` slots indexed by node ID;
/// slot 0 is always `None`. A fresh value from [`ShortestPathResult::new`] is
/// the reset state every engine starts from: only the source has a distance
/// (zero) and a predecessor (itself).
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResult<W: Weight> {
    pub(crate) algorithm: &'static str,
    pub(crate) source: NodeId,
    pub(crate) distances: Vec<Option<W>>,
    pub(crate) predecessors: Vec<Option<NodeId>>,
    pub(crate) relaxations: u64,
    pub(crate) elapsed: Duration,
}

impl<W: Weight> ShortestPathResult<W> {
    /// Creates the reset state for a run from `source` over `node_count` nodes
    pub fn new(algorithm: &'static str, node_count: usize, source: NodeId) -> Self {
        let mut distances = vec![None; node_count + 1];
        let mut predecessors = vec![None; node_count + 1];
        if source >= 1 && source <= node_count {
            distances[source] = Some(W::zero());
            predecessors[source] = Some(source);
        }
        ShortestPathResult {
            algorithm,
            source,
            distances,
            predecessors,
            relaxations: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn node_count(&self) -> usize {
        self.distances.len().saturating_sub(1)
    }

    /// Distance per node ID; `None` means unreachable
    pub fn distances(&self) -> &[Option<W>] {
        &self.distances
    }

    /// Predecessor per node ID; `None` means unset
    pub fn predecessors(&self) -> &[Option<NodeId>] {
        &self.predecessors
    }

    pub fn distance(&self, node: NodeId) -> Option<W> {
        self.distances.get(node).copied().flatten()
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node).copied().flatten()
    }

    /// Processing time of the run, excluding graph construction
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of arc examinations performed by the run
    pub fn relaxation_count(&self) -> u64 {
        self.relaxations
    }

    /// Number of nodes with a finite distance, source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Walks predecessor links from `target` back to the source.
    ///
    /// Returns the path in source-to-target order, or `None` when the target is
    /// unreachable or the walk does not end at the source.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);
            if path.len() > self.distances.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }

    /// Sums arc lengths along the predecessor path to `target`.
    ///
    /// Returns `None` when there is no path or a link is not an arc of `graph`.
    pub fn path_cost<G: Graph<W>>(&self, graph: &G, target: NodeId) -> Option<W> {
        let path = self.path_to(target)?;
        path.windows(2).try_fold(W::zero(), |total, pair| {
            Some(total + graph.arc_length(pair[0], pair[1])?)
        })
    }
}

/// Trait for single-source shortest path engines
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source node to all other nodes.
    ///
    /// Every call starts from a freshly reset result and returns it by value.
    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Whether the engine accepts negative arc lengths
    fn supports_negative_weights(&self) -> bool;
}

/// Fails with `SourceNotFound` unless `source` lies in `1..=node_count`
pub(crate) fn check_source<W: Weight, G: Graph<W>>(graph: &G, source: NodeId) -> Result<()> {
    if graph.has_node(source) {
        Ok(())
    } else {
        Err(Error::SourceNotFound(source))
    }
}

/// Fails with `NegativeWeight` if any arc of the graph is negative
pub(crate) fn check_non_negative<W: Weight, G: Graph<W>>(graph: &G) -> Result<()> {
    match graph.first_negative_arc() {
        Some(arc) => Err(Error::NegativeWeight {
            from: arc.from,
            to: arc.to,
            length: arc.length.to_string(),
        }),
        None => Ok(()),
    }
}

/// Returns true when `candidate` is strictly shorter than the recorded label
#[inline]
pub(crate) fn improves<W: Weight>(candidate: W, recorded: Option<W>) -> bool {
    recorded.map_or(true, |current| candidate < current)
}
