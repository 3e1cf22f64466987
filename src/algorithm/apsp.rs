use std::time::{Duration, Instant};

use log::debug;
use serde::Serialize;

use crate::algorithm::traits::improves;
use crate::graph::{AdjacencyList, Arc, Graph, NodeId, Weight};
use crate::{Error, Result};

/// All-pairs distance and predecessor matrices.
///
/// `predecessor(i, j)` is the node right before `j` on the best `i -> j` path;
/// `predecessor(i, i) == Some(i)`.
#[derive(Debug, Clone, Serialize)]
pub struct AllPairsResult<W: Weight> {
    algorithm: &'static str,
    node_count: usize,
    /// Row-major `n x n`, zero-based
    distances: Vec<Option<W>>,
    predecessors: Vec<Option<NodeId>>,
    relaxations: u64,
    elapsed: Duration,
}

impl<W: Weight> AllPairsResult<W> {
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    fn slot(&self, from: NodeId, to: NodeId) -> Option<usize> {
        let n = self.node_count;
        if from >= 1 && from <= n && to >= 1 && to <= n {
            Some((from - 1) * n + (to - 1))
        } else {
            None
        }
    }

    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<W> {
        self.slot(from, to).and_then(|idx| self.distances[idx])
    }

    pub fn predecessor(&self, from: NodeId, to: NodeId) -> Option<NodeId> {
        self.slot(from, to).and_then(|idx| self.predecessors[idx])
    }

    /// Distances from `from` to every node, indexed like a single-source result
    pub fn row(&self, from: NodeId) -> Vec<Option<W>> {
        std::iter::once(None)
            .chain((1..=self.node_count).map(|to| self.distance(from, to)))
            .collect()
    }

    /// Reconstructs the node sequence of the best `from -> to` path
    pub fn path(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        self.distance(from, to)?;

        let mut path = vec![to];
        let mut current = to;
        while current != from {
            current = self.predecessor(from, current)?;
            path.push(current);
            if path.len() > self.node_count + 1 {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    pub fn relaxation_count(&self) -> u64 {
        self.relaxations
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// All-pairs shortest paths over a deduplicated arc set
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths<W: Weight> {
    graph: AdjacencyList<W>,
}

impl<W: Weight> AllPairsShortestPaths<W> {
    /// Validates and deduplicates arcs exactly like [`AdjacencyList::build`]
    pub fn new(node_count: usize, arcs: Vec<Arc<W>>) -> Result<Self> {
        Ok(Self::from_graph(AdjacencyList::build(node_count, arcs)?))
    }

    pub fn from_graph(graph: AdjacencyList<W>) -> Self {
        AllPairsShortestPaths { graph }
    }

    pub fn graph(&self) -> &AdjacencyList<W> {
        &self.graph
    }

    /// One-arc distance matrix with zeros on the diagonal
    fn initial_matrices(&self, algorithm: &'static str) -> AllPairsResult<W> {
        let n = self.graph.node_count();
        let mut distances = vec![None; n * n];
        let mut predecessors = vec![None; n * n];

        for i in 1..=n {
            let diag = (i - 1) * n + (i - 1);
            distances[diag] = Some(W::zero());
            predecessors[diag] = Some(i);
            for arc in self.graph.outgoing(i) {
                let idx = (i - 1) * n + (arc.to - 1);
                if improves(arc.length, distances[idx]) {
                    distances[idx] = Some(arc.length);
                    predecessors[idx] = Some(i);
                }
            }
        }

        AllPairsResult {
            algorithm,
            node_count: n,
            distances,
            predecessors,
            relaxations: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Min-plus closure: squares the distance matrix until it stops changing.
    ///
    /// After round `r` every entry is optimal over paths of at most `2^r` arcs,
    /// so at most `ceil(log2(n))` rounds run.
    pub fn algebraic_floyd_warshall(&self) -> Result<AllPairsResult<W>> {
        let mut result = self.initial_matrices("algebraic-floyd-warshall");
        let n = result.node_count;
        let start = Instant::now();
        let mut rounds = 0usize;

        loop {
            rounds += 1;
            let mut next_dist = result.distances.clone();
            let mut next_pred = result.predecessors.clone();
            let mut changed = false;

            for i in 0..n {
                for k in 0..n {
                    let Some(d_ik) = result.distances[i * n + k] else {
                        continue;
                    };
                    for j in 0..n {
                        let Some(d_kj) = result.distances[k * n + j] else {
                            continue;
                        };
                        result.relaxations += 1;
                        let Some(candidate) = d_ik.checked_add(&d_kj) else {
                            continue;
                        };
                        if improves(candidate, next_dist[i * n + j]) {
                            next_dist[i * n + j] = Some(candidate);
                            next_pred[i * n + j] = result.predecessors[k * n + j];
                            changed = true;
                        }
                    }
                }
            }

            result.distances = next_dist;
            result.predecessors = next_pred;
            check_diagonal(&result)?;
            // Every cycle has at most n arcs, so once 2^rounds >= n any negative
            // one is already on the diagonal
            if !changed || (1usize << rounds.min(63)) >= n {
                break;
            }
        }

        result.elapsed = start.elapsed();
        debug!(
            "algebraic floyd-warshall on {} nodes: {} rounds, {} relaxations, {:?}",
            n, rounds, result.relaxations, result.elapsed
        );
        Ok(result)
    }

    /// Classic triple loop over intermediate nodes
    pub fn graphical_floyd_warshall(&self) -> Result<AllPairsResult<W>> {
        let mut result = self.initial_matrices("graphical-floyd-warshall");
        let n = result.node_count;
        let start = Instant::now();

        for k in 0..n {
            for i in 0..n {
                let Some(d_ik) = result.distances[i * n + k] else {
                    continue;
                };
                for j in 0..n {
                    let Some(d_kj) = result.distances[k * n + j] else {
                        continue;
                    };
                    result.relaxations += 1;
                    let Some(candidate) = d_ik.checked_add(&d_kj) else {
                        continue;
                    };
                    if improves(candidate, result.distances[i * n + j]) {
                        result.distances[i * n + j] = Some(candidate);
                        result.predecessors[i * n + j] = result.predecessors[k * n + j];
                    }
                }
            }
            check_diagonal(&result)?;
        }

        result.elapsed = start.elapsed();
        debug!(
            "graphical floyd-warshall on {} nodes: {} relaxations, {:?}",
            n, result.relaxations, result.elapsed
        );
        Ok(result)
    }
}

fn check_diagonal<W: Weight>(result: &AllPairsResult<W>) -> Result<()> {
    let n = result.node_count;
    for i in 0..n {
        if let Some(d) = result.distances[i * n + i] {
            if d.is_negative() {
                return Err(Error::NegativeCycle {
                    start: i + 1,
                    node: i + 1,
                });
            }
        }
    }
    Ok(())
}
