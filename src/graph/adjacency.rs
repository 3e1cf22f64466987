use log::debug;

use crate::graph::arc::{Arc, NodeId, Weight};
use crate::graph::traits::Graph;
use crate::{Error, Result};

/// Collects arcs for a graph with a fixed number of nodes
#[derive(Debug, Clone)]
pub struct GraphBuilder<W> {
    node_count: usize,
    arcs: Vec<Arc<W>>,
}

impl<W: Weight> GraphBuilder<W> {
    /// Creates a builder for nodes `1..=node_count`
    pub fn new(node_count: usize) -> Self {
        GraphBuilder {
            node_count,
            arcs: Vec::new(),
        }
    }

    /// Creates a builder that starts from an existing arc collection
    pub fn with_arcs(node_count: usize, arcs: Vec<Arc<W>>) -> Self {
        GraphBuilder { node_count, arcs }
    }

    pub fn add_arc(&mut self, from: NodeId, to: NodeId, length: W) -> &mut Self {
        self.arcs.push(Arc::new(from, to, length));
        self
    }

    pub fn extend<I>(&mut self, arcs: I) -> &mut Self
    where
        I: IntoIterator<Item = Arc<W>>,
    {
        self.arcs.extend(arcs);
        self
    }

    /// Validates endpoints, collapses parallel arcs and buckets arcs by source.
    ///
    /// Arcs are sorted by `(from, to, length)` and only the first arc of each
    /// `(from, to)` run is kept, so the shortest parallel arc survives.
    pub fn build(self) -> Result<AdjacencyList<W>> {
        let GraphBuilder { node_count, mut arcs } = self;

        if let Some(bad) = arcs
            .iter()
            .find(|arc| !in_range(arc.from, node_count) || !in_range(arc.to, node_count))
        {
            return Err(Error::InvalidEdge {
                from: bad.from,
                to: bad.to,
                node_count,
            });
        }

        let supplied = arcs.len();
        arcs.sort_unstable_by_key(Arc::sort_key);
        arcs.dedup_by_key(|arc| (arc.from, arc.to));

        let mut adjacency = vec![Vec::new(); node_count + 1];
        for arc in &arcs {
            adjacency[arc.from].push(*arc);
        }

        debug!(
            "built graph with {} nodes, {} arcs ({} parallel arcs dropped)",
            node_count,
            arcs.len(),
            supplied - arcs.len()
        );

        Ok(AdjacencyList {
            node_count,
            arc_count: arcs.len(),
            min_length: arcs.iter().map(|arc| arc.length).min(),
            max_length: arcs.iter().map(|arc| arc.length).max(),
            adjacency,
        })
    }
}

fn in_range(node: NodeId, node_count: usize) -> bool {
    node >= 1 && node <= node_count
}

/// Immutable adjacency structure indexed by source node.
///
/// Built once and shared read-only by every engine and every query.
#[derive(Debug, Clone)]
pub struct AdjacencyList<W> {
    node_count: usize,
    arc_count: usize,
    min_length: Option<W>,
    max_length: Option<W>,
    /// Outgoing arcs per node; slot 0 is always empty
    adjacency: Vec<Vec<Arc<W>>>,
}

impl<W: Weight> AdjacencyList<W> {
    /// Builds the adjacency structure for nodes `1..=node_count` from a flat arc list
    pub fn build(node_count: usize, arcs: Vec<Arc<W>>) -> Result<Self> {
        GraphBuilder::with_arcs(node_count, arcs).build()
    }

    /// Iterates over every node ID in the graph
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        1..=self.node_count
    }

    /// Iterates over every surviving arc, grouped by source node
    pub fn arcs(&self) -> impl Iterator<Item = &Arc<W>> + '_ {
        self.adjacency.iter().flatten()
    }

    pub fn min_arc_length(&self) -> Option<W> {
        self.min_length
    }
}

impl<W: Weight> Graph<W> for AdjacencyList<W> {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn arc_count(&self) -> usize {
        self.arc_count
    }

    fn outgoing(&self, node: NodeId) -> &[Arc<W>] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn first_negative_arc(&self) -> Option<Arc<W>> {
        match self.min_length {
            Some(min) if min.is_negative() => {
                self.arcs().find(|arc| arc.length.is_negative()).copied()
            }
            _ => None,
        }
    }

    fn max_arc_length(&self) -> Option<W> {
        self.max_length
    }
}
