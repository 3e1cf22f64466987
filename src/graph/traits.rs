use std::fmt::Debug;

use crate::graph::arc::{Arc, NodeId, Weight};

/// Trait representing a read-only weighted directed graph with nodes `1..=n`
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of arcs in the graph
    fn arc_count(&self) -> usize;

    /// Returns the outgoing arcs of a node, in ascending destination order
    fn outgoing(&self, node: NodeId) -> &[Arc<W>];

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: NodeId) -> bool {
        node >= 1 && node <= self.node_count()
    }

    /// Returns true if there's an arc between the two nodes
    fn has_arc(&self, from: NodeId, to: NodeId) -> bool {
        self.arc_length(from, to).is_some()
    }

    /// Gets the length of an arc if it exists
    fn arc_length(&self, from: NodeId, to: NodeId) -> Option<W> {
        if !self.has_node(from) {
            return None;
        }
        let arcs = self.outgoing(from);
        arcs.binary_search_by_key(&to, |arc| arc.to)
            .ok()
            .map(|idx| arcs[idx].length)
    }

    /// Returns the first arc with a negative length, if any
    fn first_negative_arc(&self) -> Option<Arc<W>>;

    /// Returns the largest arc length, or `None` for a graph without arcs
    fn max_arc_length(&self) -> Option<W>;
}
