use std::fmt::{Debug, Display};

use num_traits::{PrimInt, Signed};
use serde::{Deserialize, Serialize};

/// Node identifier. Valid nodes are `1..=node_count`; 0 is reserved.
pub type NodeId = usize;

/// Arc length domain shared by every engine.
///
/// Any signed primitive integer qualifies. Dijkstra and Dial additionally
/// require every length to be non-negative; SPFA and PAPE accept negative
/// lengths as long as no negative cycle is reachable from the source.
pub trait Weight: PrimInt + Signed + Debug + Display + Default + Send + Sync + 'static {}

impl<T> Weight for T where
    T: PrimInt + Signed + Debug + Display + Default + Send + Sync + 'static
{
}

/// An immutable directed, weighted arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arc<W> {
    pub from: NodeId,
    pub to: NodeId,
    pub length: W,
}

impl<W: Weight> Arc<W> {
    pub fn new(from: NodeId, to: NodeId, length: W) -> Self {
        Arc { from, to, length }
    }

    /// Sort key used when collapsing parallel arcs
    pub(crate) fn sort_key(&self) -> (NodeId, NodeId, W) {
        (self.from, self.to, self.length)
    }
}

impl<W: Weight> From<(NodeId, NodeId, W)> for Arc<W> {
    fn from((from, to, length): (NodeId, NodeId, W)) -> Self {
        Arc::new(from, to, length)
    }
}
