use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::{NodeId, Weight};

/// Min-oriented binary heap of `(node, tentative distance)` entries.
///
/// Entries are never decreased in place; a node may be present several times
/// and the caller discards stale entries on pop (lazy deletion).
#[derive(Debug)]
pub struct DistanceHeap<W: Weight> {
    heap: BinaryHeap<Reverse<(W, NodeId)>>,
    pushes: usize,
}

impl<W: Weight> DistanceHeap<W> {
    pub fn new() -> Self {
        DistanceHeap {
            heap: BinaryHeap::new(),
            pushes: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DistanceHeap {
            heap: BinaryHeap::with_capacity(capacity),
            pushes: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total number of pushes since creation, duplicates included
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    pub fn push(&mut self, node: NodeId, distance: W) {
        self.pushes += 1;
        self.heap.push(Reverse((distance, node)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(NodeId, W)> {
        self.heap.pop().map(|Reverse((distance, node))| (node, distance))
    }

    pub fn peek(&self) -> Option<(NodeId, W)> {
        self.heap.peek().map(|Reverse((distance, node))| (*node, *distance))
    }
}

impl<W: Weight> Default for DistanceHeap<W> {
    fn default() -> Self {
        Self::new()
    }
}
