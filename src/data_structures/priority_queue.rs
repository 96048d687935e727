use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::graph::NodeId;

/// A tentative distance for a node, ordered so that `BinaryHeap` pops the
/// smallest distance first. Equal distances pop in ascending node order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry<W> {
    pub distance: W,
    pub node: NodeId,
}

impl<W: Ord> Ord for FrontierEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<W: Ord> PartialOrd for FrontierEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-ordered frontier of tentative node distances for Dijkstra.
///
/// There is no decrease-key: improving a node's distance pushes a fresh entry
/// and the outdated one stays in the heap until it is popped. Callers filter
/// such stale entries against their own distance records.
#[derive(Debug)]
pub struct Frontier<W>
where
    W: Ord + Copy + Debug,
{
    heap: BinaryHeap<FrontierEntry<W>>,
}

impl<W> Frontier<W>
where
    W: Ord + Copy + Debug,
{
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if no entries remain, stale ones included
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Adds an entry, even if the node already has one
    pub fn push(&mut self, node: NodeId, distance: W) {
        self.heap.push(FrontierEntry { distance, node });
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<FrontierEntry<W>> {
        self.heap.pop()
    }
}

impl<W> Default for Frontier<W>
where
    W: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
