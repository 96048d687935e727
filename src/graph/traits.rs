use std::fmt::{self, Debug};
use num_traits::{Float, Zero};

/// Stable index of a node inside the graph that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges of a node, in insertion order
    fn neighbors_of(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_>;

    /// Returns true if the node belongs to the graph
    fn has_node(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<W> {
        self.neighbors_of(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}

/// Trait for building a graph out of labeled nodes
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the node with this label, creating it on first use
    fn get_or_create_node(&mut self, label: &str) -> NodeId;

    /// Adds a directed edge, replacing the weight of an existing edge between
    /// the same ordered pair. Returns false if either node is unknown.
    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> bool;
}
