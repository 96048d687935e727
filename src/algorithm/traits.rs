use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::algorithm::ShortestPathResult;
use crate::graph::{Graph, NodeId};
use crate::Result;

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from an origin node to every reachable node.
    /// Each call builds a new result; nothing is shared with earlier calls.
    fn compute_shortest_paths(&self, graph: &G, origin: NodeId) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
