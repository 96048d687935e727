use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Shortest path engine bound to one graph, holding the result of the most
/// recent [`compute`](ShortestPaths::compute).
///
/// Each `compute` replaces the previous result wholesale. Queries issued before
/// the first `compute` fail with [`Error::NotComputed`], and ids outside the
/// graph fail with [`Error::InvalidNode`]; neither is reported as unreachable.
#[derive(Debug)]
pub struct ShortestPaths<'g, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    graph: &'g G,
    algorithm: Dijkstra,
    result: Option<ShortestPathResult<W>>,
}

impl<'g, W, G> ShortestPaths<'g, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    pub fn new(graph: &'g G) -> Self {
        ShortestPaths {
            graph,
            algorithm: Dijkstra::new(),
            result: None,
        }
    }

    /// Computes shortest paths from `origin`, discarding any earlier result
    pub fn compute(&mut self, origin: NodeId) -> Result<&ShortestPathResult<W>> {
        // Drop the old result first so a failed compute leaves no stale state
        self.result = None;
        let result: ShortestPathResult<W> =
            self.algorithm.compute_shortest_paths(self.graph, origin)?;
        Ok(&*self.result.insert(result))
    }

    /// The result of the last `compute`
    pub fn result(&self) -> Result<&ShortestPathResult<W>> {
        self.result.as_ref().ok_or(Error::NotComputed)
    }

    /// Length of the shortest path to `node`, or positive infinity if unreachable
    pub fn distance_to(&self, node: NodeId) -> Result<W> {
        let result = self.checked(node)?;
        Ok(result.distance_to(node))
    }

    /// Shortest path to `node` origin-first, or None if unreachable
    pub fn path_to(&self, node: NodeId) -> Result<Option<Vec<NodeId>>> {
        let result = self.checked(node)?;
        Ok(result.path_to(node))
    }

    fn checked(&self, node: NodeId) -> Result<&ShortestPathResult<W>> {
        let result = self.result()?;
        if !self.graph.has_node(node) {
            return Err(Error::InvalidNode(node.index()));
        }
        Ok(result)
    }
}
