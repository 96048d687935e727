use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::path::reconstruct_path;
use crate::graph::NodeId;

/// Best-known distance from the origin and the node it was reached from.
/// The origin is the only record without a predecessor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathRecord<W> {
    pub distance: W,
    pub predecessor: Option<NodeId>,
}

impl<W> PathRecord<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn origin() -> Self {
        PathRecord {
            distance: W::zero(),
            predecessor: None,
        }
    }
}

/// Result of one shortest path computation.
///
/// A node has a record iff it is reachable from the origin. Queries take node
/// ids of the graph the result was computed on; an id from any other graph is a
/// programmer error and panics instead of reporting the node as unreachable.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Records indexed by node id
    records: Vec<Option<PathRecord<W>>>,

    origin: NodeId,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn from_records(records: Vec<Option<PathRecord<W>>>, origin: NodeId) -> Self {
        ShortestPathResult { records, origin }
    }

    /// The node the computation started from
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// The record for a node, or None if it is unreachable
    ///
    /// # Panics
    /// If `node` is not a node of the computed graph.
    pub fn record(&self, node: NodeId) -> Option<&PathRecord<W>> {
        self.records[node.index()].as_ref()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.record(node).is_some()
    }

    /// Length of the shortest path to `node`, or positive infinity if there is none
    ///
    /// # Panics
    /// If `node` is not a node of the computed graph.
    pub fn distance_to(&self, node: NodeId) -> W {
        self.record(node)
            .map_or_else(W::infinity, |record| record.distance)
    }

    /// Nodes along the shortest path, origin first and `node` last.
    /// Returns None if `node` is unreachable; the origin's path is just itself.
    ///
    /// # Panics
    /// If `node` is not a node of the computed graph.
    pub fn path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        self.record(node)?;
        reconstruct_path(&self.records, node)
    }

    /// Every reachable node with its distance, in node id order
    pub fn reachable(&self) -> impl Iterator<Item = (NodeId, W)> + '_ {
        self.records.iter().enumerate().filter_map(|(i, record)| {
            record
                .as_ref()
                .map(|record| (NodeId::new(i), record.distance))
        })
    }

    /// Number of reachable nodes, the origin included
    pub fn reachable_count(&self) -> usize {
        self.records.iter().filter(|record| record.is_some()).count()
    }
}
