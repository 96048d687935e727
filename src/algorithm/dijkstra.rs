use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::algorithm::{PathRecord, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion.
///
/// Edge weights must be non-negative; this is not checked.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, origin: NodeId) -> Result<ShortestPathResult<W>> {
        if !graph.has_node(origin) {
            return Err(Error::InvalidNode(origin.index()));
        }

        let mut records: Vec<Option<PathRecord<W>>> = vec![None; graph.node_count()];
        records[origin.index()] = Some(PathRecord::origin());

        let mut frontier = Frontier::new();
        frontier.push(origin, W::zero());

        let mut settled = 0usize;
        let mut stale = 0usize;

        while let Some(entry) = frontier.pop() {
            let (u, dist_u) = (entry.node, entry.distance);

            // A shorter path to u was recorded after this entry was pushed
            if let Some(record) = &records[u.index()] {
                if record.distance < dist_u {
                    stale += 1;
                    continue;
                }
            }
            settled += 1;

            for (v, weight) in graph.neighbors_of(u) {
                let candidate = dist_u + weight;

                // Ties keep the predecessor found first
                let improves = match &records[v.index()] {
                    None => true,
                    Some(record) => candidate < record.distance,
                };

                if improves {
                    records[v.index()] = Some(PathRecord {
                        distance: candidate,
                        predecessor: Some(u),
                    });
                    frontier.push(v, candidate);
                }
            }
        }

        debug!(
            "Dijkstra from {}: {} nodes settled, {} stale entries skipped",
            origin, settled, stale
        );

        Ok(ShortestPathResult::from_records(records, origin))
    }
}
