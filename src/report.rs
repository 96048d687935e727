use std::fmt;

use serde::Serialize;

use crate::algorithm::ShortestPathResult;
use crate::graph::{LabeledGraph, NodeId};
use crate::{Result, Weight};

/// Distance to one reachable node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeDistance {
    pub node: String,
    pub distance: f64,
}

/// Printable outcome of a shortest path query, by node label
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// Every reachable node, in graph insertion order
    Reachable {
        origin: String,
        distances: Vec<NodeDistance>,
    },
    Path {
        origin: String,
        destination: String,
        nodes: Vec<String>,
        length: f64,
    },
    NoPath {
        origin: String,
        destination: String,
    },
}

impl Report {
    /// Builds the report for `destination`, or for all reachable nodes if None.
    /// `result` must have been computed on `graph`.
    pub fn build(
        graph: &LabeledGraph<Weight>,
        result: &ShortestPathResult<Weight>,
        destination: Option<NodeId>,
    ) -> Report {
        let label = |node: NodeId| graph.label(node).unwrap_or_default().to_string();
        let origin = label(result.origin());

        let Some(destination) = destination else {
            let distances = graph
                .nodes()
                .filter_map(|(node, name)| {
                    result.record(node).map(|record| NodeDistance {
                        node: name.to_string(),
                        distance: record.distance.into_inner(),
                    })
                })
                .collect();
            return Report::Reachable { origin, distances };
        };

        match result.path_to(destination) {
            Some(path) => Report::Path {
                origin,
                destination: label(destination),
                nodes: path.into_iter().map(label).collect(),
                length: result.distance_to(destination).into_inner(),
            },
            None => Report::NoPath {
                origin,
                destination: label(destination),
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Reachable { origin, distances } => {
                write!(f, "Shortest paths from {}:", origin)?;
                for entry in distances {
                    write!(f, "\n{}: {:?}", entry.node, entry.distance)?;
                }
                Ok(())
            }
            Report::Path { nodes, length, .. } => {
                for node in nodes {
                    write!(f, "{} ", node)?;
                }
                write!(f, "{:?}", length)
            }
            Report::NoPath { origin, destination } => {
                write!(f, "No path exists from {} to {}", origin, destination)
            }
        }
    }
}
