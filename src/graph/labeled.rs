use crate::graph::traits::{Graph, MutableGraph, NodeId};
use log::info;
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// A node record in the arena: its label and outgoing edges
#[derive(Debug, Clone)]
struct NodeEntry<W> {
    label: String,

    /// Outgoing edges in first-insertion order: [(target, weight)]
    neighbors: Vec<(NodeId, W)>,
}

/// A directed graph whose nodes are identified by unique string labels.
///
/// Nodes are stored in an arena and addressed by [`NodeId`], so a node's id is
/// its insertion position and never changes. There are no removal operations.
#[derive(Debug, Clone)]
pub struct LabeledGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    nodes: Vec<NodeEntry<W>>,

    /// label -> arena index
    index: HashMap<String, NodeId>,

    edge_count: usize,
}

impl<W> LabeledGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        LabeledGraph {
            nodes: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Looks up a node by label without creating it
    pub fn node(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Returns the label of a node, or None if the id belongs to another graph
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.index()).map(|entry| entry.label.as_str())
    }

    /// Iterates over all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, entry)| (NodeId::new(i), entry.label.as_str()))
    }

    /// Iterates over every edge as (from, to, weight)
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, W)> + '_ {
        self.nodes.iter().enumerate().flat_map(|(i, entry)| {
            entry
                .neighbors
                .iter()
                .map(move |&(to, weight)| (NodeId::new(i), to, weight))
        })
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.edges().all(|(_, _, weight)| weight >= W::zero())
    }

    /// Logs the size of the graph
    pub fn log_summary(&self) {
        info!(
            "Graph: {} nodes, {} edges",
            self.node_count(),
            self.edge_count()
        );
    }
}

impl<W> Default for LabeledGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for LabeledGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors_of(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_> {
        if let Some(entry) = self.nodes.get(node.index()) {
            Box::new(entry.neighbors.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<W> MutableGraph<W> for LabeledGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn get_or_create_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }

        let id = NodeId::new(self.nodes.len());
        self.nodes.push(NodeEntry {
            label: label.to_string(),
            neighbors: Vec::new(),
        });
        self.index.insert(label.to_string(), id);
        id
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> bool {
        if !self.has_node(from) || !self.has_node(to) {
            return false;
        }

        let outgoing = &mut self.nodes[from.index()].neighbors;

        // Last write wins for an existing ordered pair
        if let Some(edge) = outgoing.iter_mut().find(|(target, _)| *target == to) {
            edge.1 = weight;
            return true;
        }

        outgoing.push((to, weight));
        self.edge_count += 1;
        true
    }
}
