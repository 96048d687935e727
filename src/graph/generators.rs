use crate::graph::{LabeledGraph, MutableGraph, NodeId};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with n nodes labeled "N0".."N{n-1}" and
/// roughly `edge_factor * n` edges with weights in [1, 100).
/// The same seed always yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, seed: u64) -> LabeledGraph<OrderedFloat<f64>> {
    let mut graph: LabeledGraph<OrderedFloat<f64>> = LabeledGraph::new();
    let mut rng = StdRng::seed_from_u64(seed);

    let ids: Vec<NodeId> = (0..n)
        .map(|i| graph.get_or_create_node(&format!("N{}", i)))
        .collect();

    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = ids[rng.gen_range(0..n)];
        let v = ids[rng.gen_range(0..n)];
        let weight = OrderedFloat(rng.gen_range(1.0..100.0));
        graph.add_edge(u, v, weight);
    }

    graph
}

/// Generates a width x height grid with 4-connectivity and unit weights.
/// Nodes are labeled "x,y".
pub fn generate_grid(width: usize, height: usize) -> LabeledGraph<OrderedFloat<f64>> {
    let mut graph: LabeledGraph<OrderedFloat<f64>> = LabeledGraph::new();

    for y in 0..height {
        for x in 0..width {
            graph.get_or_create_node(&format!("{},{}", x, y));
        }
    }

    let get_index = |x: usize, y: usize| NodeId::new(y * width + x);

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);

            if x > 0 {
                graph.add_edge(current, get_index(x - 1, y), OrderedFloat(1.0));
            }
            if x + 1 < width {
                graph.add_edge(current, get_index(x + 1, y), OrderedFloat(1.0));
            }
            if y > 0 {
                graph.add_edge(current, get_index(x, y - 1), OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_edge(current, get_index(x, y + 1), OrderedFloat(1.0));
            }
        }
    }

    graph
}
