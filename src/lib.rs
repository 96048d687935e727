//! Shortest Paths - Dijkstra single-source shortest paths over labeled graphs
//!
//! A graph of uniquely labeled nodes (sidewalk intersections, for instance) is
//! built once, usually by one of the parsers in [`io`]. A single `compute`
//! from an origin yields a [`ShortestPathResult`] that answers distance and
//! path queries until the next computation replaces it.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod report;

pub use algorithm::{
    dijkstra::Dijkstra, engine::ShortestPaths, PathRecord, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{LabeledGraph, NodeId};
pub use io::{parse_graph, GraphFormat};
pub use report::Report;

/// Edge weight produced by the graph parsers
pub type Weight = ordered_float::OrderedFloat<f64>;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid node ID: {0}")]
    InvalidNode(usize),

    #[error("Unknown node label: {0}")]
    UnknownNode(String),

    #[error("No shortest paths computed yet")]
    NotComputed,

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Could not open file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Could not serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
