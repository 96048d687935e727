//! Graph providers: build a [`LabeledGraph`] from a file on disk.
//!
//! Two formats are supported, selected by name on the command line:
//! `basic` edge-list text files ([`basic`]) and `db` sidewalk CSV datasets ([`db`]).

pub mod basic;
pub mod db;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::info;
use ordered_float::OrderedFloat;

use crate::graph::LabeledGraph;
use crate::{Error, Result, Weight};

pub use basic::BasicParser;
pub use db::DbParser;

/// Supported graph file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    /// Whitespace separated `FROM TO WEIGHT` lines
    Basic,
    /// CSV sidewalk segments with `start_code`, `end_code` and `length` columns
    Db,
}

impl FromStr for GraphFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "basic" => Ok(GraphFormat::Basic),
            "db" => Ok(GraphFormat::Db),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFormat::Basic => write!(f, "basic"),
            GraphFormat::Db => write!(f, "db"),
        }
    }
}

/// Reads and parses a graph file in the given format.
///
/// The whole file is read before parsing, so any failure to open or read it
/// is an [`Error::Io`] naming the path; the parsers only see file contents.
pub fn parse_graph(format: GraphFormat, path: impl AsRef<Path>) -> Result<LabeledGraph<Weight>> {
    let path = path.as_ref();
    let contents = fs::read(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;

    info!("Parsing {} graph from {} ({} bytes)", format, path.display(), contents.len());
    let graph = match format {
        GraphFormat::Basic => BasicParser::new().parse(contents.as_slice())?,
        GraphFormat::Db => DbParser::new().parse(contents.as_slice())?,
    };
    graph.log_summary();

    Ok(graph)
}

/// Rejects weights the shortest path search cannot handle
pub(crate) fn check_weight(value: f64, line: usize) -> Result<Weight> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::Parse {
            line,
            message: format!("weight must be a non-negative number, got {}", value),
        });
    }
    Ok(OrderedFloat(value))
}
